pub mod prelude;

pub mod bookmarks;
pub mod colors;
pub mod entries;
pub mod ratings;
pub mod users;
pub mod whiskey_types;
