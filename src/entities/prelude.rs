pub use super::bookmarks::Entity as Bookmarks;
pub use super::colors::Entity as Colors;
pub use super::entries::Entity as Entries;
pub use super::ratings::Entity as Ratings;
pub use super::users::Entity as Users;
pub use super::whiskey_types::Entity as WhiskeyTypes;
