pub mod bookmark;
pub mod entry;
pub mod lookup;
pub mod user;
