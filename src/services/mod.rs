pub mod bookmark_service;
pub mod bookmark_service_impl;
pub use bookmark_service::{BookmarkError, BookmarkService};
pub use bookmark_service_impl::SeaOrmBookmarkService;

pub mod entry_service;
pub mod entry_service_impl;
pub use entry_service::{EntryError, EntryService};
pub use entry_service_impl::SeaOrmEntryService;

pub mod lookup_service;
pub mod lookup_service_impl;
pub use lookup_service::{LookupError, LookupService};
pub use lookup_service_impl::SeaOrmLookupService;
