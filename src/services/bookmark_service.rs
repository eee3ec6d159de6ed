//! Domain service for bookmarks, the entries a user has saved.

use crate::api::types::BookmarkView;
use crate::domain::{BookmarkId, CurrentUser, EntryId};
use thiserror::Error;

/// Errors specific to bookmark operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Bookmark {0} not found")]
    NotFound(BookmarkId),

    #[error("Entry {0} not found")]
    EntryNotFound(EntryId),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("You do not own bookmark {0}")]
    Forbidden(BookmarkId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for BookmarkError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait BookmarkService: Send + Sync {
    /// Lists bookmarks newest first. With `expand_entry` each bookmark embeds
    /// its full entry instead of the entry id.
    async fn list(
        &self,
        viewer: Option<&CurrentUser>,
        username: Option<&str>,
        expand_entry: bool,
    ) -> Result<Vec<BookmarkView>, BookmarkError>;

    async fn get(
        &self,
        viewer: Option<&CurrentUser>,
        id: BookmarkId,
    ) -> Result<BookmarkView, BookmarkError>;

    async fn create(
        &self,
        owner: &CurrentUser,
        entry_id: EntryId,
    ) -> Result<BookmarkView, BookmarkError>;

    async fn delete(&self, caller: &CurrentUser, id: BookmarkId) -> Result<(), BookmarkError>;
}
