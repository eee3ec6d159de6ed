//! Domain service for tasting entries.
//!
//! Anyone may read entries. Creating one requires a signed-in author, and
//! only the author may replace or delete it afterwards.

use crate::api::types::EntryView;
use crate::db::EntryFields;
use crate::domain::{CurrentUser, EntryId};
use thiserror::Error;

/// Errors specific to entry operations.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Entry {0} not found")]
    NotFound(EntryId),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    /// A type, color or rating id in the payload that does not exist.
    #[error("{0} not found")]
    ReferenceNotFound(String),

    #[error("You do not own entry {0}")]
    Forbidden(EntryId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for EntryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait EntryService: Send + Sync {
    /// Lists entries newest first, optionally only those written by `username`.
    async fn list(
        &self,
        viewer: Option<&CurrentUser>,
        username: Option<&str>,
    ) -> Result<Vec<EntryView>, EntryError>;

    async fn get(&self, viewer: Option<&CurrentUser>, id: EntryId)
    -> Result<EntryView, EntryError>;

    /// Publishes a new entry owned by `author`, dated today.
    async fn create(
        &self,
        author: &CurrentUser,
        fields: EntryFields,
    ) -> Result<EntryView, EntryError>;

    /// Replaces every mutable field. Owner and publication date are kept.
    async fn update(
        &self,
        caller: &CurrentUser,
        id: EntryId,
        fields: EntryFields,
    ) -> Result<(), EntryError>;

    async fn delete(&self, caller: &CurrentUser, id: EntryId) -> Result<(), EntryError>;
}
