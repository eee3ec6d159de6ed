//! `SeaORM` implementation of the `BookmarkService` trait.

use crate::api::types::{BookmarkEntry, BookmarkView, EntryView};
use crate::db::Store;
use crate::domain::{BookmarkId, CurrentUser, EntryId, is_owner};
use crate::entities::bookmarks;
use crate::services::bookmark_service::{BookmarkError, BookmarkService};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{info, warn};

pub struct SeaOrmBookmarkService {
    store: Store,
}

impl SeaOrmBookmarkService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn render(
        &self,
        rows: Vec<bookmarks::Model>,
        viewer: Option<&CurrentUser>,
        expand_entry: bool,
    ) -> Result<Vec<BookmarkView>, BookmarkError> {
        if !expand_entry {
            return Ok(rows
                .iter()
                .map(|b| BookmarkView::build(b, BookmarkEntry::Id(b.entry_id), viewer))
                .collect());
        }

        let mut entry_ids: Vec<i32> = rows.iter().map(|b| b.entry_id).collect();
        entry_ids.sort_unstable();
        entry_ids.dedup();

        let entries: HashMap<i32, EntryView> = self
            .store
            .get_entries_by_ids(&entry_ids)
            .await?
            .into_iter()
            .map(|record| {
                let view = EntryView::build(record, viewer);
                (view.id, view)
            })
            .collect();

        rows.iter()
            .map(|bookmark| {
                let entry = entries.get(&bookmark.entry_id).cloned().ok_or(
                    BookmarkError::EntryNotFound(EntryId::new(bookmark.entry_id)),
                )?;
                Ok(BookmarkView::build(
                    bookmark,
                    BookmarkEntry::Expanded(Box::new(entry)),
                    viewer,
                ))
            })
            .collect()
    }
}

#[async_trait]
impl BookmarkService for SeaOrmBookmarkService {
    async fn list(
        &self,
        viewer: Option<&CurrentUser>,
        username: Option<&str>,
        expand_entry: bool,
    ) -> Result<Vec<BookmarkView>, BookmarkError> {
        let rows = match username {
            Some(username) => {
                let owner = self
                    .store
                    .get_user_by_username(username)
                    .await?
                    .ok_or_else(|| BookmarkError::UserNotFound(username.to_string()))?;
                self.store.list_bookmarks_by_owner(owner.id).await?
            }
            None => self.store.list_bookmarks().await?,
        };

        self.render(rows, viewer, expand_entry).await
    }

    async fn get(
        &self,
        viewer: Option<&CurrentUser>,
        id: BookmarkId,
    ) -> Result<BookmarkView, BookmarkError> {
        let bookmark = self
            .store
            .get_bookmark(id.value())
            .await?
            .ok_or(BookmarkError::NotFound(id))?;

        Ok(BookmarkView::build(
            &bookmark,
            BookmarkEntry::Id(bookmark.entry_id),
            viewer,
        ))
    }

    async fn create(
        &self,
        owner: &CurrentUser,
        entry_id: EntryId,
    ) -> Result<BookmarkView, BookmarkError> {
        if self.store.get_entry_model(entry_id.value()).await?.is_none() {
            return Err(BookmarkError::EntryNotFound(entry_id));
        }

        let bookmark = self
            .store
            .create_bookmark(owner.id.value(), entry_id.value())
            .await?;

        Ok(BookmarkView::build(
            &bookmark,
            BookmarkEntry::Id(bookmark.entry_id),
            Some(owner),
        ))
    }

    async fn delete(&self, caller: &CurrentUser, id: BookmarkId) -> Result<(), BookmarkError> {
        let bookmark = self
            .store
            .get_bookmark(id.value())
            .await?
            .ok_or(BookmarkError::NotFound(id))?;

        if !is_owner(Some(caller), &bookmark) {
            warn!("{} tried to delete bookmark {} they do not own", caller.username, id);
            return Err(BookmarkError::Forbidden(id));
        }

        if !self.store.delete_bookmark(id.value()).await? {
            return Err(BookmarkError::NotFound(id));
        }

        info!("{} removed bookmark {}", caller.username, id);
        Ok(())
    }
}
