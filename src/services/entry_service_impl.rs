//! `SeaORM` implementation of the `EntryService` trait.

use crate::api::types::EntryView;
use crate::db::{EntryFields, Store};
use crate::domain::{CurrentUser, EntryId, is_owner};
use crate::services::entry_service::{EntryError, EntryService};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct SeaOrmEntryService {
    store: Store,
}

impl SeaOrmEntryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Every id the fields point at must exist.
    async fn check_references(&self, fields: &EntryFields) -> Result<(), EntryError> {
        if self.store.get_whiskey_type(fields.type_id).await?.is_none() {
            return Err(EntryError::ReferenceNotFound(format!(
                "Whiskey type {}",
                fields.type_id
            )));
        }

        if let Some(color_id) = fields.color_id
            && self.store.get_color(color_id).await?.is_none()
        {
            return Err(EntryError::ReferenceNotFound(format!("Color {color_id}")));
        }

        if self.store.get_rating(fields.rating_id).await?.is_none() {
            return Err(EntryError::ReferenceNotFound(format!(
                "Rating {}",
                fields.rating_id
            )));
        }

        Ok(())
    }

    /// Loads the entry and checks that `caller` owns it.
    async fn owned_by(&self, caller: &CurrentUser, id: EntryId) -> Result<(), EntryError> {
        let entry = self
            .store
            .get_entry_model(id.value())
            .await?
            .ok_or(EntryError::NotFound(id))?;

        if !is_owner(Some(caller), &entry) {
            warn!("{} tried to modify entry {} they do not own", caller.username, id);
            return Err(EntryError::Forbidden(id));
        }

        Ok(())
    }
}

#[async_trait]
impl EntryService for SeaOrmEntryService {
    async fn list(
        &self,
        viewer: Option<&CurrentUser>,
        username: Option<&str>,
    ) -> Result<Vec<EntryView>, EntryError> {
        let records = match username {
            Some(username) => {
                let owner = self
                    .store
                    .get_user_by_username(username)
                    .await?
                    .ok_or_else(|| EntryError::UserNotFound(username.to_string()))?;
                self.store.list_entries_by_owner(owner.id).await?
            }
            None => self.store.list_entries().await?,
        };

        Ok(records
            .into_iter()
            .map(|record| EntryView::build(record, viewer))
            .collect())
    }

    async fn get(
        &self,
        viewer: Option<&CurrentUser>,
        id: EntryId,
    ) -> Result<EntryView, EntryError> {
        let record = self
            .store
            .get_entry(id.value())
            .await?
            .ok_or(EntryError::NotFound(id))?;

        Ok(EntryView::build(record, viewer))
    }

    async fn create(
        &self,
        author: &CurrentUser,
        fields: EntryFields,
    ) -> Result<EntryView, EntryError> {
        self.check_references(&fields).await?;

        let id = EntryId::new(self.store.create_entry(author.id.value(), fields).await?);
        self.get(Some(author), id).await
    }

    async fn update(
        &self,
        caller: &CurrentUser,
        id: EntryId,
        fields: EntryFields,
    ) -> Result<(), EntryError> {
        self.owned_by(caller, id).await?;
        self.check_references(&fields).await?;

        if !self.store.update_entry(id.value(), fields).await? {
            return Err(EntryError::NotFound(id));
        }

        info!("{} updated entry {}", caller.username, id);
        Ok(())
    }

    async fn delete(&self, caller: &CurrentUser, id: EntryId) -> Result<(), EntryError> {
        self.owned_by(caller, id).await?;

        if !self.store.delete_entry(id.value()).await? {
            return Err(EntryError::NotFound(id));
        }

        info!("{} deleted entry {}", caller.username, id);
        Ok(())
    }
}
