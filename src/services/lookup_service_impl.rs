//! `SeaORM` implementation of the `LookupService` trait.

use crate::api::types::{ColorDto, RatingDto, WhiskeyTypeDto};
use crate::db::Store;
use crate::domain::CurrentUser;
use crate::services::lookup_service::{LookupError, LookupService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmLookupService {
    store: Store,
}

impl SeaOrmLookupService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn require_admin(caller: &CurrentUser) -> Result<(), LookupError> {
        if caller.is_admin {
            Ok(())
        } else {
            Err(LookupError::Forbidden)
        }
    }
}

#[async_trait]
impl LookupService for SeaOrmLookupService {
    async fn list_types(&self) -> Result<Vec<WhiskeyTypeDto>, LookupError> {
        let types = self.store.list_whiskey_types().await?;
        Ok(types.into_iter().map(Into::into).collect())
    }

    async fn get_type(&self, id: i32) -> Result<WhiskeyTypeDto, LookupError> {
        self.store
            .get_whiskey_type(id)
            .await?
            .map(Into::into)
            .ok_or(LookupError::TypeNotFound(id))
    }

    async fn create_type(
        &self,
        caller: &CurrentUser,
        label: &str,
    ) -> Result<WhiskeyTypeDto, LookupError> {
        Self::require_admin(caller)?;

        let label = label.trim();
        if label.is_empty() {
            return Err(LookupError::Validation("label cannot be empty".to_string()));
        }

        let created = self.store.create_whiskey_type(label).await?;
        Ok(created.into())
    }

    async fn delete_type(&self, caller: &CurrentUser, id: i32) -> Result<(), LookupError> {
        Self::require_admin(caller)?;

        if !self.store.delete_whiskey_type(id).await? {
            return Err(LookupError::TypeNotFound(id));
        }

        info!("{} removed whiskey type {}", caller.username, id);
        Ok(())
    }

    async fn list_colors(&self) -> Result<Vec<ColorDto>, LookupError> {
        let colors = self.store.list_colors().await?;
        Ok(colors.into_iter().map(Into::into).collect())
    }

    async fn get_color(&self, id: i32) -> Result<ColorDto, LookupError> {
        self.store
            .get_color(id)
            .await?
            .map(Into::into)
            .ok_or(LookupError::ColorNotFound(id))
    }

    async fn list_ratings(&self) -> Result<Vec<RatingDto>, LookupError> {
        let ratings = self.store.list_ratings().await?;
        Ok(ratings.into_iter().map(Into::into).collect())
    }

    async fn get_rating(&self, id: i32) -> Result<RatingDto, LookupError> {
        self.store
            .get_rating(id)
            .await?
            .map(Into::into)
            .ok_or(LookupError::RatingNotFound(id))
    }
}
