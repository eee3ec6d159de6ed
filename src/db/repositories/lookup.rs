use crate::entities::{colors, prelude::*, ratings, whiskey_types};
use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

/// Repository for the reference tables entries point at.
pub struct LookupRepository {
    conn: DatabaseConnection,
}

impl LookupRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Whiskey Types
    // ========================================================================

    pub async fn list_types(&self) -> Result<Vec<whiskey_types::Model>> {
        WhiskeyTypes::find()
            .order_by_asc(whiskey_types::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list whiskey types")
    }

    pub async fn get_type(&self, id: i32) -> Result<Option<whiskey_types::Model>> {
        WhiskeyTypes::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query whiskey type")
    }

    pub async fn create_type(&self, label: &str) -> Result<whiskey_types::Model> {
        let model = whiskey_types::ActiveModel {
            label: Set(label.to_string()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .context("Failed to insert whiskey type")?;

        info!("Added whiskey type {}: {}", model.id, model.label);
        Ok(model)
    }

    pub async fn delete_type(&self, id: i32) -> Result<bool> {
        let result = WhiskeyTypes::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete whiskey type")?;
        Ok(result.rows_affected > 0)
    }

    // ========================================================================
    // Colors
    // ========================================================================

    pub async fn list_colors(&self) -> Result<Vec<colors::Model>> {
        Colors::find()
            .order_by_asc(colors::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list colors")
    }

    pub async fn get_color(&self, id: i32) -> Result<Option<colors::Model>> {
        Colors::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query color")
    }

    // ========================================================================
    // Ratings
    // ========================================================================

    pub async fn list_ratings(&self) -> Result<Vec<ratings::Model>> {
        Ratings::find()
            .order_by_asc(ratings::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list ratings")
    }

    pub async fn get_rating(&self, id: i32) -> Result<Option<ratings::Model>> {
        Ratings::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query rating")
    }
}
