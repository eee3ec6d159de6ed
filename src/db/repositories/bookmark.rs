use crate::entities::{bookmarks, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

/// Repository for saved entries
pub struct BookmarkRepository {
    conn: DatabaseConnection,
}

impl BookmarkRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Newest first.
    pub async fn list(&self, owner_id: Option<i32>) -> Result<Vec<bookmarks::Model>> {
        let mut query = Bookmarks::find();
        if let Some(owner_id) = owner_id {
            query = query.filter(bookmarks::Column::UserId.eq(owner_id));
        }

        query
            .order_by_desc(bookmarks::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list bookmarks")
    }

    pub async fn get(&self, id: i32) -> Result<Option<bookmarks::Model>> {
        Bookmarks::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query bookmark")
    }

    pub async fn create(&self, user_id: i32, entry_id: i32) -> Result<bookmarks::Model> {
        let model = bookmarks::ActiveModel {
            user_id: Set(user_id),
            entry_id: Set(entry_id),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .context("Failed to insert bookmark")?;

        info!("User {} bookmarked entry {}", user_id, entry_id);
        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Bookmarks::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete bookmark")?;
        Ok(result.rows_affected > 0)
    }
}
