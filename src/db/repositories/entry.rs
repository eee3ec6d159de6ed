use crate::db::repositories::user::User;
use crate::entities::{bookmarks, colors, entries, prelude::*, ratings, users, whiskey_types};
use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;
use tracing::info;

/// Every mutable column of an entry. Owner and publication date are not here.
#[derive(Debug, Clone)]
pub struct EntryFields {
    pub whiskey: String,
    pub type_id: i32,
    pub country: String,
    pub part_of_country: Option<String>,
    pub age_in_years: Option<f64>,
    pub proof: f64,
    pub color_id: Option<i32>,
    pub mash_bill: Option<String>,
    pub maturation_details: Option<String>,
    pub nose: String,
    pub palate: String,
    pub finish: String,
    pub rating_id: i32,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub published: bool,
}

impl EntryFields {
    fn apply(self, active: &mut entries::ActiveModel) {
        active.whiskey = Set(self.whiskey);
        active.type_id = Set(self.type_id);
        active.country = Set(self.country);
        active.part_of_country = Set(self.part_of_country);
        active.age_in_years = Set(self.age_in_years);
        active.proof = Set(self.proof);
        active.color_id = Set(self.color_id);
        active.mash_bill = Set(self.mash_bill);
        active.maturation_details = Set(self.maturation_details);
        active.nose = Set(self.nose);
        active.palate = Set(self.palate);
        active.finish = Set(self.finish);
        active.rating_id = Set(self.rating_id);
        active.notes = Set(self.notes);
        active.image_url = Set(self.image_url);
        active.published = Set(self.published);
    }
}

/// An entry joined with the rows it references.
#[derive(Debug, Clone)]
pub struct EntryRecord {
    pub entry: entries::Model,
    pub whiskey_type: whiskey_types::Model,
    pub color: Option<colors::Model>,
    pub rating: ratings::Model,
    pub author: User,
}

/// Repository for tasting entries
pub struct EntryRepository {
    conn: DatabaseConnection,
}

impl EntryRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Newest publication date first; same-day entries newest id first.
    pub async fn list(&self, owner_id: Option<i32>) -> Result<Vec<EntryRecord>> {
        let mut query = Entries::find();
        if let Some(owner_id) = owner_id {
            query = query.filter(entries::Column::UserId.eq(owner_id));
        }

        let rows = query
            .order_by_desc(entries::Column::PublicationDate)
            .order_by_desc(entries::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list entries")?;

        self.hydrate(rows).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<EntryRecord>> {
        let Some(row) = self.get_model(id).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    pub async fn get_model(&self, id: i32) -> Result<Option<entries::Model>> {
        Entries::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query entry")
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<EntryRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Entries::find()
            .filter(entries::Column::Id.is_in(ids.iter().copied()))
            .all(&self.conn)
            .await
            .context("Failed to query entries by id")?;

        self.hydrate(rows).await
    }

    pub async fn create(&self, owner_id: i32, fields: EntryFields) -> Result<i32> {
        let mut active = entries::ActiveModel {
            user_id: Set(owner_id),
            publication_date: Set(chrono::Utc::now().date_naive()),
            ..Default::default()
        };
        fields.apply(&mut active);

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert entry")?;

        info!("User {} published entry {}: {}", owner_id, model.id, model.whiskey);
        Ok(model.id)
    }

    /// Replace every mutable field. Returns false if the entry is gone.
    pub async fn update(&self, id: i32, fields: EntryFields) -> Result<bool> {
        let Some(existing) = self.get_model(id).await? else {
            return Ok(false);
        };

        let mut active: entries::ActiveModel = existing.into();
        fields.apply(&mut active);
        active
            .update(&self.conn)
            .await
            .context("Failed to update entry")?;

        Ok(true)
    }

    /// Delete an entry together with the bookmarks pointing at it.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        Bookmarks::delete_many()
            .filter(bookmarks::Column::EntryId.eq(id))
            .exec(&txn)
            .await
            .context("Failed to delete bookmarks for entry")?;

        let result = Entries::delete_by_id(id)
            .exec(&txn)
            .await
            .context("Failed to delete entry")?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    async fn hydrate(&self, rows: Vec<entries::Model>) -> Result<Vec<EntryRecord>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let type_ids: Vec<i32> = rows.iter().map(|e| e.type_id).collect();
        let color_ids: Vec<i32> = rows.iter().filter_map(|e| e.color_id).collect();
        let rating_ids: Vec<i32> = rows.iter().map(|e| e.rating_id).collect();
        let user_ids: Vec<i32> = rows.iter().map(|e| e.user_id).collect();

        let types: HashMap<i32, whiskey_types::Model> = WhiskeyTypes::find()
            .filter(whiskey_types::Column::Id.is_in(type_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let colors: HashMap<i32, colors::Model> = if color_ids.is_empty() {
            HashMap::new()
        } else {
            Colors::find()
                .filter(colors::Column::Id.is_in(color_ids))
                .all(&self.conn)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let ratings: HashMap<i32, ratings::Model> = Ratings::find()
            .filter(ratings::Column::Id.is_in(rating_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let authors: HashMap<i32, User> = Users::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from(u)))
            .collect();

        rows.into_iter()
            .map(|entry| {
                let whiskey_type = types.get(&entry.type_id).cloned().with_context(|| {
                    format!("Entry {} references missing type {}", entry.id, entry.type_id)
                })?;
                let rating = ratings.get(&entry.rating_id).cloned().with_context(|| {
                    format!(
                        "Entry {} references missing rating {}",
                        entry.id, entry.rating_id
                    )
                })?;
                let author = authors.get(&entry.user_id).cloned().with_context(|| {
                    format!("Entry {} references missing user {}", entry.id, entry.user_id)
                })?;
                let color = entry.color_id.and_then(|id| colors.get(&id).cloned());

                Ok(EntryRecord {
                    entry,
                    whiskey_type,
                    color,
                    rating,
                    author,
                })
            })
            .collect()
    }
}
