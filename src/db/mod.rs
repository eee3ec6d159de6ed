use crate::config::SecurityConfig;
use crate::entities::{bookmarks, colors, entries, ratings, whiskey_types};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::entry::{EntryFields, EntryRecord};
pub use repositories::user::{NewUser, User};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");
        // Each in-memory connection is its own database; keep exactly one alive.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn lookup_repo(&self) -> repositories::lookup::LookupRepository {
        repositories::lookup::LookupRepository::new(self.conn.clone())
    }

    fn entry_repo(&self) -> repositories::entry::EntryRepository {
        repositories::entry::EntryRepository::new(self.conn.clone())
    }

    fn bookmark_repo(&self) -> repositories::bookmark::BookmarkRepository {
        repositories::bookmark::BookmarkRepository::new(self.conn.clone())
    }

    // ========== User Repository Methods ==========

    pub async fn create_user(
        &self,
        user: NewUser,
        config: Option<&SecurityConfig>,
    ) -> Result<User> {
        self.user_repo().create(user, config).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn verify_api_key(&self, api_key: &str) -> Result<Option<User>> {
        self.user_repo().verify_api_key(api_key).await
    }

    // ========== Lookup Repository Methods ==========

    pub async fn list_whiskey_types(&self) -> Result<Vec<whiskey_types::Model>> {
        self.lookup_repo().list_types().await
    }

    pub async fn get_whiskey_type(&self, id: i32) -> Result<Option<whiskey_types::Model>> {
        self.lookup_repo().get_type(id).await
    }

    pub async fn create_whiskey_type(&self, label: &str) -> Result<whiskey_types::Model> {
        self.lookup_repo().create_type(label).await
    }

    pub async fn delete_whiskey_type(&self, id: i32) -> Result<bool> {
        self.lookup_repo().delete_type(id).await
    }

    pub async fn list_colors(&self) -> Result<Vec<colors::Model>> {
        self.lookup_repo().list_colors().await
    }

    pub async fn get_color(&self, id: i32) -> Result<Option<colors::Model>> {
        self.lookup_repo().get_color(id).await
    }

    pub async fn list_ratings(&self) -> Result<Vec<ratings::Model>> {
        self.lookup_repo().list_ratings().await
    }

    pub async fn get_rating(&self, id: i32) -> Result<Option<ratings::Model>> {
        self.lookup_repo().get_rating(id).await
    }

    // ========== Entry Repository Methods ==========

    pub async fn list_entries(&self) -> Result<Vec<EntryRecord>> {
        self.entry_repo().list(None).await
    }

    pub async fn list_entries_by_owner(&self, owner_id: i32) -> Result<Vec<EntryRecord>> {
        self.entry_repo().list(Some(owner_id)).await
    }

    pub async fn get_entry(&self, id: i32) -> Result<Option<EntryRecord>> {
        self.entry_repo().get(id).await
    }

    pub async fn get_entry_model(&self, id: i32) -> Result<Option<entries::Model>> {
        self.entry_repo().get_model(id).await
    }

    pub async fn get_entries_by_ids(&self, ids: &[i32]) -> Result<Vec<EntryRecord>> {
        self.entry_repo().get_by_ids(ids).await
    }

    pub async fn create_entry(&self, owner_id: i32, fields: EntryFields) -> Result<i32> {
        self.entry_repo().create(owner_id, fields).await
    }

    pub async fn update_entry(&self, id: i32, fields: EntryFields) -> Result<bool> {
        self.entry_repo().update(id, fields).await
    }

    pub async fn delete_entry(&self, id: i32) -> Result<bool> {
        self.entry_repo().delete(id).await
    }

    // ========== Bookmark Repository Methods ==========

    pub async fn list_bookmarks(&self) -> Result<Vec<bookmarks::Model>> {
        self.bookmark_repo().list(None).await
    }

    pub async fn list_bookmarks_by_owner(&self, owner_id: i32) -> Result<Vec<bookmarks::Model>> {
        self.bookmark_repo().list(Some(owner_id)).await
    }

    pub async fn get_bookmark(&self, id: i32) -> Result<Option<bookmarks::Model>> {
        self.bookmark_repo().get(id).await
    }

    pub async fn create_bookmark(&self, user_id: i32, entry_id: i32) -> Result<bookmarks::Model> {
        self.bookmark_repo().create(user_id, entry_id).await
    }

    pub async fn delete_bookmark(&self, id: i32) -> Result<bool> {
        self.bookmark_repo().delete(id).await
    }
}
