use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    BookmarkService, EntryService, LookupService, SeaOrmBookmarkService, SeaOrmEntryService,
    SeaOrmLookupService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub entry_service: Arc<dyn EntryService>,

    pub bookmark_service: Arc<dyn BookmarkService>,

    pub lookup_service: Arc<dyn LookupService>,
}

impl SharedState {
    /// Opens the store (migrating and seeding it) and wires the services on top.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let entry_service =
            Arc::new(SeaOrmEntryService::new(store.clone())) as Arc<dyn EntryService>;
        let bookmark_service =
            Arc::new(SeaOrmBookmarkService::new(store.clone())) as Arc<dyn BookmarkService>;
        let lookup_service =
            Arc::new(SeaOrmLookupService::new(store.clone())) as Arc<dyn LookupService>;

        Self {
            config: Arc::new(config),
            store,
            entry_service,
            bookmark_service,
            lookup_service,
        }
    }
}
