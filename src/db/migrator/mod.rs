use sea_orm_migration::prelude::*;

mod m20231206_initial;
mod m20231215_seed_lookups;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231206_initial::Migration),
            Box::new(m20231215_seed_lookups::Migration),
        ]
    }
}
