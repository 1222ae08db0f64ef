//! Migrator registering entity-specific migrations in dependency order.
//! `sede` comes before `auto` because of the foreign key; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_sede;
mod m20220101_000003_create_auto;
mod m20220101_000002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_sede::Migration),
            Box::new(m20220101_000003_create_auto::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000002_add_indexes::Migration),
        ]
    }
}
