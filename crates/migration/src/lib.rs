//! Migrator registering one migration per relational record table.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_book;
mod m20220101_000002_create_stock;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_book::Migration),
            Box::new(m20220101_000002_create_stock::Migration),
        ]
    }
}
