//! Create `stocks` table.
//!
//! The key column keeps its historical name `stockid`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stocks::Table)
                    .if_not_exists()
                    .col(pk_auto(Stocks::Stockid))
                    .col(string_len(Stocks::Name, 255).not_null())
                    .col(double(Stocks::Price).not_null())
                    .col(string_len(Stocks::Company, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stocks::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stocks { Table, Stockid, Name, Price, Company }
