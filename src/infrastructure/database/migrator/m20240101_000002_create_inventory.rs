//! Migration to create inventory table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Inventory::Item).text().not_null().primary_key())
                    .col(ColumnDef::new(Inventory::Category).text().not_null())
                    .col(ColumnDef::new(Inventory::Stock).integer().not_null())
                    .col(ColumnDef::new(Inventory::ReorderLevel).integer().not_null())
                    .col(ColumnDef::new(Inventory::LastUpdated).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Inventory {
    Table,
    Item,
    Category,
    Stock,
    ReorderLevel,
    LastUpdated,
}
