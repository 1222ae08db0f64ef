//! Create `sede` table.
//!
//! Branches are owned independently; `auto` rows point at them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sede::Table)
                    .if_not_exists()
                    .col(pk_auto(Sede::IdSede))
                    .col(string_len(Sede::Nombre, 128).not_null())
                    .col(string_len(Sede::Direccion, 256).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sede::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sede { Table, IdSede, Nombre, Direccion }
