use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auto::Table)
                    .if_not_exists()
                    .col(pk_auto(Auto::IdAuto))
                    .col(string_len(Auto::Modelo, 64).not_null())
                    .col(string_len(Auto::Color, 32).not_null())
                    .col(string_len(Auto::Placa, 16).not_null())
                    .col(integer_null(Auto::SedeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auto_sede")
                            .from(Auto::Table, Auto::SedeId)
                            .to(Sede::Table, Sede::IdSede)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Auto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Auto {
    Table,
    IdAuto,
    Modelo,
    Color,
    Placa,
    SedeId,
}

#[derive(DeriveIden)]
enum Sede { Table, IdSede }
