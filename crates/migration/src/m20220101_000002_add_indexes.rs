use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Auto: index on sede_id for the join fetch
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_auto_sede")
                    .table(Auto::Table)
                    .col(Auto::SedeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_auto_sede").table(Auto::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Auto { Table, SedeId }
