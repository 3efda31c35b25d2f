use crate::seed;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let outcome = seed::seed_tank_details(manager.get_connection()).await?;
        tracing::info!(
            "Tank seed: {} inserted, {} already present",
            outcome.inserted,
            outcome.skipped
        );
        Ok(())
    }

    // Seeded rows cannot be told apart from rows that were already present,
    // so rolling back keeps every tank_details row.
    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::info!("Keeping tank_details rows on rollback");
        Ok(())
    }
}
