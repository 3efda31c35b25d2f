//! Replaces `inspection_checklist.photo_path` with a nullable `sub_job_id`.
//!
//! Both steps check the live schema first, so re-running `up` (or running it
//! against a database that was altered by hand) is a no-op.

use sea_orm_migration::prelude::*;

pub const TABLE: &str = "inspection_checklist";
pub const DROPPED_COLUMN: &str = "photo_path";
pub const ADDED_COLUMN: &str = "sub_job_id";

/// MySQL-only form of the add, placing the column after `job_id`.
pub const MYSQL_ADD_SUB_JOB_COLUMN: &str =
    "ALTER TABLE `inspection_checklist` ADD COLUMN `sub_job_id` INT NULL AFTER `job_id`";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column(TABLE, DROPPED_COLUMN).await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(InspectionChecklist::Table)
                        .drop_column(InspectionChecklist::PhotoPath)
                        .to_owned(),
                )
                .await?;
            tracing::info!("Dropped {TABLE}.{DROPPED_COLUMN}");
        } else {
            tracing::info!("{TABLE}.{DROPPED_COLUMN} not present, nothing to drop");
        }

        if manager.has_column(TABLE, ADDED_COLUMN).await? {
            tracing::info!("{TABLE}.{ADDED_COLUMN} already present, nothing to add");
            return Ok(());
        }

        match manager.get_database_backend() {
            // Only MySQL can place a column; elsewhere it is appended.
            sea_orm::DatabaseBackend::MySql => {
                manager
                    .get_connection()
                    .execute_unprepared(MYSQL_ADD_SUB_JOB_COLUMN)
                    .await?;
            }
            _ => {
                manager
                    .alter_table(
                        Table::alter()
                            .table(InspectionChecklist::Table)
                            .add_column(
                                ColumnDef::new(InspectionChecklist::SubJobId)
                                    .integer()
                                    .null(),
                            )
                            .to_owned(),
                    )
                    .await?;
            }
        }
        tracing::info!("Added {TABLE}.{ADDED_COLUMN}");

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column(TABLE, ADDED_COLUMN).await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(InspectionChecklist::Table)
                        .drop_column(InspectionChecklist::SubJobId)
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column(TABLE, DROPPED_COLUMN).await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(InspectionChecklist::Table)
                        .add_column(
                            ColumnDef::new(InspectionChecklist::PhotoPath)
                                .string_len(255)
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum InspectionChecklist {
    Table,
    PhotoPath,
    SubJobId,
}
