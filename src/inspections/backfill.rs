//! Opt-in backfill of `inspection_checklist.sub_job_id`.
//!
//! Checklist rows are matched against `inspection_sub_job` on `(sn, job_id)`.
//! Only rows whose `sub_job_id` is still NULL are touched, and rows without a
//! match keep NULL. When several sub-jobs share a key the lowest id is used.

use crate::common::errors::RegistryError;
use migration::m20251003_000001_checklist_sub_job_column::{ADDED_COLUMN, TABLE};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::SchemaManager;

const MATCHING_SUB_JOB: &str = "FROM inspection_sub_job \
     WHERE inspection_sub_job.sn = inspection_checklist.sn \
     AND inspection_sub_job.job_id = inspection_checklist.job_id";

fn backfill_sql() -> String {
    format!(
        "UPDATE inspection_checklist \
         SET sub_job_id = (SELECT MIN(inspection_sub_job.sub_job_id) {MATCHING_SUB_JOB}) \
         WHERE sub_job_id IS NULL \
         AND EXISTS (SELECT 1 {MATCHING_SUB_JOB})"
    )
}

fn candidates_sql() -> String {
    format!(
        "SELECT COUNT(*) AS candidates FROM inspection_checklist \
         WHERE sub_job_id IS NULL \
         AND EXISTS (SELECT 1 {MATCHING_SUB_JOB})"
    )
}

/// Populate `sub_job_id` from matching sub-jobs, returning the number of rows updated.
pub async fn backfill_sub_job_ids(db: &DatabaseConnection) -> Result<u64, RegistryError> {
    ensure_sub_job_column(db).await?;

    let result = db.execute_unprepared(&backfill_sql()).await?;
    tracing::info!(
        "Backfilled {} {TABLE}.{ADDED_COLUMN} value(s)",
        result.rows_affected()
    );
    Ok(result.rows_affected())
}

/// Number of rows [`backfill_sub_job_ids`] would update, without writing anything.
pub async fn count_backfill_candidates(db: &DatabaseConnection) -> Result<u64, RegistryError> {
    ensure_sub_job_column(db).await?;

    let statement = Statement::from_string(db.get_database_backend(), candidates_sql());
    let candidates = match db.query_one(statement).await? {
        Some(row) => row.try_get::<i64>("", "candidates")?,
        None => 0,
    };
    Ok(u64::try_from(candidates).unwrap_or_default())
}

async fn ensure_sub_job_column(db: &DatabaseConnection) -> Result<(), RegistryError> {
    let manager = SchemaManager::new(db);
    if manager.has_column(TABLE, ADDED_COLUMN).await? {
        Ok(())
    } else {
        Err(RegistryError::missing_column(TABLE, ADDED_COLUMN))
    }
}
