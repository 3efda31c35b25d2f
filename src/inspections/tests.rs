use super::backfill::{backfill_sub_job_ids, count_backfill_candidates};
use crate::common::errors::RegistryError;
use crate::config::test_helpers::setup_test_db;
use migration::m20251003_000001_checklist_sub_job_column::{
    MYSQL_ADD_SUB_JOB_COLUMN, Migration as ChecklistSubJobColumn,
};
use migration::seed::seed_inspection_master;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use sea_orm_migration::{MigrationTrait, SchemaManager};
use tank_entity::{inspection_checklist, inspection_job, inspection_report, inspection_sub_job};

async fn create_report(db: &DatabaseConnection) -> i32 {
    inspection_report::ActiveModel {
        tank_number: Set("SMXU 8880704".to_string()),
        inspection_date: Set("2025-10-01".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create inspection report")
    .id
}

async fn create_checklist_row(
    db: &DatabaseConnection,
    report_id: i32,
    job_id: Option<i32>,
    sn: &str,
) -> inspection_checklist::Model {
    inspection_checklist::ActiveModel {
        report_id: Set(report_id),
        tank_number: Set(Some("SMXU 8880704".to_string())),
        job_id: Set(job_id),
        sn: Set(sn.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create checklist row")
}

async fn job_id_for(db: &DatabaseConnection, code: &str) -> i32 {
    inspection_job::Entity::find()
        .filter(inspection_job::Column::JobCode.eq(code))
        .one(db)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("Job {code} should be seeded"))
        .id
}

async fn sub_job_id_for(db: &DatabaseConnection, job_id: i32, sn: &str) -> i32 {
    inspection_sub_job::Entity::find()
        .filter(inspection_sub_job::Column::JobId.eq(job_id))
        .filter(inspection_sub_job::Column::Sn.eq(sn))
        .one(db)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("Sub-job {sn} should be seeded"))
        .sub_job_id
}

async fn reload(db: &DatabaseConnection, id: i32) -> inspection_checklist::Model {
    inspection_checklist::Entity::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .expect("Checklist row should still exist")
}

#[tokio::test]
async fn test_column_migration_replaces_photo_path() {
    let db = setup_test_db().await;
    let manager = SchemaManager::new(&db);

    assert!(!manager.has_column("inspection_checklist", "photo_path").await.unwrap());
    assert!(manager.has_column("inspection_checklist", "sub_job_id").await.unwrap());
    assert!(manager.has_column("inspection_checklist", "job_id").await.unwrap());
}

#[test]
fn test_mysql_add_places_sub_job_id_after_job_id() {
    assert!(MYSQL_ADD_SUB_JOB_COLUMN.starts_with("ALTER TABLE `inspection_checklist` ADD COLUMN"));
    assert!(MYSQL_ADD_SUB_JOB_COLUMN.contains("`sub_job_id` INT NULL"));
    assert!(MYSQL_ADD_SUB_JOB_COLUMN.ends_with("AFTER `job_id`"));
}

#[tokio::test]
async fn test_column_migration_is_rerunnable() {
    let db = setup_test_db().await;
    let manager = SchemaManager::new(&db);

    for _ in 0..2 {
        ChecklistSubJobColumn
            .up(&manager)
            .await
            .expect("Re-running the column migration should be a no-op");
    }

    assert!(!manager.has_column("inspection_checklist", "photo_path").await.unwrap());
    assert!(manager.has_column("inspection_checklist", "sub_job_id").await.unwrap());
}

#[tokio::test]
async fn test_column_migration_down_then_up() {
    let db = setup_test_db().await;
    let manager = SchemaManager::new(&db);

    ChecklistSubJobColumn.down(&manager).await.unwrap();
    assert!(manager.has_column("inspection_checklist", "photo_path").await.unwrap());
    assert!(!manager.has_column("inspection_checklist", "sub_job_id").await.unwrap());

    // down is guarded the same way as up
    ChecklistSubJobColumn.down(&manager).await.unwrap();

    ChecklistSubJobColumn.up(&manager).await.unwrap();
    assert!(!manager.has_column("inspection_checklist", "photo_path").await.unwrap());
    assert!(manager.has_column("inspection_checklist", "sub_job_id").await.unwrap());
}

#[tokio::test]
async fn test_master_seed_is_idempotent() {
    let db = setup_test_db().await;

    let first = seed_inspection_master(&db).await.unwrap();
    assert_eq!(first.jobs_inserted, 6);
    assert_eq!(first.sub_jobs_inserted, 33);

    let second = seed_inspection_master(&db).await.unwrap();
    assert_eq!(second.jobs_inserted, 0);
    assert_eq!(second.sub_jobs_inserted, 0);

    assert_eq!(inspection_job::Entity::find().count(&db).await.unwrap(), 6);
    assert_eq!(inspection_sub_job::Entity::find().count(&db).await.unwrap(), 33);
}

#[tokio::test]
async fn test_master_seed_links_sub_jobs_to_jobs() {
    let db = setup_test_db().await;
    seed_inspection_master(&db).await.unwrap();

    let j3 = job_id_for(&db, "J3").await;
    let sub_jobs = inspection_sub_job::Entity::find()
        .filter(inspection_sub_job::Column::JobId.eq(j3))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(sub_jobs, 9, "J3 has sub-jobs 3.1 through 3.9");
}

#[tokio::test]
async fn test_backfill_only_sets_matching_rows() {
    let db = setup_test_db().await;
    seed_inspection_master(&db).await.unwrap();

    let report_id = create_report(&db).await;
    let j1 = job_id_for(&db, "J1").await;
    let j2 = job_id_for(&db, "J2").await;

    let matching = create_checklist_row(&db, report_id, Some(j1), "1.2").await;
    let wrong_job = create_checklist_row(&db, report_id, Some(j2), "1.2").await;
    let unknown_sn = create_checklist_row(&db, report_id, Some(j1), "9.9").await;
    let no_job = create_checklist_row(&db, report_id, None, "1.2").await;
    assert_eq!(matching.sub_job_id, None);

    assert_eq!(count_backfill_candidates(&db).await.unwrap(), 1);
    let updated = backfill_sub_job_ids(&db).await.unwrap();
    assert_eq!(updated, 1);

    let expected = sub_job_id_for(&db, j1, "1.2").await;
    assert_eq!(reload(&db, matching.id).await.sub_job_id, Some(expected));
    assert_eq!(reload(&db, wrong_job.id).await.sub_job_id, None);
    assert_eq!(reload(&db, unknown_sn.id).await.sub_job_id, None);
    assert_eq!(reload(&db, no_job.id).await.sub_job_id, None);
}

#[tokio::test]
async fn test_backfill_is_rerunnable_and_keeps_existing_values() {
    let db = setup_test_db().await;
    seed_inspection_master(&db).await.unwrap();

    let report_id = create_report(&db).await;
    let j4 = job_id_for(&db, "J4").await;
    let row = create_checklist_row(&db, report_id, Some(j4), "4.3").await;

    // A value set by hand is not overwritten
    let mut manual: inspection_checklist::ActiveModel =
        create_checklist_row(&db, report_id, Some(j4), "4.1").await.into();
    manual.sub_job_id = Set(Some(9999));
    let manual = manual.update(&db).await.unwrap();

    assert_eq!(backfill_sub_job_ids(&db).await.unwrap(), 1);
    assert_eq!(backfill_sub_job_ids(&db).await.unwrap(), 0);
    assert_eq!(count_backfill_candidates(&db).await.unwrap(), 0);

    let expected = sub_job_id_for(&db, j4, "4.3").await;
    assert_eq!(reload(&db, row.id).await.sub_job_id, Some(expected));
    assert_eq!(reload(&db, manual.id).await.sub_job_id, Some(9999));
}

#[tokio::test]
async fn test_backfill_with_no_sub_jobs_changes_nothing() {
    let db = setup_test_db().await;

    let report_id = create_report(&db).await;
    let row = create_checklist_row(&db, report_id, Some(1), "1.1").await;

    assert_eq!(backfill_sub_job_ids(&db).await.unwrap(), 0);
    assert_eq!(reload(&db, row.id).await.sub_job_id, None);
}

#[tokio::test]
async fn test_backfill_requires_the_column_migration() {
    let db = setup_test_db().await;
    let manager = SchemaManager::new(&db);
    ChecklistSubJobColumn.down(&manager).await.unwrap();

    let err = backfill_sub_job_ids(&db).await.unwrap_err();
    assert!(
        matches!(
            err,
            RegistryError::MissingColumn { ref table, ref column }
                if table == "inspection_checklist" && column == "sub_job_id"
        ),
        "Unexpected error: {err}"
    );

    assert!(matches!(
        count_backfill_candidates(&db).await.unwrap_err(),
        RegistryError::MissingColumn { .. }
    ));
}
