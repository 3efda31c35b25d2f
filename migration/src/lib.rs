pub use sea_orm_migration::prelude::*;

pub mod m20251001_000001_create_inspection_tables;
pub mod m20251002_000001_create_tank_details;
pub mod m20251002_000002_seed_tank_details;
pub mod m20251003_000001_checklist_sub_job_column;
pub mod seed;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_inspection_tables::Migration),
            Box::new(m20251002_000001_create_tank_details::Migration),
            Box::new(m20251002_000002_seed_tank_details::Migration),
            Box::new(m20251003_000001_checklist_sub_job_column::Migration),
        ]
    }
}
