use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Checklist row in its post-migration shape: no `photo_path`, nullable `sub_job_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspection_checklist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub report_id: i32,
    pub tank_number: Option<String>,
    pub job_id: Option<i32>,
    pub job_name: Option<String>,
    pub sub_job_id: Option<i32>,
    pub sn: String,
    pub sub_job_description: Option<String>,
    pub status_id: i32,
    pub status: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub flagged: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inspection_report::Entity",
        from = "Column::ReportId",
        to = "super::inspection_report::Column::Id",
        on_delete = "Cascade"
    )]
    Report,
    #[sea_orm(
        belongs_to = "super::inspection_sub_job::Entity",
        from = "Column::SubJobId",
        to = "super::inspection_sub_job::Column::SubJobId"
    )]
    SubJob,
}

impl Related<super::inspection_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::inspection_sub_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubJob.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
