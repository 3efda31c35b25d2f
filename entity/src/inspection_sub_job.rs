use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspection_sub_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sub_job_id: i32,
    pub job_id: i32,
    pub sn: Option<String>,
    pub sub_job_name: String,
    pub sort_order: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inspection_job::Entity",
        from = "Column::JobId",
        to = "super::inspection_job::Column::Id",
        on_delete = "Cascade"
    )]
    Job,
    #[sea_orm(has_many = "super::inspection_checklist::Entity")]
    ChecklistRows,
}

impl Related<super::inspection_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::inspection_checklist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChecklistRows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
