use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspection_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_code: Option<String>,
    pub job_description: String,
    pub sort_order: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inspection_sub_job::Entity")]
    SubJobs,
}

impl Related<super::inspection_sub_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubJobs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
