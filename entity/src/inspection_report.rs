use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspection_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tank_number: String,
    pub inspection_date: String,
    pub emp_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inspection_checklist::Entity")]
    Checklists,
}

impl Related<super::inspection_checklist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checklists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
