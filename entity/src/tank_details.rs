use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tank_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tank_id: i32,
    #[sea_orm(unique)]
    pub tank_number: String,
    pub status: Option<String>,
    pub mfgr: Option<String>,
    pub date_mfg: Option<Date>,
    pub pv_code: Option<String>,
    pub un_iso_code: Option<String>,
    pub capacity_l: Option<i32>,
    pub mawp: Option<f64>,
    pub design_temperature: Option<f64>,
    pub tare_weight_kg: Option<i32>,
    pub mgw_kg: Option<i32>,
    pub mpl_kg: Option<i32>,
    pub size: Option<String>,
    pub pump_type: Option<String>,
    pub vesmat: Option<String>,
    pub gross_kg: Option<i32>,
    pub net_kg: Option<i32>,
    pub color_body_frame: Option<String>,
    pub working_pressure: Option<f64>,
    pub cabinet_type: Option<String>,
    pub frame_type: Option<String>,
    pub remark: Option<String>,
    pub lease: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
