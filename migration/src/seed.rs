//! Fixed seed data and the seeders that write it.
//!
//! Tank rows follow an insert-once policy: a row is written only when no row
//! with the same `tank_number` exists, and existing rows are never updated.
//! Inspection master data is only written into empty tables.

use sea_orm::{ConnectionTrait, DbErr, Statement, StatementBuilder};
use sea_orm_migration::prelude::*;
use std::collections::HashMap;

/// One literal row of `tank_details`.
#[derive(Debug, Clone, PartialEq)]
pub struct TankSeed {
    pub tank_id: i32,
    pub tank_number: &'static str,
    pub status: &'static str,
    pub mfgr: &'static str,
    /// (year, month, day)
    pub date_mfg: (i32, u32, u32),
    pub pv_code: &'static str,
    pub un_iso_code: &'static str,
    pub capacity_l: i32,
    pub mawp: f64,
    pub design_temperature: f64,
    pub tare_weight_kg: i32,
    pub mgw_kg: i32,
    pub mpl_kg: i32,
    pub size: &'static str,
    pub pump_type: &'static str,
    pub vesmat: &'static str,
    pub gross_kg: i32,
    pub net_kg: i32,
    pub color_body_frame: &'static str,
    pub working_pressure: f64,
    pub cabinet_type: &'static str,
    pub frame_type: &'static str,
    pub remark: Option<&'static str>,
    pub lease: &'static str,
    pub created_by: &'static str,
    pub updated_by: &'static str,
}

pub const TANK_SEEDS: [TankSeed; 3] = [
    TankSeed {
        tank_id: 1,
        tank_number: "SMXU 8880704",
        status: "active",
        mfgr: "CIMC",
        date_mfg: (2019, 3, 15),
        pv_code: "ASME VIII Div.1",
        un_iso_code: "UN T75",
        capacity_l: 20700,
        mawp: 21.4,
        design_temperature: -196.0,
        tare_weight_kg: 9980,
        mgw_kg: 34000,
        mpl_kg: 24020,
        size: "20' x 8' x 8'6\"",
        pump_type: "Non-Pump",
        vesmat: "SS304",
        gross_kg: 34000,
        net_kg: 24020,
        color_body_frame: "White/Blue",
        working_pressure: 20.0,
        cabinet_type: "Rear",
        frame_type: "Beam",
        remark: None,
        lease: "No",
        created_by: "system",
        updated_by: "system",
    },
    TankSeed {
        tank_id: 2,
        tank_number: "SMXU 8880715",
        status: "active",
        mfgr: "CIMC",
        date_mfg: (2019, 4, 2),
        pv_code: "ASME VIII Div.1",
        un_iso_code: "UN T75",
        capacity_l: 20700,
        mawp: 21.4,
        design_temperature: -196.0,
        tare_weight_kg: 9950,
        mgw_kg: 34000,
        mpl_kg: 24050,
        size: "20' x 8' x 8'6\"",
        pump_type: "Non-Pump",
        vesmat: "SS304",
        gross_kg: 34000,
        net_kg: 24050,
        color_body_frame: "White/Blue",
        working_pressure: 20.0,
        cabinet_type: "Rear",
        frame_type: "Beam",
        remark: Some("Spare gasket set stored in cabinet"),
        lease: "Yes",
        created_by: "system",
        updated_by: "system",
    },
    TankSeed {
        tank_id: 3,
        tank_number: "JBXU 2210473",
        status: "active",
        mfgr: "JBOX",
        date_mfg: (2021, 8, 20),
        pv_code: "EN 13530",
        un_iso_code: "UN T75",
        capacity_l: 21000,
        mawp: 24.0,
        design_temperature: -196.0,
        tare_weight_kg: 10060,
        mgw_kg: 36000,
        mpl_kg: 25940,
        size: "20' x 8' x 8'6\"",
        pump_type: "Pump",
        vesmat: "SS316L",
        gross_kg: 36000,
        net_kg: 25940,
        color_body_frame: "White/Grey",
        working_pressure: 22.0,
        cabinet_type: "Side-1",
        frame_type: "Full Frame",
        remark: None,
        lease: "No",
        created_by: "system",
        updated_by: "system",
    },
];

/// (job_code, job_description, sort_order)
pub const INSPECTION_JOBS: [(&str, &str, i32); 6] = [
    ("J1", "Tank & Frame Condition", 1),
    ("J2", "Pipework & Installation", 2),
    ("J3", "Tank Instrument & Assembly", 3),
    ("J4", "Valves Tightness & Operation", 4),
    ("J5", "Before Departure Check", 5),
    ("J6", "Others Observation & Comment", 6),
];

/// (job_code, sn, sub_job_name, sort_order)
pub const INSPECTION_SUB_JOBS: [(&str, &str, &str, i32); 33] = [
    ("J1", "1.1", "Body x 6 Sides & All Frame – No Dent / No Bent / No Deep Cut", 1),
    ("J1", "1.2", "Cabin Door & Frame Condition – No Damage / Can Lock", 2),
    ("J1", "1.3", "Tank Number, Product & Hazchem Label – Not Missing or Tear", 3),
    ("J1", "1.4", "Condition of Paint Work & Cleanliness – Clean / No Bad Rust", 4),
    ("J1", "1.5", "Others", 5),
    ("J2", "2.1", "Pipework Supports / Brackets – Not Loose / No Bent", 1),
    ("J2", "2.2", "Pipework Joint & Welding – No Crack / No Icing / No Leaking", 2),
    ("J2", "2.3", "Earthing Point", 3),
    ("J2", "2.4", "PBU Support & Flange Connection – No Leak / Not Damage", 4),
    ("J2", "2.5", "Others", 5),
    ("J3", "3.1", "Safety Diverter Valve – Switching Lever", 1),
    ("J3", "3.2", "Safety Valves Connection & Joint – No Leaks", 2),
    ("J3", "3.3", "Level Gauge (mmHO) & Pressure Gauge (bar)", 3),
    ("J3", "3.4", "Level & Pressure Gauge Connection & Joint – No Leaks", 4),
    ("J3", "3.5", "Level & Pressure Gauge – Function Check", 5),
    ("J3", "3.6", "Level & Pressure Gauge Valve Open / Balance Valve Close", 6),
    ("J3", "3.7", "Vacuum Reading (micron)", 7),
    ("J3", "3.8", "Data & CSC Plate – Not Missing / Not Damage", 8),
    ("J3", "3.9", "Others", 9),
    ("J4", "4.1", "Valve Handwheel – Not Missing / Nut Not Loose", 1),
    ("J4", "4.2", "Valve Open & Close Operation – No Seizing / Not Tight / Not Jam", 2),
    ("J4", "4.3", "Valve Tightness Incl Glands – No Leak / No Icing / No Passing", 3),
    ("J4", "4.4", "Anchor Point", 4),
    ("J4", "4.5", "Others", 5),
    ("J5", "5.1", "All Valves Closed – Defrost & Close Firmly", 1),
    ("J5", "5.2", "Caps fitted to Outlets or Cover from Dust if applicable", 2),
    ("J5", "5.3", "Security Seal Fitted by Refilling Plant - Check", 3),
    ("J5", "5.4", "Pressure Gauge – lowest possible", 4),
    ("J5", "5.5", "Level Gauge – Within marking or standard indication", 5),
    ("J5", "5.6", "Weight Reading – ensure within acceptance weight", 6),
    ("J5", "5.7", "Cabin Door Lock – Secure and prevent from sudden opening", 7),
    ("J5", "5.8", "Others", 8),
    ("J6", "6.1", "Others Observation & Comment", 1),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: u64,
    pub skipped: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MasterSeedOutcome {
    pub jobs_inserted: u64,
    pub sub_jobs_inserted: u64,
}

/// Insert every [`TANK_SEEDS`] row whose `tank_number` is not already present.
pub async fn seed_tank_details<C: ConnectionTrait>(db: &C) -> Result<SeedOutcome, DbErr> {
    seed_tanks(db, &TANK_SEEDS).await
}

/// Insert-once seeding over an arbitrary set of rows.
pub async fn seed_tanks<C: ConnectionTrait>(
    db: &C,
    seeds: &[TankSeed],
) -> Result<SeedOutcome, DbErr> {
    let mut outcome = SeedOutcome::default();

    for seed in seeds {
        if tank_exists(db, seed.tank_number).await? {
            tracing::debug!("Tank {} already present, skipping", seed.tank_number);
            outcome.skipped += 1;
            continue;
        }

        db.execute(build(db, &insert_tank(seed)?)).await?;
        tracing::info!("Seeded tank {}", seed.tank_number);
        outcome.inserted += 1;
    }

    Ok(outcome)
}

/// Seed `inspection_job` and `inspection_sub_job`, each only when empty.
pub async fn seed_inspection_master<C: ConnectionTrait>(
    db: &C,
) -> Result<MasterSeedOutcome, DbErr> {
    let mut outcome = MasterSeedOutcome::default();

    if is_empty(db, InspectionJob::Table, InspectionJob::Id).await? {
        for (code, description, sort_order) in INSPECTION_JOBS {
            let insert = Query::insert()
                .into_table(InspectionJob::Table)
                .columns([
                    InspectionJob::JobCode,
                    InspectionJob::JobDescription,
                    InspectionJob::SortOrder,
                ])
                .values([code.into(), description.into(), sort_order.into()])
                .map_err(|e| DbErr::Custom(format!("Invalid inspection_job seed: {e}")))?
                .to_owned();
            db.execute(build(db, &insert)).await?;
            outcome.jobs_inserted += 1;
        }
    } else {
        tracing::debug!("inspection_job already populated, skipping");
    }

    if is_empty(db, InspectionSubJob::Table, InspectionSubJob::SubJobId).await? {
        let job_ids = job_ids_by_code(db).await?;
        for (code, sn, name, sort_order) in INSPECTION_SUB_JOBS {
            let Some(job_id) = job_ids.get(code) else {
                tracing::warn!("No inspection_job with code {code}, skipping sub-job {sn}");
                continue;
            };
            let insert = Query::insert()
                .into_table(InspectionSubJob::Table)
                .columns([
                    InspectionSubJob::JobId,
                    InspectionSubJob::Sn,
                    InspectionSubJob::SubJobName,
                    InspectionSubJob::SortOrder,
                ])
                .values([(*job_id).into(), sn.into(), name.into(), sort_order.into()])
                .map_err(|e| DbErr::Custom(format!("Invalid inspection_sub_job seed: {e}")))?
                .to_owned();
            db.execute(build(db, &insert)).await?;
            outcome.sub_jobs_inserted += 1;
        }
    } else {
        tracing::debug!("inspection_sub_job already populated, skipping");
    }

    Ok(outcome)
}

async fn tank_exists<C: ConnectionTrait>(db: &C, tank_number: &str) -> Result<bool, DbErr> {
    let select = Query::select()
        .column(TankDetails::Id)
        .from(TankDetails::Table)
        .and_where(Expr::col(TankDetails::TankNumber).eq(tank_number))
        .limit(1)
        .to_owned();
    Ok(db.query_one(build(db, &select)).await?.is_some())
}

async fn is_empty<C, T, K>(db: &C, table: T, key: K) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
    T: IntoIden + 'static,
    K: IntoIden + 'static,
{
    let select = Query::select().column(key).from(table).limit(1).to_owned();
    Ok(db.query_one(build(db, &select)).await?.is_none())
}

async fn job_ids_by_code<C: ConnectionTrait>(db: &C) -> Result<HashMap<String, i32>, DbErr> {
    let select = Query::select()
        .columns([InspectionJob::Id, InspectionJob::JobCode])
        .from(InspectionJob::Table)
        .to_owned();

    let mut ids = HashMap::new();
    for row in db.query_all(build(db, &select)).await? {
        let id: i32 = row.try_get("", "id")?;
        if let Some(code) = row.try_get::<Option<String>>("", "job_code")? {
            ids.insert(code, id);
        }
    }
    Ok(ids)
}

fn insert_tank(seed: &TankSeed) -> Result<InsertStatement, DbErr> {
    let (year, month, day) = seed.date_mfg;
    let date_mfg = chrono::NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DbErr::Custom(format!(
            "Invalid manufacture date for tank {}",
            seed.tank_number
        ))
    })?;

    let insert = Query::insert()
        .into_table(TankDetails::Table)
        .columns([
            TankDetails::TankId,
            TankDetails::TankNumber,
            TankDetails::Status,
            TankDetails::Mfgr,
            TankDetails::DateMfg,
            TankDetails::PvCode,
            TankDetails::UnIsoCode,
            TankDetails::CapacityL,
            TankDetails::Mawp,
            TankDetails::DesignTemperature,
            TankDetails::TareWeightKg,
            TankDetails::MgwKg,
            TankDetails::MplKg,
            TankDetails::Size,
            TankDetails::PumpType,
            TankDetails::Vesmat,
            TankDetails::GrossKg,
            TankDetails::NetKg,
            TankDetails::ColorBodyFrame,
            TankDetails::WorkingPressure,
            TankDetails::CabinetType,
            TankDetails::FrameType,
            TankDetails::Remark,
            TankDetails::Lease,
            TankDetails::CreatedBy,
            TankDetails::UpdatedBy,
        ])
        .values([
            seed.tank_id.into(),
            seed.tank_number.into(),
            seed.status.into(),
            seed.mfgr.into(),
            date_mfg.into(),
            seed.pv_code.into(),
            seed.un_iso_code.into(),
            seed.capacity_l.into(),
            seed.mawp.into(),
            seed.design_temperature.into(),
            seed.tare_weight_kg.into(),
            seed.mgw_kg.into(),
            seed.mpl_kg.into(),
            seed.size.into(),
            seed.pump_type.into(),
            seed.vesmat.into(),
            seed.gross_kg.into(),
            seed.net_kg.into(),
            seed.color_body_frame.into(),
            seed.working_pressure.into(),
            seed.cabinet_type.into(),
            seed.frame_type.into(),
            seed.remark.map(str::to_owned).into(),
            seed.lease.into(),
            seed.created_by.into(),
            seed.updated_by.into(),
        ])
        .map_err(|e| DbErr::Custom(format!("Invalid seed for tank {}: {e}", seed.tank_number)))?
        .to_owned();

    Ok(insert)
}

fn build<C: ConnectionTrait, S: StatementBuilder>(db: &C, stmt: &S) -> Statement {
    db.get_database_backend().build(stmt)
}

#[derive(DeriveIden)]
enum TankDetails {
    Table,
    Id,
    TankId,
    TankNumber,
    Status,
    Mfgr,
    DateMfg,
    PvCode,
    UnIsoCode,
    CapacityL,
    Mawp,
    DesignTemperature,
    TareWeightKg,
    MgwKg,
    MplKg,
    Size,
    PumpType,
    Vesmat,
    GrossKg,
    NetKg,
    ColorBodyFrame,
    WorkingPressure,
    CabinetType,
    FrameType,
    Remark,
    Lease,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum InspectionJob {
    Table,
    Id,
    JobCode,
    JobDescription,
    SortOrder,
}

#[derive(DeriveIden)]
enum InspectionSubJob {
    Table,
    SubJobId,
    JobId,
    Sn,
    SubJobName,
    SortOrder,
}
