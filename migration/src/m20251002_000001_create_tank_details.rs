use sea_orm_migration::prelude::*;

const TANK_NUMBER_UNIQUE: &str = "uq_tank_details_tank_number";
const TANK_ID_UNIQUE: &str = "uq_tank_details_tank_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_table("tank_details").await? {
            tracing::info!("tank_details already exists, skipping creation");
        } else {
            manager
                .create_table(
                    Table::create()
                        .table(TankDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TankDetails::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TankDetails::TankId).integer().not_null())
                        .col(ColumnDef::new(TankDetails::TankNumber).string_len(50).not_null())
                        .col(ColumnDef::new(TankDetails::Status).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::Mfgr).string_len(100).null())
                        .col(ColumnDef::new(TankDetails::DateMfg).date().null())
                        .col(ColumnDef::new(TankDetails::PvCode).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::UnIsoCode).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::CapacityL).integer().null())
                        .col(ColumnDef::new(TankDetails::Mawp).double().null())
                        .col(ColumnDef::new(TankDetails::DesignTemperature).double().null())
                        .col(ColumnDef::new(TankDetails::TareWeightKg).integer().null())
                        .col(ColumnDef::new(TankDetails::MgwKg).integer().null())
                        .col(ColumnDef::new(TankDetails::MplKg).integer().null())
                        .col(ColumnDef::new(TankDetails::Size).string_len(100).null())
                        .col(ColumnDef::new(TankDetails::PumpType).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::Vesmat).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::GrossKg).integer().null())
                        .col(ColumnDef::new(TankDetails::NetKg).integer().null())
                        .col(ColumnDef::new(TankDetails::ColorBodyFrame).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::WorkingPressure).double().null())
                        .col(ColumnDef::new(TankDetails::CabinetType).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::FrameType).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::Remark).string_len(255).null())
                        .col(ColumnDef::new(TankDetails::Lease).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::CreatedBy).string_len(50).null())
                        .col(ColumnDef::new(TankDetails::UpdatedBy).string_len(50).null())
                        .to_owned(),
                )
                .await?;
        }

        // Unique constraints are created separately so that a pre-existing table
        // without them still ends up with both.
        for (name, column) in [
            (TANK_NUMBER_UNIQUE, TankDetails::TankNumber),
            (TANK_ID_UNIQUE, TankDetails::TankId),
        ] {
            if manager.has_index("tank_details", name).await? {
                continue;
            }
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(TankDetails::Table)
                        .col(column)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TankDetails::Table).if_exists().to_owned())
            .await
    }
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
