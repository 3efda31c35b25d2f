use sea_orm_migration::prelude::*;

const SUB_JOB_LOOKUP_INDEX: &str = "idx_inspection_sub_job_sn_job_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InspectionJob::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InspectionJob::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InspectionJob::JobCode).string_len(32).null())
                    .col(
                        ColumnDef::new(InspectionJob::JobDescription)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InspectionJob::SortOrder).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(InspectionJob::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InspectionSubJob::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InspectionSubJob::SubJobId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InspectionSubJob::JobId).integer().not_null())
                    .col(ColumnDef::new(InspectionSubJob::Sn).string_len(32).null())
                    .col(
                        ColumnDef::new(InspectionSubJob::SubJobName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InspectionSubJob::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InspectionSubJob::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspection_sub_job_job_id")
                            .from(InspectionSubJob::Table, InspectionSubJob::JobId)
                            .to(InspectionJob::Table, InspectionJob::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite lookup key used when matching checklist rows to sub-jobs
        if !manager
            .has_index("inspection_sub_job", SUB_JOB_LOOKUP_INDEX)
            .await?
        {
            manager
                .create_index(
                    Index::create()
                        .name(SUB_JOB_LOOKUP_INDEX)
                        .table(InspectionSubJob::Table)
                        .col(InspectionSubJob::Sn)
                        .col(InspectionSubJob::JobId)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(InspectionReport::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InspectionReport::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InspectionReport::TankNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InspectionReport::InspectionDate)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InspectionReport::EmpId).integer().null())
                    .col(ColumnDef::new(InspectionReport::Notes).text().null())
                    .col(
                        ColumnDef::new(InspectionReport::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Baseline checklist shape: still carries photo_path and has no sub_job_id.
        // m20251003_000001_checklist_sub_job_column moves it to the current shape.
        manager
            .create_table(
                Table::create()
                    .table(InspectionChecklist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InspectionChecklist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InspectionChecklist::ReportId).integer().not_null())
                    .col(ColumnDef::new(InspectionChecklist::TankNumber).string_len(50).null())
                    .col(ColumnDef::new(InspectionChecklist::JobId).integer().null())
                    .col(ColumnDef::new(InspectionChecklist::JobName).string_len(255).null())
                    .col(ColumnDef::new(InspectionChecklist::Sn).string_len(16).not_null())
                    .col(
                        ColumnDef::new(InspectionChecklist::SubJobDescription)
                            .string_len(512)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(InspectionChecklist::StatusId)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(InspectionChecklist::Status).string_len(32).null())
                    .col(ColumnDef::new(InspectionChecklist::Comment).text().null())
                    .col(
                        ColumnDef::new(InspectionChecklist::Flagged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(InspectionChecklist::PhotoPath).string_len(255).null())
                    .col(
                        ColumnDef::new(InspectionChecklist::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InspectionChecklist::UpdatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspection_checklist_report_id")
                            .from(InspectionChecklist::Table, InspectionChecklist::ReportId)
                            .to(InspectionReport::Table, InspectionReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InspectionChecklist::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InspectionReport::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InspectionSubJob::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InspectionJob::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum InspectionJob {
    Table,
    Id,
    JobCode,
    JobDescription,
    SortOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InspectionSubJob {
    Table,
    SubJobId,
    JobId,
    Sn,
    SubJobName,
    SortOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InspectionReport {
    Table,
    Id,
    TankNumber,
    InspectionDate,
    EmpId,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InspectionChecklist {
    Table,
    Id,
    ReportId,
    TankNumber,
    JobId,
    JobName,
    Sn,
    SubJobDescription,
    StatusId,
    Status,
    Comment,
    Flagged,
    PhotoPath,
    CreatedAt,
    UpdatedAt,
}
