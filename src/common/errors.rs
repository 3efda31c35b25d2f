use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced to the operator running a registry command
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Missing or malformed connection settings
    #[error("Configuration error: {0}")]
    Config(String),
    /// Any failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// A step needs a column that a pending migration has not created yet
    #[error("Column '{table}.{column}' does not exist, run `migrate` first")]
    MissingColumn { table: String, column: String },
}

impl RegistryError {
    pub fn missing_column(table: &str, column: &str) -> Self {
        RegistryError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}
