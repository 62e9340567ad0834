use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// A required column is absent from the active table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A column exists but its values cannot be read as the expected type
    #[error("Column '{column}' has unexpected type: {reason}")]
    ColumnType { column: String, reason: String },

    /// Uploaded bytes could not be parsed as CSV
    #[error("CSV error: {0}")]
    Csv(String),

    /// Month label outside the fixed month list
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

// Implement From<polars::error::PolarsError> for ComputeError
impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::ColumnNotFound(error.to_string());
                error!(?err, "DataFrame error: Column not found");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            _ => {
                let err = ComputeError::DataFrame(error.to_string());
                error!(?err, "DataFrame error");
                err
            }
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
