//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Date input is not an ISO `YYYY-MM-DD` date
    #[error("Dates must be in YYYY-MM-DD format (got '{0}')")]
    InvalidDate(String),

    /// Holiday end date is on or before its start date
    #[error("End date must be after the start date")]
    EndNotAfterStart,

    /// Holiday is longer than the configured maximum
    #[error("A holiday cannot last more than {max} days (requested {days})")]
    DurationExceeded { days: i64, max: u32 },

    /// Holiday overlaps another holiday of the same employee
    #[error("The employee already has a holiday during this period")]
    Overlapping,

    /// Holiday would push the employee over the yearly allowance
    #[error(
        "The employee has already taken {taken} days this year; adding {requested} would exceed the {allowance} day allowance"
    )]
    AllowanceExceeded { taken: i64, requested: i64, allowance: u32 },

    /// Excel export error
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Whether this error is a business rule rejection rather than a failure.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::EndNotAfterStart
                | Self::DurationExceeded { .. }
                | Self::Overlapping
                | Self::AllowanceExceeded { .. }
                | Self::Validation(_)
        )
    }
}
