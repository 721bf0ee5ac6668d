use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Failures surfaced to callers.
///
/// Unresolved or ambiguous names, empty rankings and missing entity sheets are
/// not errors: they come back as ordinary return values. Only invalid
/// arguments and I/O problems end up here.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the JSON settings file cannot be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the workbook path does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when an elite raid query names an unknown armor type.
    #[error("armor type must be one of {expected}, got '{value}'")]
    InvalidArmorType { value: String, expected: String },

    /// Raised when a rank falls outside every supported bracket.
    #[error("rank {0} is outside the supported range 1~20000")]
    InvalidRank(u32),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
