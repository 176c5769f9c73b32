// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Field Engine Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all field engine failures.
///
/// The numeric kernel itself is total; these only surface where data
/// enters the engine (config, stimulus vectors, telemetry payloads).
#[derive(Error, Debug)]
pub enum StarlightError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input (stimulus shape, initial field).
    #[error("validation error: {0}")]
    Validation(String),

    /// Numerical error (NaN/Inf in an input vector).
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Malformed telemetry snapshot.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type StarlightResult<T> = Result<T, StarlightError>;
