//! Psychrometric engine errors.

use pf_core::CoreError;
use thiserror::Error;

/// Result type for psychrometric operations.
pub type PsychroResult<T> = Result<T, PsychroError>;

/// Errors that can occur during psychrometric calculations.
///
/// The engine deliberately guards very little: out-of-range temperatures,
/// vapor pressure at or above barometric pressure, and solver
/// non-convergence all pass through silently with best-effort results
/// (see the crate-level documentation). Only structurally invalid requests
/// are rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// Invalid argument (non-finite input values).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// Combined airflow of a mixing request is zero.
    #[error("total CFM cannot be zero")]
    ZeroFlow,

    #[error(transparent)]
    Core(#[from] CoreError),
}
