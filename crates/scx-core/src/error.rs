//! # Core Errors
//!
//! Parse failures for the core enumerations. Rule registration, lookup,
//! and emission errors live in `scx-opgen`, next to the code that raises
//! them.

use thiserror::Error;

/// Error raised when decoding a core value from its canonical name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Not one of the canonical status names.
    #[error("unknown element status: {0:?}")]
    UnknownStatus(String),

    /// Neither `add` nor `drop`.
    #[error("unknown transition direction: {0:?}")]
    UnknownDirection(String),

    /// Not one of the canonical phase names.
    #[error("unknown transaction phase: {0:?}")]
    UnknownPhase(String),
}
