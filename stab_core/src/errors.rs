//! # Error Types
//!
//! Structured error types for stab_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use stab_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_in: f64) -> CalcResult<()> {
//!     if diameter_in <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "diameter_in".to_string(),
//!             value: diameter_in.to_string(),
//!             reason: "Diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material selector not recognized
    #[error("Material not found for selector '{selector}'")]
    MaterialNotFound { selector: String },

    /// Stud selector not recognized
    #[error("Stud size not found for selector '{selector}'")]
    StudNotFound { selector: String },

    /// Through-hole search exhausted its iteration cap without landing
    /// inside the tolerance band
    #[error("Search did not converge after {iterations} iterations (last net weight {last_weight_oz} oz)")]
    NonConvergence {
        iterations: u32,
        last_weight_oz: f64,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(selector: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            selector: selector.into(),
        }
    }

    /// Create a StudNotFound error
    pub fn stud_not_found(selector: impl Into<String>) -> Self {
        CalcError::StudNotFound {
            selector: selector.into(),
        }
    }

    /// Create a NonConvergence error
    pub fn non_convergence(iterations: u32, last_weight_oz: f64) -> Self {
        CalcError::NonConvergence {
            iterations,
            last_weight_oz,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::StudNotFound { .. } => "STUD_NOT_FOUND",
            CalcError::NonConvergence { .. } => "NON_CONVERGENCE",
        }
    }
}
