//! # Error Types
//!
//! Structured error types for spring_core. These errors are designed to be
//! informative for both humans and machine consumers, carrying enough
//! context to understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::errors::{CalcError, CalcResult};
//!
//! fn validate_wire(wire_diameter_mm: f64) -> CalcResult<()> {
//!     if wire_diameter_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "wire_diameter_mm".to_string(),
//!             value: wire_diameter_mm.to_string(),
//!             reason: "Wire diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spring_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by downstream consumers.
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

    /// Geometry is self-contradictory (e.g., solid height exceeds free length)
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// Material not found in database
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Wire/strip size falls outside the tabulated strength range
    #[error("Size out of range for {material_name}: {size_mm} mm")]
    SizeOutOfRange {
        material_name: String,
        size_mm: f64,
    },

    /// Calculation failed (degenerate segment set, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a SizeOutOfRange error
    pub fn size_out_of_range(material_name: impl Into<String>, size_mm: f64) -> Self {
        CalcError::SizeOutOfRange {
            material_name: material_name.into(),
            size_mm,
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SizeOutOfRange { .. } => "SIZE_OUT_OF_RANGE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
