//! # spring_core - Spring Engineering Calculation Engine
//!
//! `spring_core` analyzes springs whose stiffness rises as parts of the
//! spring bottom out: variable-pitch compression springs, die springs,
//! multi-turn wave springs and garter springs. All inputs and outputs are
//! JSON-serializable, making the crate easy to drive from services, UIs or
//! report generators.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **One solver, many springs**: every family reduces its geometry to a
//!   set of compliant segments and shares the same equilibrium solver
//!
//! ## Quick Start
//!
//! ```rust
//! use spring_core::calculations::variable_pitch::{VariablePitchInput, calculate};
//! use spring_core::materials::WireAlloy;
//!
//! let input = VariablePitchInput {
//!     label: "VP-1".to_string(),
//!     wire_diameter_mm: 2.0,
//!     mean_diameter_mm: 16.0,
//!     pitches_mm: vec![4.0, 5.0, 6.0, 6.0, 5.0, 4.0],
//!     alloy: WireAlloy::MusicWire,
//!     steps: 50,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{} -> {}", input.label, result.verdict);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - Segment model, equilibrium solver, energy integration
//! - [`calculations`] - Per-family spring analyses (wave, die, garter, variable-pitch)
//! - [`materials`] - Wire and strip material database
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{compute_energy, compute_nonlinear_kx, CurvePoint, Segment, SolverConfig};
pub use calculations::{SpringItem, SpringSummary, Verdict};
pub use errors::{CalcError, CalcResult};
