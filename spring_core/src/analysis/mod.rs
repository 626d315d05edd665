//! # Non-Linear Spring Analysis
//!
//! The numerical core of the crate: a spring (or spring pack) is described
//! as a set of independently compliant [`Segment`]s that progressively
//! close under load, and the equilibrium solver produces a sampled
//! force-deflection-stiffness-stress curve from that description.
//!
//! The solver is pure, synchronous and stateless between invocations: it
//! never mutates its input and carries no state between sample points, so
//! calls may run concurrently without locking.
//!
//! - [`segment`] - Segment data model and boundary validation
//! - [`equilibrium`] - Per-point closure iteration (`compute_nonlinear_kx`)
//! - [`energy`] - Trapezoidal stored-energy integration

pub mod energy;
pub mod equilibrium;
pub mod segment;

// Re-export the working set
pub use energy::{compute_energy, EnergyPoint};
pub use equilibrium::{
    compute_nonlinear_kx, compute_nonlinear_kx_with, CurvePoint, SolverConfig, DEFAULT_STEPS,
};
pub use segment::{validate_segments, Segment};
