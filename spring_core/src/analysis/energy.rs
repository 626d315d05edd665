//! # Stored Energy Integration
//!
//! Converts a solved force-deflection curve into cumulative stored energy
//! by the trapezoidal rule. Deflections are in mm and forces in N, so each
//! increment is converted to metres to yield joules (N·m).

use serde::{Deserialize, Serialize};

use crate::analysis::equilibrium::CurvePoint;
use crate::units::{Meters, Millimeters};

/// Cumulative stored energy at one curve deflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoint {
    /// Deflection (mm), same grid as the input curve
    pub x_mm: f64,

    /// Energy stored from zero deflection up to `x_mm` (J)
    pub joules: f64,
}

/// Integrate a force-deflection curve into cumulative stored energy.
///
/// The input must be sorted ascending by `x_mm` (the solver's output always
/// is). Output has the same length and `x` values, with `joules[0] = 0` and
/// non-decreasing values thereafter. An empty curve yields an empty result.
pub fn compute_energy(curve: &[CurvePoint]) -> Vec<EnergyPoint> {
    let mut out = Vec::with_capacity(curve.len());
    let mut joules = 0.0_f64;

    for (i, point) in curve.iter().enumerate() {
        if i > 0 {
            let prev = &curve[i - 1];
            let avg_force = 0.5 * (prev.force_n + point.force_n);
            let dx = Millimeters(point.x_mm - prev.x_mm);
            joules += avg_force * Meters::from(dx).value();
        }
        out.push(EnergyPoint {
            x_mm: point.x_mm,
            joules,
        });
    }

    out
}
