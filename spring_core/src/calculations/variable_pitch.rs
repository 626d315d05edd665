//! # Variable-Pitch Compression Spring
//!
//! Round-wire helical compression spring whose coil pitch varies along the
//! body. Coils wound at smaller pitch run out of travel and seat first, so
//! the rate rises progressively as the spring compresses.
//!
//! ## Model
//!
//! Each active coil is one segment:
//! - compliance `8 D³ / (G d⁴)` (one-coil shear deflection),
//! - gap = local pitch − wire diameter (travel to coil contact),
//! - stress factor `K_w · 8 D / (π d³)` with the Wahl correction
//!   `K_w = (4C−1)/(4C−4) + 0.615/C`, `C = D/d`.
//!
//! ## Example
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
//! println!("k0 = {:.2} N/mm, verdict {}", result.initial_rate_n_per_mm, result.verdict);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::{
    compute_energy, compute_nonlinear_kx, validate_segments, CurvePoint, EnergyPoint, Segment,
};
use crate::calculations::{default_steps, safety_factor, Verdict};
use crate::errors::{CalcError, CalcResult};
use crate::materials::WireAlloy;

/// Input parameters for a variable-pitch compression spring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "VP-1",
///   "wire_diameter_mm": 2.0,
///   "mean_diameter_mm": 16.0,
///   "pitches_mm": [4.0, 5.0, 6.0, 6.0, 5.0, 4.0],
///   "alloy": "A228",
///   "steps": 50
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariablePitchInput {
    /// User label for this spring (e.g., "VP-1")
    pub label: String,

    /// Wire diameter d (mm)
    pub wire_diameter_mm: f64,

    /// Mean coil diameter D (mm)
    pub mean_diameter_mm: f64,

    /// Pitch of each active coil (mm), one entry per coil.
    /// A pitch equal to the wire diameter is a close-wound (dead) coil.
    pub pitches_mm: Vec<f64>,

    /// Wire material
    pub alloy: WireAlloy,

    /// Curve sample count (resolution only, not physics)
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl VariablePitchInput {
    /// Validate input parameters and geometry.
    pub fn validate(&self) -> CalcResult<()> {
        if self.wire_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "wire_diameter_mm",
                self.wire_diameter_mm.to_string(),
                "Wire diameter must be positive",
            ));
        }
        let index = self.spring_index();
        if !(3.0..=20.0).contains(&index) {
            return Err(CalcError::invalid_geometry(format!(
                "Spring index C = D/d = {index:.2} is outside the manufacturable range 3-20"
            )));
        }
        if self.pitches_mm.is_empty() {
            return Err(CalcError::invalid_input(
                "pitches_mm",
                "[]",
                "At least one active coil is required",
            ));
        }
        for (i, pitch) in self.pitches_mm.iter().enumerate() {
            if !pitch.is_finite() || *pitch < self.wire_diameter_mm {
                return Err(CalcError::invalid_geometry(format!(
                    "Coil {i} pitch {pitch} mm is below the wire diameter ({} mm): coils would overlap",
                    self.wire_diameter_mm
                )));
            }
        }
        if self.steps == 0 || self.steps > 1000 {
            return Err(CalcError::invalid_input(
                "steps",
                self.steps.to_string(),
                "Steps must be between 1 and 1000",
            ));
        }
        Ok(())
    }

    /// Spring index C = D/d
    pub fn spring_index(&self) -> f64 {
        self.mean_diameter_mm / self.wire_diameter_mm
    }

    /// Wahl stress correction factor for this index
    pub fn wahl_factor(&self) -> f64 {
        let c = self.spring_index();
        (4.0 * c - 1.0) / (4.0 * c - 4.0) + 0.615 / c
    }

    /// Free length of the active body (mm): sum of coil pitches
    pub fn body_free_length_mm(&self) -> f64 {
        self.pitches_mm.iter().sum()
    }

    /// Solid height of the active body (mm)
    pub fn body_solid_height_mm(&self) -> f64 {
        self.pitches_mm.len() as f64 * self.wire_diameter_mm
    }

    /// Compliance of one active coil (mm/N): 8 D³ / (G d⁴)
    fn coil_compliance(&self, g_mpa: f64) -> f64 {
        8.0 * self.mean_diameter_mm.powi(3) / (g_mpa * self.wire_diameter_mm.powi(4))
    }

    /// Build the per-coil segment set.
    fn build_segments(&self, g_mpa: f64) -> Vec<Segment> {
        let compliance = self.coil_compliance(g_mpa);
        let stress_factor = self.wahl_factor() * 8.0 * self.mean_diameter_mm
            / (std::f64::consts::PI * self.wire_diameter_mm.powi(3));

        self.pitches_mm
            .iter()
            .enumerate()
            .map(|(i, pitch)| {
                Segment::new(
                    format!("coil-{i}"),
                    pitch - self.wire_diameter_mm,
                    compliance,
                    1.0,
                    stress_factor,
                )
            })
            .collect()
    }
}

/// Results from a variable-pitch compression spring analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariablePitchResult {
    /// Tangent rate at zero deflection (N/mm), all coils active
    pub initial_rate_n_per_mm: f64,

    /// Force at solid (N), the last curve point
    pub solid_force_n: f64,

    /// Usable travel to solid (mm)
    pub travel_mm: f64,

    /// Peak corrected shear stress over the whole sweep (MPa)
    pub peak_stress_mpa: f64,

    /// Allowable static shear stress for this wire (MPa)
    pub allowable_stress_mpa: f64,

    /// Safety factor: allowable / peak
    pub safety_factor: f64,

    /// PASS / WARNING / FAIL classification
    pub verdict: Verdict,

    /// Energy stored at solid (J)
    pub stored_energy_j: f64,

    /// Spring index C = D/d
    pub spring_index: f64,

    /// Wahl stress correction factor
    pub wahl_factor: f64,

    /// Full force-deflection-stiffness-stress curve
    pub curve: Vec<CurvePoint>,

    /// Cumulative stored energy along the curve
    pub energy: Vec<EnergyPoint>,
}

/// Analyze a variable-pitch compression spring.
///
/// # Returns
///
/// * `Ok(VariablePitchResult)` - Curve, stress classification and verdict
/// * `Err(CalcError)` - If geometry or material inputs are invalid
pub fn calculate(input: &VariablePitchInput) -> CalcResult<VariablePitchResult> {
    input.validate()?;

    let props = input.alloy.properties();
    let allowable = input.alloy.allowable_shear_mpa(input.wire_diameter_mm)?.value();

    let segments = input.build_segments(props.g_mpa.value());
    validate_segments(&segments)?;

    let travel = input.body_free_length_mm() - input.body_solid_height_mm();
    let curve = compute_nonlinear_kx(&segments, travel, input.steps);
    let energy = compute_energy(&curve);

    let peak_stress = curve.iter().map(|p| p.stress_mpa).fold(0.0, f64::max);
    let sf = safety_factor(peak_stress, allowable);

    let solid_force = curve.last().map(|p| p.force_n).unwrap_or(0.0);
    let initial_rate = curve.first().map(|p| p.rate_n_per_mm).unwrap_or(0.0);
    let stored = energy.last().map(|e| e.joules).unwrap_or(0.0);

    Ok(VariablePitchResult {
        initial_rate_n_per_mm: initial_rate,
        solid_force_n: solid_force,
        travel_mm: travel,
        peak_stress_mpa: peak_stress,
        allowable_stress_mpa: allowable,
        safety_factor: sf,
        verdict: Verdict::classify(sf),
        stored_energy_j: stored,
        spring_index: input.spring_index(),
        wahl_factor: input.wahl_factor(),
        curve,
        energy,
    })
}
