//! # Die Spring (Rectangular Wire)
//!
//! Heavy-duty compression spring wound from rectangular wire, wide face
//! radial. The rate comes from Saint-Venant torsion of the rectangular
//! section integrated along the helix:
//!
//! - torsion constant `J = b t³ (1/3 − 0.21 (t/b)(1 − t⁴/(12 b⁴)))` (b ≥ t),
//! - coil rate `k = G J / (2 π R³)` per active coil,
//! - peak torsion stress `τ = F R / (α b t²)` with the tabulated section
//!   coefficient α interpolated by aspect ratio b/t.
//!
//! For round wire both expressions collapse to the familiar
//! `k = G d⁴ / (8 D³ n)` forms, which is the sanity anchor for the tests.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    compute_energy, compute_nonlinear_kx, validate_segments, CurvePoint, EnergyPoint, Segment,
};
use crate::calculations::{default_steps, safety_factor, Verdict};
use crate::errors::{CalcError, CalcResult};
use crate::materials::WireAlloy;

/// Saint-Venant stress coefficient α for a rectangular section in torsion,
/// linearly interpolated from the classical table (τ_max = T / (α b t²)).
fn torsion_alpha(aspect_ratio: f64) -> f64 {
    const TABLE: [(f64, f64); 9] = [
        (1.0, 0.208),
        (1.5, 0.231),
        (2.0, 0.246),
        (2.5, 0.258),
        (3.0, 0.267),
        (4.0, 0.282),
        (5.0, 0.291),
        (6.0, 0.299),
        (10.0, 0.312),
    ];
    if aspect_ratio <= TABLE[0].0 {
        return TABLE[0].1;
    }
    for pair in TABLE.windows(2) {
        let (r0, a0) = pair[0];
        let (r1, a1) = pair[1];
        if aspect_ratio <= r1 {
            return a0 + (a1 - a0) * (aspect_ratio - r0) / (r1 - r0);
        }
    }
    TABLE[8].1
}

/// Saint-Venant torsion constant for a b × t rectangle, b ≥ t.
fn torsion_constant(b: f64, t: f64) -> f64 {
    b * t.powi(3) * (1.0 / 3.0 - 0.21 * (t / b) * (1.0 - t.powi(4) / (12.0 * b.powi(4))))
}

/// Input parameters for a die spring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "DS-1",
///   "wire_width_mm": 4.0,
///   "wire_thickness_mm": 2.5,
///   "mean_diameter_mm": 25.0,
///   "active_coils": 6,
///   "free_length_mm": 25.0,
///   "alloy": "A232",
///   "steps": 50
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieSpringInput {
    /// User label for this spring (e.g., "DS-1")
    pub label: String,

    /// Rectangular wire width b (mm), the radial dimension
    pub wire_width_mm: f64,

    /// Rectangular wire thickness t (mm), the axial dimension
    pub wire_thickness_mm: f64,

    /// Mean coil diameter D (mm)
    pub mean_diameter_mm: f64,

    /// Number of active coils
    pub active_coils: u32,

    /// Free length of the active body (mm)
    pub free_length_mm: f64,

    /// Wire material (chrome-vanadium is the usual die spring alloy)
    pub alloy: WireAlloy,

    /// Curve sample count
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl DieSpringInput {
    /// Validate input parameters and geometry.
    pub fn validate(&self) -> CalcResult<()> {
        if self.wire_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "wire_thickness_mm",
                self.wire_thickness_mm.to_string(),
                "Wire thickness must be positive",
            ));
        }
        if self.wire_width_mm < self.wire_thickness_mm {
            return Err(CalcError::invalid_geometry(
                "Wire width must be at least the thickness (wide face is wound radially)",
            ));
        }
        if self.mean_diameter_mm <= 2.0 * self.wire_width_mm {
            return Err(CalcError::invalid_geometry(
                "Mean diameter too small for the wire section: coil would self-intersect",
            ));
        }
        if self.active_coils == 0 || self.active_coils > 50 {
            return Err(CalcError::invalid_input(
                "active_coils",
                self.active_coils.to_string(),
                "Active coils must be between 1 and 50",
            ));
        }
        if self.free_length_mm <= self.solid_height_mm() {
            return Err(CalcError::invalid_geometry(format!(
                "Free length {} mm does not exceed solid height {} mm",
                self.free_length_mm,
                self.solid_height_mm()
            )));
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

    /// Solid height of the active body (mm)
    pub fn solid_height_mm(&self) -> f64 {
        self.active_coils as f64 * self.wire_thickness_mm
    }

    /// Aspect ratio b/t of the wire section
    pub fn aspect_ratio(&self) -> f64 {
        self.wire_width_mm / self.wire_thickness_mm
    }

    /// Build one segment per active coil. Die springs are constant-pitch,
    /// so every coil carries an equal share of the travel.
    fn build_segments(&self, g_mpa: f64) -> Vec<Segment> {
        let radius = self.mean_diameter_mm / 2.0;
        let j = torsion_constant(self.wire_width_mm, self.wire_thickness_mm);
        let coil_compliance = 2.0 * std::f64::consts::PI * radius.powi(3) / (g_mpa * j);

        let alpha = torsion_alpha(self.aspect_ratio());
        let stress_factor =
            radius / (alpha * self.wire_width_mm * self.wire_thickness_mm.powi(2));

        let n = self.active_coils as usize;
        let gap = (self.free_length_mm - self.solid_height_mm()) / n as f64;

        (0..n)
            .map(|i| Segment::new(format!("coil-{i}"), gap, coil_compliance, 1.0, stress_factor))
            .collect()
    }
}

/// Results from a die spring analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieSpringResult {
    /// Spring rate (N/mm) with all coils active
    pub rate_n_per_mm: f64,

    /// Force at solid (N)
    pub solid_force_n: f64,

    /// Travel to solid (mm)
    pub travel_mm: f64,

    /// Peak torsion stress over the sweep (MPa)
    pub peak_stress_mpa: f64,

    /// Allowable static shear stress (MPa)
    pub allowable_stress_mpa: f64,

    /// Safety factor: allowable / peak
    pub safety_factor: f64,

    /// PASS / WARNING / FAIL classification
    pub verdict: Verdict,

    /// Energy stored at solid (J)
    pub stored_energy_j: f64,

    /// Section torsion constant J (mm⁴), for reference
    pub torsion_constant_mm4: f64,

    /// Full force-deflection curve
    pub curve: Vec<CurvePoint>,

    /// Cumulative stored energy along the curve
    pub energy: Vec<EnergyPoint>,
}

/// Analyze a rectangular-wire die spring.
pub fn calculate(input: &DieSpringInput) -> CalcResult<DieSpringResult> {
    input.validate()?;

    let props = input.alloy.properties();
    // Thickness governs heat treatment, so it picks the strength band.
    let allowable = input.alloy.allowable_shear_mpa(input.wire_thickness_mm)?.value();

    let segments = input.build_segments(props.g_mpa.value());
    validate_segments(&segments)?;

    let travel = input.free_length_mm - input.solid_height_mm();
    let curve = compute_nonlinear_kx(&segments, travel, input.steps);
    let energy = compute_energy(&curve);

    let peak_stress = curve.iter().map(|p| p.stress_mpa).fold(0.0, f64::max);
    let sf = safety_factor(peak_stress, allowable);

    Ok(DieSpringResult {
        rate_n_per_mm: curve.first().map(|p| p.rate_n_per_mm).unwrap_or(0.0),
        solid_force_n: curve.last().map(|p| p.force_n).unwrap_or(0.0),
        travel_mm: travel,
        peak_stress_mpa: peak_stress,
        allowable_stress_mpa: allowable,
        safety_factor: sf,
        verdict: Verdict::classify(sf),
        stored_energy_j: energy.last().map(|e| e.joules).unwrap_or(0.0),
        torsion_constant_mm4: torsion_constant(input.wire_width_mm, input.wire_thickness_mm),
        curve,
        energy,
    })
}
