//! # Garter Spring
//!
//! A close-wound extension spring joined end-to-end into a ring and
//! stretched over a shaft (the classic oil-seal spring). The installed
//! stretch of the ring circumference puts the coil body in tension; the
//! hoop tension is what presses the ring radially onto the shaft.
//!
//! ## Model
//!
//! The coil body is split into equal arc groups acting in series. Each
//! group is a segment whose gap is its share of the safe close-wound
//! extension (30% of body length); stretching a group past that limit
//! treats it as at stop. Coil tension maps to torsion stress with the same
//! Wahl-corrected factor as a round-wire compression spring, and initial
//! tension (the winding preload of close-wound bodies) adds to the solved
//! curve tension.
//!
//! Hook/joint stress is a separate concern and is not analyzed here.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    compute_energy, compute_nonlinear_kx, validate_segments, CurvePoint, EnergyPoint, Segment,
};
use crate::calculations::{default_steps, safety_factor, Verdict};
use crate::errors::{CalcError, CalcResult};
use crate::materials::WireAlloy;

/// Safe extension of a close-wound body as a fraction of its length.
const SAFE_EXTENSION_FRACTION: f64 = 0.30;

fn default_segment_groups() -> u32 {
    8
}

/// Input parameters for a garter spring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "GS-1",
///   "wire_diameter_mm": 1.0,
///   "coil_diameter_mm": 6.0,
///   "free_ring_diameter_mm": 60.0,
///   "shaft_diameter_mm": 58.0,
///   "initial_tension_n": 2.0,
///   "alloy": "A228",
///   "segment_groups": 8,
///   "steps": 50
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarterSpringInput {
    /// User label for this spring (e.g., "GS-1")
    pub label: String,

    /// Wire diameter d (mm)
    pub wire_diameter_mm: f64,

    /// Mean coil diameter D (mm)
    pub coil_diameter_mm: f64,

    /// Mean diameter of the free (unstretched) ring centerline (mm)
    pub free_ring_diameter_mm: f64,

    /// Shaft seat diameter the ring is installed over (mm)
    pub shaft_diameter_mm: f64,

    /// Initial (wound-in) tension of the close-wound body (N)
    pub initial_tension_n: f64,

    /// Wire material
    pub alloy: WireAlloy,

    /// Number of arc groups the coil body is split into
    #[serde(default = "default_segment_groups")]
    pub segment_groups: u32,

    /// Curve sample count
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl GarterSpringInput {
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
        if self.free_ring_diameter_mm < 4.0 * self.coil_diameter_mm {
            return Err(CalcError::invalid_geometry(
                "Ring diameter must be at least 4x the coil diameter to close into a ring",
            ));
        }
        if self.initial_tension_n < 0.0 {
            return Err(CalcError::invalid_input(
                "initial_tension_n",
                self.initial_tension_n.to_string(),
                "Initial tension cannot be negative",
            ));
        }
        if self.installed_stretch_mm() <= 0.0 {
            return Err(CalcError::invalid_geometry(format!(
                "No interference: installed ring diameter {:.2} mm does not stretch the free ring ({:.2} mm)",
                self.installed_ring_diameter_mm(),
                self.free_ring_diameter_mm
            )));
        }
        if self.segment_groups == 0 || self.segment_groups > 64 {
            return Err(CalcError::invalid_input(
                "segment_groups",
                self.segment_groups.to_string(),
                "Segment groups must be between 1 and 64",
            ));
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

    /// Spring index C = D/d of the coil body
    pub fn spring_index(&self) -> f64 {
        self.coil_diameter_mm / self.wire_diameter_mm
    }

    /// Wahl stress correction factor
    pub fn wahl_factor(&self) -> f64 {
        let c = self.spring_index();
        (4.0 * c - 1.0) / (4.0 * c - 4.0) + 0.615 / c
    }

    /// Body length (mm): circumference of the free ring centerline
    pub fn body_length_mm(&self) -> f64 {
        std::f64::consts::PI * self.free_ring_diameter_mm
    }

    /// Coil count of the close-wound body (pitch = wire diameter)
    pub fn coil_count(&self) -> f64 {
        self.body_length_mm() / self.wire_diameter_mm
    }

    /// Ring centerline diameter once seated: shaft plus one coil diameter
    pub fn installed_ring_diameter_mm(&self) -> f64 {
        self.shaft_diameter_mm + self.coil_diameter_mm
    }

    /// Circumferential stretch when installed (mm)
    pub fn installed_stretch_mm(&self) -> f64 {
        std::f64::consts::PI * (self.installed_ring_diameter_mm() - self.free_ring_diameter_mm)
    }

    /// Build the arc-group segment set.
    fn build_segments(&self, g_mpa: f64) -> Vec<Segment> {
        let groups = self.segment_groups as usize;
        let coils_per_group = self.coil_count() / groups as f64;
        let group_compliance = 8.0 * self.coil_diameter_mm.powi(3) * coils_per_group
            / (g_mpa * self.wire_diameter_mm.powi(4));
        let group_gap = SAFE_EXTENSION_FRACTION * self.body_length_mm() / groups as f64;
        let stress_factor = self.wahl_factor() * 8.0 * self.coil_diameter_mm
            / (std::f64::consts::PI * self.wire_diameter_mm.powi(3));

        (0..groups)
            .map(|i| {
                Segment::new(
                    format!("arc-{i}"),
                    group_gap,
                    group_compliance,
                    coils_per_group,
                    stress_factor,
                )
            })
            .collect()
    }
}

/// Results from a garter spring analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarterSpringResult {
    /// Circumferential rate of the whole body (N/mm)
    pub rate_n_per_mm: f64,

    /// Circumferential stretch when seated (mm)
    pub installed_stretch_mm: f64,

    /// Hoop tension when seated, including initial tension (N)
    pub installed_tension_n: f64,

    /// Radial seating load per mm of shaft circumference (N/mm)
    pub radial_load_n_per_mm: f64,

    /// Peak corrected torsion stress including initial tension (MPa)
    pub peak_stress_mpa: f64,

    /// Allowable static shear stress (MPa)
    pub allowable_stress_mpa: f64,

    /// Safety factor: allowable / peak
    pub safety_factor: f64,

    /// PASS / WARNING / FAIL classification
    pub verdict: Verdict,

    /// Energy stored by the installed stretch (J), excluding initial tension
    pub stored_energy_j: f64,

    /// Coil count of the close-wound body
    pub coil_count: f64,

    /// Stretch curve from free to installed
    pub curve: Vec<CurvePoint>,

    /// Cumulative stored energy along the stretch
    pub energy: Vec<EnergyPoint>,
}

/// Analyze a garter spring seated on a shaft.
pub fn calculate(input: &GarterSpringInput) -> CalcResult<GarterSpringResult> {
    input.validate()?;

    let props = input.alloy.properties();
    let allowable = input.alloy.allowable_shear_mpa(input.wire_diameter_mm)?.value();

    let segments = input.build_segments(props.g_mpa.value());
    validate_segments(&segments)?;

    let stretch = input.installed_stretch_mm();
    let curve = compute_nonlinear_kx(&segments, stretch, input.steps);
    let energy = compute_energy(&curve);

    let last = curve.last().ok_or_else(|| {
        CalcError::calculation_failed("garter", "Solver returned an empty curve")
    })?;

    let tension = last.force_n + input.initial_tension_n;
    let stress_factor = input.wahl_factor() * 8.0 * input.coil_diameter_mm
        / (std::f64::consts::PI * input.wire_diameter_mm.powi(3));
    let peak_stress = tension * stress_factor;
    let sf = safety_factor(peak_stress, allowable);

    // Total radial force of a tensioned ring is 2πT; per unit length of the
    // seat circumference that is 2T / D_shaft.
    let radial_per_mm = 2.0 * tension / input.shaft_diameter_mm;

    Ok(GarterSpringResult {
        rate_n_per_mm: curve.first().map(|p| p.rate_n_per_mm).unwrap_or(0.0),
        installed_stretch_mm: stretch,
        installed_tension_n: tension,
        radial_load_n_per_mm: radial_per_mm,
        peak_stress_mpa: peak_stress,
        allowable_stress_mpa: allowable,
        safety_factor: sf,
        verdict: Verdict::classify(sf),
        stored_energy_j: energy.last().map(|e| e.joules).unwrap_or(0.0),
        coil_count: input.coil_count(),
        curve,
        energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_garter() -> GarterSpringInput {
        GarterSpringInput {
            label: "Test GS".to_string(),
            wire_diameter_mm: 1.0,
            coil_diameter_mm: 6.0,
            free_ring_diameter_mm: 60.0,
            shaft_diameter_mm: 58.0,
            initial_tension_n: 2.0,
            alloy: WireAlloy::MusicWire,
            segment_groups: 8,
            steps: 50,
        }
    }

    #[test]
    fn test_rate_closed_form() {
        let result = calculate(&test_garter()).unwrap();
        // n = π·60 / 1 ≈ 188.5 coils, k = G d⁴ / (8 D³ n) ≈ 0.2435 N/mm
        assert!((result.rate_n_per_mm - 0.2435).abs() < 0.001);
    }

    #[test]
    fn test_installed_tension() {
        let result = calculate(&test_garter()).unwrap();
        // Installed centerline = 58 + 6 = 64 mm, stretch = π·4 ≈ 12.57 mm
        assert!((result.installed_stretch_mm - 12.566).abs() < 0.01);
        // T = k·δ + IT ≈ 0.2435·12.566 + 2 ≈ 5.06 N
        assert!((result.installed_tension_n - 5.06).abs() < 0.05);
    }

    #[test]
    fn test_radial_load() {
        let result = calculate(&test_garter()).unwrap();
        // 2T / D_shaft
        let expected = 2.0 * result.installed_tension_n / 58.0;
        assert!((result.radial_load_n_per_mm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_light_seal_spring_passes() {
        let result = calculate(&test_garter()).unwrap();
        assert_eq!(result.verdict, Verdict::Pass);
        assert!(result.peak_stress_mpa < result.allowable_stress_mpa);
    }

    #[test]
    fn test_initial_tension_raises_stress() {
        let without = calculate(&GarterSpringInput {
            initial_tension_n: 0.0,
            ..test_garter()
        })
        .unwrap();
        let with = calculate(&test_garter()).unwrap();
        assert!(with.peak_stress_mpa > without.peak_stress_mpa);
    }

    #[test]
    fn test_no_interference_rejected() {
        let input = GarterSpringInput {
            shaft_diameter_mm: 50.0, // installed 56 < free 60
            ..test_garter()
        };
        let err = calculate(&input).unwrap_err();
        assert!(err.to_string().contains("No interference"));
    }

    #[test]
    fn test_stretch_within_safe_extension() {
        // The test ring stretches ~12.6 mm against a 56.5 mm safe limit:
        // no arc group may be reported at stop.
        let result = calculate(&test_garter()).unwrap();
        let last = result.curve.last().unwrap();
        assert!((last.active_scalar - result.coil_count).abs() < 1e-6);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_garter();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: GarterSpringInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.shaft_diameter_mm, roundtrip.shaft_diameter_mm);
    }

    #[test]
    fn test_group_defaults_on_deserialize() {
        let json = r#"{
            "label": "GS-2",
            "wire_diameter_mm": 1.0,
            "coil_diameter_mm": 6.0,
            "free_ring_diameter_mm": 60.0,
            "shaft_diameter_mm": 58.0,
            "initial_tension_n": 0.5,
            "alloy": "A228"
        }"#;
        let input: GarterSpringInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.segment_groups, 8);
        assert_eq!(input.steps, crate::analysis::DEFAULT_STEPS);
    }
}
