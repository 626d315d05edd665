//! # Wave Spring (Multi-Turn, Crest-to-Crest)
//!
//! Flat-strip spring coiled with a sinusoidal wave in each turn. Turns
//! stack crest-to-crest, so the turns act in series and each turn is one
//! segment: as a turn flattens to its solid gap it drops out of the active
//! set.
//!
//! ## Model
//!
//! With mean diameter D, strip width b, thickness t, N waves per turn:
//! - per-turn compliance `P D³ / (E b t³ N⁴)` with operating constant
//!   `P = 2.4` (multi-wave beam bending),
//! - bending stress factor `3 π D / (4 b t² N²)`,
//! - per-turn gap = (free height − solid height) / turns.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    compute_energy, compute_nonlinear_kx, validate_segments, CurvePoint, EnergyPoint, Segment,
};
use crate::calculations::{default_steps, safety_factor, Verdict};
use crate::errors::{CalcError, CalcResult};
use crate::materials::StripAlloy;

/// Operating constant of the multi-wave bending model.
const WAVE_BEND_CONSTANT: f64 = 2.4;

/// Input parameters for a multi-turn wave spring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "WS-1",
///   "mean_diameter_mm": 40.0,
///   "strip_width_mm": 5.0,
///   "strip_thickness_mm": 0.5,
///   "waves_per_turn": 3.5,
///   "turns": 4,
///   "free_height_mm": 5.0,
///   "alloy": "17-7PH",
///   "steps": 50
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveSpringInput {
    /// User label for this spring (e.g., "WS-1")
    pub label: String,

    /// Mean coil diameter D (mm)
    pub mean_diameter_mm: f64,

    /// Strip (radial) width b (mm)
    pub strip_width_mm: f64,

    /// Strip thickness t (mm)
    pub strip_thickness_mm: f64,

    /// Waves per turn N (half-integer wave counts are standard, e.g. 3.5)
    pub waves_per_turn: f64,

    /// Number of turns in the stack
    pub turns: u32,

    /// Free height of the stack (mm)
    pub free_height_mm: f64,

    /// Strip material
    pub alloy: StripAlloy,

    /// Curve sample count
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl WaveSpringInput {
    /// Validate input parameters and geometry.
    pub fn validate(&self) -> CalcResult<()> {
        if self.strip_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "strip_thickness_mm",
                self.strip_thickness_mm.to_string(),
                "Strip thickness must be positive",
            ));
        }
        if self.strip_width_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "strip_width_mm",
                self.strip_width_mm.to_string(),
                "Strip width must be positive",
            ));
        }
        if self.mean_diameter_mm <= 2.0 * self.strip_width_mm {
            return Err(CalcError::invalid_geometry(
                "Radial wall exceeds available space: mean diameter too small for strip width",
            ));
        }
        if self.waves_per_turn < 2.0 {
            return Err(CalcError::invalid_input(
                "waves_per_turn",
                self.waves_per_turn.to_string(),
                "At least 2 waves per turn are required",
            ));
        }
        if self.turns == 0 || self.turns > 40 {
            return Err(CalcError::invalid_input(
                "turns",
                self.turns.to_string(),
                "Turns must be between 1 and 40",
            ));
        }
        if self.free_height_mm <= self.solid_height_mm() {
            return Err(CalcError::invalid_geometry(format!(
                "Free height {} mm does not exceed solid height {} mm",
                self.free_height_mm,
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

    /// Solid height of the stack (mm): turns flattened to strip thickness
    pub fn solid_height_mm(&self) -> f64 {
        self.turns as f64 * self.strip_thickness_mm
    }

    /// Build one segment per turn.
    fn build_segments(&self, e_mpa: f64) -> Vec<Segment> {
        let d3 = self.mean_diameter_mm.powi(3);
        let n4 = self.waves_per_turn.powi(4);
        let turn_compliance = WAVE_BEND_CONSTANT * d3
            / (e_mpa * self.strip_width_mm * self.strip_thickness_mm.powi(3) * n4);

        let stress_factor = 3.0 * std::f64::consts::PI * self.mean_diameter_mm
            / (4.0
                * self.strip_width_mm
                * self.strip_thickness_mm.powi(2)
                * self.waves_per_turn.powi(2));

        let turns = self.turns as usize;
        let gap = (self.free_height_mm - self.solid_height_mm()) / turns as f64;

        (0..turns)
            .map(|i| {
                // Active scalar counts waves still working, N per open turn.
                Segment::new(
                    format!("turn-{i}"),
                    gap,
                    turn_compliance,
                    self.waves_per_turn,
                    stress_factor,
                )
            })
            .collect()
    }
}

/// Results from a wave spring analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveSpringResult {
    /// Rate (N/mm) with all turns active
    pub rate_n_per_mm: f64,

    /// Force at solid (N)
    pub solid_force_n: f64,

    /// Travel to solid (mm)
    pub travel_mm: f64,

    /// Peak bending stress over the sweep (MPa)
    pub peak_stress_mpa: f64,

    /// Allowable static bending stress (MPa)
    pub allowable_stress_mpa: f64,

    /// Safety factor: allowable / peak
    pub safety_factor: f64,

    /// PASS / WARNING / FAIL classification
    pub verdict: Verdict,

    /// Energy stored at solid (J)
    pub stored_energy_j: f64,

    /// Full force-deflection curve
    pub curve: Vec<CurvePoint>,

    /// Cumulative stored energy along the curve
    pub energy: Vec<EnergyPoint>,
}

/// Analyze a multi-turn crest-to-crest wave spring.
pub fn calculate(input: &WaveSpringInput) -> CalcResult<WaveSpringResult> {
    input.validate()?;

    let props = input.alloy.properties();
    let allowable = input
        .alloy
        .allowable_bending_mpa(input.strip_thickness_mm)?
        .value();

    let segments = input.build_segments(props.e_mpa.value());
    validate_segments(&segments)?;

    let travel = input.free_height_mm - input.solid_height_mm();
    let curve = compute_nonlinear_kx(&segments, travel, input.steps);
    let energy = compute_energy(&curve);

    let peak_stress = curve.iter().map(|p| p.stress_mpa).fold(0.0, f64::max);
    let sf = safety_factor(peak_stress, allowable);

    Ok(WaveSpringResult {
        rate_n_per_mm: curve.first().map(|p| p.rate_n_per_mm).unwrap_or(0.0),
        solid_force_n: curve.last().map(|p| p.force_n).unwrap_or(0.0),
        travel_mm: travel,
        peak_stress_mpa: peak_stress,
        allowable_stress_mpa: allowable,
        safety_factor: sf,
        verdict: Verdict::classify(sf),
        stored_energy_j: energy.last().map(|e| e.joules).unwrap_or(0.0),
        curve,
        energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wave_spring() -> WaveSpringInput {
        WaveSpringInput {
            label: "Test WS".to_string(),
            mean_diameter_mm: 40.0,
            strip_width_mm: 5.0,
            strip_thickness_mm: 0.5,
            waves_per_turn: 3.5,
            turns: 4,
            free_height_mm: 5.0,
            alloy: StripAlloy::Stainless17_7,
            steps: 50,
        }
    }

    #[test]
    fn test_rate_closed_form() {
        let result = calculate(&test_wave_spring()).unwrap();
        // k = E b t³ N⁴ / (2.4 D³ Z)
        // = 203000 · 5 · 0.125 · 150.0625 / (2.4 · 64000 · 4) ≈ 31.0 N/mm
        assert!((result.rate_n_per_mm - 31.0).abs() < 0.2);
    }

    #[test]
    fn test_travel_and_wave_count() {
        let result = calculate(&test_wave_spring()).unwrap();
        // Travel = 5 − 4·0.5 = 3 mm; 4 turns × 3.5 waves active at start
        assert!((result.travel_mm - 3.0).abs() < 1e-9);
        assert_eq!(result.curve[0].active_scalar, 14.0);
    }

    #[test]
    fn test_moderate_deflection_passes() {
        let result = calculate(&test_wave_spring()).unwrap();
        assert_eq!(result.verdict, Verdict::Pass);
    }

    #[test]
    fn test_deep_travel_fails() {
        // Same spring asked to sweep to a much taller free height: the
        // flattening stress at solid exceeds the strip allowable.
        let input = WaveSpringInput {
            free_height_mm: 12.0,
            ..test_wave_spring()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.verdict, Verdict::Fail);
    }

    #[test]
    fn test_radial_wall_rejected() {
        let input = WaveSpringInput {
            strip_width_mm: 25.0,
            ..test_wave_spring()
        };
        let err = calculate(&input).unwrap_err();
        assert!(err.to_string().contains("Radial wall"));
    }

    #[test]
    fn test_free_height_below_solid_rejected() {
        let input = WaveSpringInput {
            free_height_mm: 1.5,
            ..test_wave_spring()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_wave_spring();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: WaveSpringInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.waves_per_turn, roundtrip.waves_per_turn);
    }
}
