//! # Equilibrium Solver
//!
//! Non-linear force-deflection analysis for springs modeled as a set of
//! independently compliant segments that progressively close (bottom out)
//! under load.
//!
//! ## Algorithm Overview
//!
//! At every sampled deflection `x` (independently, with no carry-over state
//! between points):
//!
//! 1. Hypothesize all segments open; sum their compliances.
//! 2. Estimate the force `F = (x − Σ closed gaps) / Σ open compliances`.
//! 3. Close every open segment whose implied deflection `F × compliance`
//!    meets or exceeds its gap (within tolerance).
//! 4. Repeat until an iteration closes no new segment.
//!
//! Each pass either closes at least one more segment or terminates, so the
//! iteration count is bounded by the segment count; the configured cap is a
//! safety valve for malformed input, not a tuning knob. When the open set's
//! combined compliance vanishes the assembly is at solid and the tangent
//! stiffness is reported as a large finite sentinel rather than infinity.
//!
//! The per-point reset is deliberate: the curve is reproducible regardless
//! of sampling order or density, and floating-point drift cannot compound
//! across the sweep. Do not replace it with incremental state tracking.

use serde::{Deserialize, Serialize};

use crate::analysis::segment::Segment;

/// Default number of curve intervals when the caller has no resolution
/// preference. Every calculation input's `steps` field defaults to this.
pub const DEFAULT_STEPS: usize = 100;

/// Numerical constants for the closure iteration.
///
/// The tolerance (1e-9 mm) and pass cap (15) are carried over from field
/// experience rather than derived; treat them as configurable constants,
/// not proven-optimal values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Closure tolerance (mm); also the threshold below which the open
    /// set's combined compliance counts as zero.
    pub tolerance_mm: f64,

    /// Maximum closure passes per sample point.
    pub max_passes: usize,

    /// Finite stand-in stiffness (N/mm) reported when the assembly is at
    /// solid, instead of infinity.
    pub solid_rate_n_per_mm: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance_mm: 1e-9,
            max_passes: 15,
            solid_rate_n_per_mm: 1e6,
        }
    }
}

/// One sampled point of the solved force-deflection curve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "x_mm": 7.0,
///   "rate_n_per_mm": 5.0,
///   "force_n": 25.0,
///   "active_scalar": 1.0,
///   "stress_mpa": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Deflection (mm) of this sample
    pub x_mm: f64,

    /// Tangent stiffness dF/dx (N/mm) at this deflection
    pub rate_n_per_mm: f64,

    /// Force (N) required to hold the assembly at this deflection
    pub force_n: f64,

    /// Sum of `active_scalar` over segments still open here
    pub active_scalar: f64,

    /// Peak stress (MPa): max over ALL segments of force × stress factor.
    /// Closed segments still carry force and can govern.
    pub stress_mpa: f64,
}

/// Solve one target deflection. Returns the curve point and the number of
/// closure passes it took to converge.
fn solve_point(segments: &[Segment], x_target: f64, config: &SolverConfig) -> (CurvePoint, usize) {
    let mut closed = vec![false; segments.len()];
    let mut force = 0.0_f64;
    let mut active_compliance: f64 = segments.iter().map(|s| s.compliance_mm_per_n).sum();
    let mut passes = 0;

    while passes < config.max_passes {
        passes += 1;

        if active_compliance <= config.tolerance_mm {
            // At solid (or all segments infinitely stiff): no further force
            // refinement is meaningful.
            break;
        }

        let closed_gaps: f64 = segments
            .iter()
            .zip(&closed)
            .filter(|(_, c)| **c)
            .map(|(s, _)| s.gap_mm)
            .sum();

        force = ((x_target - closed_gaps) / active_compliance).max(0.0);

        let mut newly_closed = false;
        for (segment, is_closed) in segments.iter().zip(closed.iter_mut()) {
            if *is_closed {
                continue;
            }
            let implied = force * segment.compliance_mm_per_n;
            if implied >= segment.gap_mm - config.tolerance_mm {
                *is_closed = true;
                newly_closed = true;
            }
        }

        if !newly_closed {
            break;
        }

        active_compliance = segments
            .iter()
            .zip(&closed)
            .filter(|(_, c)| !**c)
            .map(|(s, _)| s.compliance_mm_per_n)
            .sum();
    }

    let rate = if active_compliance > config.tolerance_mm {
        1.0 / active_compliance
    } else {
        config.solid_rate_n_per_mm
    };

    let active_scalar: f64 = segments
        .iter()
        .zip(&closed)
        .filter(|(_, c)| !**c)
        .map(|(s, _)| s.active_scalar)
        .sum();

    let stress = segments
        .iter()
        .map(|s| force * s.stress_factor_mpa_per_n)
        .fold(0.0_f64, f64::max);

    (
        CurvePoint {
            x_mm: x_target,
            rate_n_per_mm: rate,
            force_n: force,
            active_scalar,
            stress_mpa: stress,
        },
        passes,
    )
}

/// Compute the non-linear stiffness curve K(x) for a segment set.
///
/// Produces `steps + 1` points with `x` linear from 0 to `max_deflection_mm`
/// inclusive. The solver assumes a valid segment set (see
/// [`crate::analysis::segment::validate_segments`]); adapters validate at
/// their boundary. Degenerate inputs (all segments closed, zero compliance,
/// zero deflection) degrade gracefully and never panic.
pub fn compute_nonlinear_kx(
    segments: &[Segment],
    max_deflection_mm: f64,
    steps: usize,
) -> Vec<CurvePoint> {
    compute_nonlinear_kx_with(segments, max_deflection_mm, steps, &SolverConfig::default())
}

/// [`compute_nonlinear_kx`] with explicit numerical constants.
pub fn compute_nonlinear_kx_with(
    segments: &[Segment],
    max_deflection_mm: f64,
    steps: usize,
    config: &SolverConfig,
) -> Vec<CurvePoint> {
    let steps = steps.max(1);
    let dx = max_deflection_mm / steps as f64;

    (0..=steps)
        .map(|i| solve_point(segments, dx * i as f64, config).0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segment::Segment;

    fn seg(id: &str, gap: f64, compliance: f64, scalar: f64, stress_factor: f64) -> Segment {
        Segment::new(id, gap, compliance, scalar, stress_factor)
    }

    /// Worked example: two segments in series, the smaller-gap one stiffer.
    fn two_stage() -> Vec<Segment> {
        vec![
            seg("s1", 5.0, 0.1, 1.0, 2.0),
            seg("s2", 10.0, 0.2, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_zero_deflection_zero_force() {
        let curve = compute_nonlinear_kx(&two_stage(), 15.0, 15);
        assert_eq!(curve.len(), 16);
        assert_eq!(curve[0].x_mm, 0.0);
        assert_eq!(curve[0].force_n, 0.0);
        assert_eq!(curve[0].stress_mpa, 0.0);
    }

    #[test]
    fn test_force_and_stress_monotone() {
        let curve = compute_nonlinear_kx(&two_stage(), 15.0, 60);
        for pair in curve.windows(2) {
            assert!(pair[1].force_n >= pair[0].force_n);
            assert!(pair[1].stress_mpa >= pair[0].stress_mpa);
        }
    }

    #[test]
    fn test_single_segment_linear_region() {
        // One segment, gap 5 mm, compliance 0.1 mm/N: F = x / 0.1 below the gap.
        let segments = vec![seg("only", 5.0, 0.1, 3.0, 1.5)];
        let curve = compute_nonlinear_kx(&segments, 4.0, 8);
        for point in &curve {
            assert!((point.force_n - point.x_mm / 0.1).abs() < 1e-9);
            assert!((point.rate_n_per_mm - 10.0).abs() < 1e-9);
            assert_eq!(point.active_scalar, 3.0);
        }
    }

    #[test]
    fn test_single_segment_sentinel_after_closure() {
        let segments = vec![seg("only", 5.0, 0.1, 3.0, 1.5)];
        let curve = compute_nonlinear_kx(&segments, 8.0, 8);
        let last = curve.last().unwrap();
        // Past its own gap the lone segment is closed: solid sentinel rate,
        // no open active scalar.
        assert_eq!(last.rate_n_per_mm, 1e6);
        assert_eq!(last.active_scalar, 0.0);
    }

    #[test]
    fn test_parallel_identical_segments_constant_rate() {
        // N identical segments whose gaps are never reached behave as a
        // constant-rate stack: k = 1 / (N·C).
        let n = 5;
        let c = 0.05;
        let segments: Vec<Segment> = (0..n)
            .map(|i| seg(&format!("s{i}"), 1e9, c, 1.0, 0.1))
            .collect();
        let curve = compute_nonlinear_kx(&segments, 50.0, 25);
        let expected = 1.0 / (n as f64 * c);
        for point in &curve {
            assert!((point.rate_n_per_mm - expected).abs() < 1e-9);
            assert_eq!(point.active_scalar, n as f64);
        }
    }

    #[test]
    fn test_smaller_gap_closes_first() {
        // Equal compliances, different gaps: the 2 mm segment must drop out
        // of the active set before the 10 mm one.
        let segments = vec![seg("small", 2.0, 0.1, 1.0, 1.0), seg("big", 10.0, 0.1, 1.0, 1.0)];
        let curve = compute_nonlinear_kx(&segments, 10.0, 100);

        let first_drop = curve
            .iter()
            .position(|p| p.active_scalar < 2.0)
            .expect("small segment should close within the sweep");
        // Both open: x = 0.2·F, small closes when 0.1·F ≥ 2 → x ≥ 4.
        assert!((curve[first_drop].x_mm - 4.0).abs() < 0.11);
        // Stiffness doubles once only one compliance remains.
        assert!((curve[first_drop].rate_n_per_mm - 10.0).abs() < 1e-9);
        assert!((curve[first_drop - 1].rate_n_per_mm - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_stage_example_scenario() {
        let curve = compute_nonlinear_kx(&two_stage(), 15.0, 15);

        // Both segments open over the whole ramp: combined compliance 0.3,
        // so k ≈ 3.33 N/mm and F = x / 0.3.
        let mid = &curve[14];
        assert!((mid.rate_n_per_mm - 1.0 / 0.3).abs() < 1e-9);
        assert!((mid.force_n - 14.0 / 0.3).abs() < 1e-9);

        // At x = 15 both segments reach their gaps (5 + 10 mm of travel):
        // the assembly is exactly at solid with F = 50 N.
        let last = &curve[15];
        assert!((last.force_n - 50.0).abs() < 1e-9);
        assert_eq!(last.rate_n_per_mm, 1e6);
        assert_eq!(last.active_scalar, 0.0);
        // Stress maps through the highest stress factor (2 MPa/N).
        assert!((last.stress_mpa - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_closed_segment_still_governs_stress() {
        // The small-gap segment has the larger stress factor; after it
        // closes it must still drive the reported peak stress.
        let segments = vec![seg("hot", 1.0, 0.1, 1.0, 5.0), seg("cold", 50.0, 0.1, 1.0, 0.5)];
        let curve = compute_nonlinear_kx(&segments, 20.0, 20);
        let last = curve.last().unwrap();
        assert!(last.active_scalar < 2.0);
        assert!((last.stress_mpa - last.force_n * 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_gap_degrades_gracefully() {
        // Everything starts closed: solid from x = 0, zero force, no panic.
        let segments = vec![seg("a", 0.0, 0.1, 1.0, 1.0), seg("b", 0.0, 0.2, 1.0, 1.0)];
        let curve = compute_nonlinear_kx(&segments, 3.0, 3);
        for point in &curve {
            assert_eq!(point.rate_n_per_mm, 1e6);
            assert_eq!(point.active_scalar, 0.0);
        }
        assert_eq!(curve[0].force_n, 0.0);
    }

    #[test]
    fn test_zero_compliance_segments() {
        // Infinitely stiff segments never contribute compliance; the solver
        // reports the sentinel instead of dividing by zero.
        let segments = vec![seg("rigid", 5.0, 0.0, 1.0, 1.0)];
        let curve = compute_nonlinear_kx(&segments, 5.0, 5);
        for point in &curve {
            assert_eq!(point.rate_n_per_mm, 1e6);
            assert!(point.force_n.is_finite());
        }
    }

    #[test]
    fn test_zero_deflection_sweep() {
        let curve = compute_nonlinear_kx(&two_stage(), 0.0, 10);
        assert_eq!(curve.len(), 11);
        for point in &curve {
            assert_eq!(point.x_mm, 0.0);
            assert_eq!(point.force_n, 0.0);
        }
    }

    #[test]
    fn test_convergence_well_inside_pass_cap() {
        // 20 staggered segments: every point must converge in far fewer
        // passes than the cap allows.
        let segments: Vec<Segment> = (0..20)
            .map(|i| seg(&format!("s{i}"), 1.0 + i as f64, 0.02, 1.0, 0.5))
            .collect();
        let config = SolverConfig::default();
        let max_x = 40.0;
        for i in 0..=80 {
            let x = max_x * i as f64 / 80.0;
            let (_, passes) = solve_point(&segments, x, &config);
            assert!(
                passes < config.max_passes,
                "point x={x} used {passes} passes"
            );
        }
    }

    #[test]
    fn test_determinism() {
        let a = compute_nonlinear_kx(&two_stage(), 15.0, 100);
        let b = compute_nonlinear_kx(&two_stage(), 15.0, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sampling_density_agrees_at_shared_points() {
        // Per-point reset means the coarse grid is a subset of the fine one.
        let coarse = compute_nonlinear_kx(&two_stage(), 15.0, 15);
        let fine = compute_nonlinear_kx(&two_stage(), 15.0, 150);
        for (i, point) in coarse.iter().enumerate() {
            assert_eq!(point, &fine[i * 10]);
        }
    }

    #[test]
    fn test_curve_point_serialization() {
        let curve = compute_nonlinear_kx(&two_stage(), 15.0, 5);
        let json = serde_json::to_string(&curve).unwrap();
        let roundtrip: Vec<CurvePoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(curve, roundtrip);
    }
}
