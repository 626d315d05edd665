//! # Segment Model
//!
//! A spring or spring assembly is modeled as a set of independently
//! compliant segments (one coil group, one wave crest region, one stage of
//! a variable-pitch spring). Each segment travels until it closes (bottoms
//! out) and then behaves as rigid.
//!
//! Segments are immutable inputs to one solver invocation; the solver never
//! mutates them and recomputes the open/closed partition from scratch at
//! every sampled deflection point.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One discrete compliant element of a spring assembly.
///
/// Invariant: a segment's total physical travel when closed equals `gap_mm`;
/// it never deflects more than `gap_mm` regardless of applied force.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "coil-3",
///   "gap_mm": 4.2,
///   "compliance_mm_per_n": 0.0185,
///   "active_scalar": 1.0,
///   "stress_factor_mpa_per_n": 1.94
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable identifier, unique within a segment set
    pub id: String,

    /// Travel (mm) before this segment closes. 0 means it starts closed.
    pub gap_mm: f64,

    /// Deflection per unit force (mm/N) while open. 0 means infinitely stiff.
    pub compliance_mm_per_n: f64,

    /// Domain quantity (e.g., active coil count) summed over open segments.
    /// Informational only; not used in the force balance.
    pub active_scalar: f64,

    /// Stress per unit force (MPa/N) for this segment's peak stress.
    pub stress_factor_mpa_per_n: f64,
}

impl Segment {
    /// Create a segment with the given mechanical parameters.
    pub fn new(
        id: impl Into<String>,
        gap_mm: f64,
        compliance_mm_per_n: f64,
        active_scalar: f64,
        stress_factor_mpa_per_n: f64,
    ) -> Self {
        Segment {
            id: id.into(),
            gap_mm,
            compliance_mm_per_n,
            active_scalar,
            stress_factor_mpa_per_n,
        }
    }

    /// Validate the segment invariants (`gap ≥ 0`, `compliance ≥ 0`,
    /// `stress_factor ≥ 0`, all finite).
    ///
    /// Adapters must call this (via [`validate_segments`]) before invoking
    /// the solver; the solver itself assumes valid input.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.gap_mm.is_finite() || self.gap_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "gap_mm",
                self.gap_mm.to_string(),
                format!("Segment '{}' gap must be finite and non-negative", self.id),
            ));
        }
        if !self.compliance_mm_per_n.is_finite() || self.compliance_mm_per_n < 0.0 {
            return Err(CalcError::invalid_input(
                "compliance_mm_per_n",
                self.compliance_mm_per_n.to_string(),
                format!(
                    "Segment '{}' compliance must be finite and non-negative",
                    self.id
                ),
            ));
        }
        if !self.stress_factor_mpa_per_n.is_finite() || self.stress_factor_mpa_per_n < 0.0 {
            return Err(CalcError::invalid_input(
                "stress_factor_mpa_per_n",
                self.stress_factor_mpa_per_n.to_string(),
                format!(
                    "Segment '{}' stress factor must be finite and non-negative",
                    self.id
                ),
            ));
        }
        Ok(())
    }
}

/// Validate a whole segment set: non-empty, every segment valid, ids unique.
pub fn validate_segments(segments: &[Segment]) -> CalcResult<()> {
    if segments.is_empty() {
        return Err(CalcError::invalid_input(
            "segments",
            "[]",
            "Segment set must be non-empty",
        ));
    }
    for segment in segments {
        segment.validate()?;
    }
    for (i, a) in segments.iter().enumerate() {
        if segments[i + 1..].iter().any(|b| b.id == a.id) {
            return Err(CalcError::invalid_input(
                "segments",
                a.id.clone(),
                "Segment ids must be unique within a set",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_segment() {
        let s = Segment::new("s1", 5.0, 0.1, 1.0, 2.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_zero_gap_is_valid() {
        // A zero gap means the segment starts closed; still a legal model.
        let s = Segment::new("s1", 0.0, 0.1, 1.0, 2.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_negative_gap_rejected() {
        let s = Segment::new("s1", -1.0, 0.1, 1.0, 2.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_negative_compliance_rejected() {
        let s = Segment::new("s1", 1.0, -0.1, 1.0, 2.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let s = Segment::new("s1", f64::NAN, 0.1, 1.0, 2.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(validate_segments(&[]).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let set = vec![
            Segment::new("s1", 5.0, 0.1, 1.0, 2.0),
            Segment::new("s1", 10.0, 0.2, 1.0, 1.0),
        ];
        assert!(validate_segments(&set).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let s = Segment::new("coil-3", 4.2, 0.0185, 1.0, 1.94);
        let json = serde_json::to_string(&s).unwrap();
        let roundtrip: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(s, roundtrip);
    }
}
