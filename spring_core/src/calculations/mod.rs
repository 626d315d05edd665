//! # Spring Calculations
//!
//! This module contains the per-family spring analyses. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every family translates its geometry and material into a
//! [`crate::analysis::Segment`] set, runs the equilibrium solver over the
//! usable travel, and classifies the curve's peak stress against the
//! material allowable into a [`Verdict`].
//!
//! ## Available Calculations
//!
//! - [`variable_pitch`] - Variable-pitch compression spring (round wire)
//! - [`die`] - Die spring (rectangular wire, torsion-constant rate)
//! - [`wave`] - Multi-turn crest-to-crest wave spring (flat strip)
//! - [`garter`] - Garter spring (ring extension spring, radial loading)

pub mod die;
pub mod garter;
pub mod variable_pitch;
pub mod wave;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use die::{DieSpringInput, DieSpringResult};
pub use garter::{GarterSpringInput, GarterSpringResult};
pub use variable_pitch::{VariablePitchInput, VariablePitchResult};
pub use wave::{WaveSpringInput, WaveSpringResult};

/// Safety factor below which a design is flagged WARNING rather than PASS.
pub const WARNING_SAFETY_FACTOR: f64 = 1.2;

/// Serde default for the curve sample count, shared by every input type.
pub(crate) fn default_steps() -> usize {
    crate::analysis::DEFAULT_STEPS
}

/// Engineering verdict for a spring design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Peak stress comfortably below allowable (safety factor ≥ 1.2)
    Pass,
    /// Peak stress below allowable but with thin margin (1.0 ≤ SF < 1.2)
    Warning,
    /// Peak stress exceeds allowable (SF < 1.0)
    Fail,
}

impl Verdict {
    /// Classify a safety factor (allowable / peak stress).
    pub fn classify(safety_factor: f64) -> Self {
        if safety_factor < 1.0 {
            Verdict::Fail
        } else if safety_factor < WARNING_SAFETY_FACTOR {
            Verdict::Warning
        } else {
            Verdict::Pass
        }
    }

    /// True unless the design fails outright
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Verdict::Fail)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Pass => "PASS",
            Verdict::Warning => "WARNING",
            Verdict::Fail => "FAIL",
        };
        write!(f, "{s}")
    }
}

/// Safety factor for a peak stress against an allowable.
///
/// Zero peak stress (e.g., zero travel) yields infinity; the verdict for it
/// is PASS.
pub fn safety_factor(peak_stress_mpa: f64, allowable_mpa: f64) -> f64 {
    if peak_stress_mpa <= 0.0 {
        f64::INFINITY
    } else {
        allowable_mpa / peak_stress_mpa
    }
}

/// Enum wrapper for all spring calculation inputs.
///
/// Allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpringItem {
    /// Variable-pitch compression spring
    VariablePitch(VariablePitchInput),
    /// Rectangular-wire die spring
    Die(DieSpringInput),
    /// Multi-turn wave spring
    Wave(WaveSpringInput),
    /// Garter (ring extension) spring
    Garter(GarterSpringInput),
}

impl SpringItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            SpringItem::VariablePitch(i) => &i.label,
            SpringItem::Die(i) => &i.label,
            SpringItem::Wave(i) => &i.label,
            SpringItem::Garter(i) => &i.label,
        }
    }

    /// Get the spring family as a string
    pub fn family(&self) -> &'static str {
        match self {
            SpringItem::VariablePitch(_) => "Variable-Pitch Compression",
            SpringItem::Die(_) => "Die Spring",
            SpringItem::Wave(_) => "Wave Spring",
            SpringItem::Garter(_) => "Garter Spring",
        }
    }

    /// Run the family's calculation and condense it into a [`SpringSummary`].
    pub fn analyze(&self) -> CalcResult<SpringSummary> {
        let (verdict, safety_factor, peak, allowable) = match self {
            SpringItem::VariablePitch(i) => {
                let r = variable_pitch::calculate(i)?;
                (
                    r.verdict,
                    r.safety_factor,
                    r.peak_stress_mpa,
                    r.allowable_stress_mpa,
                )
            }
            SpringItem::Die(i) => {
                let r = die::calculate(i)?;
                (
                    r.verdict,
                    r.safety_factor,
                    r.peak_stress_mpa,
                    r.allowable_stress_mpa,
                )
            }
            SpringItem::Wave(i) => {
                let r = wave::calculate(i)?;
                (
                    r.verdict,
                    r.safety_factor,
                    r.peak_stress_mpa,
                    r.allowable_stress_mpa,
                )
            }
            SpringItem::Garter(i) => {
                let r = garter::calculate(i)?;
                (
                    r.verdict,
                    r.safety_factor,
                    r.peak_stress_mpa,
                    r.allowable_stress_mpa,
                )
            }
        };
        Ok(SpringSummary {
            label: self.label().to_string(),
            family: self.family().to_string(),
            verdict,
            safety_factor,
            peak_stress_mpa: peak,
            allowable_stress_mpa: allowable,
        })
    }
}

/// One-line stress summary of any spring family, for reports and listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpringSummary {
    /// User label carried over from the input
    pub label: String,

    /// Spring family name
    pub family: String,

    /// PASS / WARNING / FAIL classification
    pub verdict: Verdict,

    /// Safety factor: allowable / peak
    pub safety_factor: f64,

    /// Peak stress over the whole sweep (MPa)
    pub peak_stress_mpa: f64,

    /// Material allowable (MPa)
    pub allowable_stress_mpa: f64,
}
