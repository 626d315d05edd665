//! Flat Strip Materials (wave springs)
//!
//! Wave springs are wound from flat strip and stressed in bending, so the
//! governing properties differ from round wire: Young's modulus drives the
//! rate and the allowable is a bending fraction of minimum tensile.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals};

/// Flat strip alloys used for wave springs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StripAlloy {
    /// Hardened high-carbon steel strip (SAE 1075 class)
    #[serde(rename = "C1075")]
    CarbonSteel,
    /// 17-7 PH precipitation-hardening stainless
    #[serde(rename = "17-7PH")]
    Stainless17_7,
}

/// Elastic properties of a strip alloy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripProperties {
    /// Young's modulus E
    pub e_mpa: Megapascals,
    /// Allowable static bending stress as a fraction of minimum tensile
    pub bending_allowable_fraction: f64,
}

impl StripProperties {
    /// Young's modulus quoted the handbook way
    pub fn e_gpa(&self) -> Gigapascals {
        self.e_mpa.into()
    }
}

/// Strength band: (floor mm, exclusive; ceiling mm, inclusive; Rm MPa)
type Band = (f64, f64, f64);

static TENSILE_BANDS: Lazy<HashMap<StripAlloy, Vec<Band>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        StripAlloy::CarbonSteel,
        vec![
            (0.1, 0.5, 1900.0),
            (0.5, 1.0, 1800.0),
            (1.0, 2.0, 1700.0),
            (2.0, 4.0, 1600.0),
        ],
    );
    m.insert(
        StripAlloy::Stainless17_7,
        vec![
            (0.1, 0.5, 1750.0),
            (0.5, 1.0, 1650.0),
            (1.0, 2.0, 1550.0),
            (2.0, 4.0, 1450.0),
        ],
    );
    m
});

impl StripAlloy {
    /// All strip alloy variants for UI selection
    pub const ALL: [StripAlloy; 2] = [StripAlloy::CarbonSteel, StripAlloy::Stainless17_7];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "C1075" | "1075" | "CARBONSTEEL" | "CARBON" => Ok(StripAlloy::CarbonSteel),
            "177PH" | "17.7PH" | "STAINLESS177" => Ok(StripAlloy::Stainless17_7),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StripAlloy::CarbonSteel => "Carbon Steel Strip (1075)",
            StripAlloy::Stainless17_7 => "Stainless 17-7 PH",
        }
    }

    /// Elastic properties for this alloy
    pub fn properties(&self) -> StripProperties {
        match self {
            StripAlloy::CarbonSteel => StripProperties {
                e_mpa: Megapascals(206_800.0),
                bending_allowable_fraction: 0.75,
            },
            StripAlloy::Stainless17_7 => StripProperties {
                e_mpa: Megapascals(203_000.0),
                bending_allowable_fraction: 0.75,
            },
        }
    }

    /// Minimum tensile strength Rm for a strip thickness.
    ///
    /// Bands are half-open `(lo, hi]` so a thickness on a shared boundary
    /// maps to one band only.
    pub fn min_tensile_mpa(&self, thickness_mm: f64) -> CalcResult<Megapascals> {
        let bands = &TENSILE_BANDS[self];
        bands
            .iter()
            .find(|(lo, hi, _)| thickness_mm > *lo && thickness_mm <= *hi)
            .map(|(_, _, rm)| Megapascals(*rm))
            .ok_or_else(|| CalcError::size_out_of_range(self.display_name(), thickness_mm))
    }

    /// Allowable static bending stress for a strip thickness.
    pub fn allowable_bending_mpa(&self, thickness_mm: f64) -> CalcResult<Megapascals> {
        let rm = self.min_tensile_mpa(thickness_mm)?;
        Ok(rm * self.properties().bending_allowable_fraction)
    }
}

impl std::fmt::Display for StripAlloy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
