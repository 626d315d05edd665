//! Round Spring Wire Materials
//!
//! Reference properties for the common round spring wire alloys
//! (ASTM A228/A401/A232/A313 families). Minimum tensile strength is
//! diameter-dependent; values follow the handbook strength bands, looked up
//! lazily from a static table.
//!
//! Allowable static shear stress is taken as an alloy-specific fraction of
//! the minimum tensile strength, the usual design practice for statically
//! loaded compression and extension springs.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals};

/// Round spring wire alloys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireAlloy {
    /// Music wire (ASTM A228), cold-drawn high-carbon
    #[serde(rename = "A228")]
    MusicWire,
    /// Oil-tempered chrome-silicon (ASTM A401)
    #[serde(rename = "A401")]
    ChromeSilicon,
    /// Chrome-vanadium (ASTM A232)
    #[serde(rename = "A232")]
    ChromeVanadium,
    /// Stainless 302 (ASTM A313)
    #[serde(rename = "A313")]
    Stainless302,
}

/// Elastic properties of a wire alloy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireProperties {
    /// Young's modulus E
    pub e_mpa: Megapascals,
    /// Shear modulus G
    pub g_mpa: Megapascals,
    /// Allowable static shear stress as a fraction of minimum tensile
    pub shear_allowable_fraction: f64,
}

impl WireProperties {
    /// Young's modulus quoted the handbook way
    pub fn e_gpa(&self) -> Gigapascals {
        self.e_mpa.into()
    }

    /// Shear modulus quoted the handbook way
    pub fn g_gpa(&self) -> Gigapascals {
        self.g_mpa.into()
    }
}

/// Strength band: (floor mm, exclusive; ceiling mm, inclusive; Rm MPa)
type Band = (f64, f64, f64);

/// Find the band containing a size. Bands are half-open `(lo, hi]` so a
/// diameter landing exactly on a shared boundary maps to one band only.
fn find_band(bands: &[Band], size_mm: f64) -> Option<f64> {
    bands
        .iter()
        .find(|(lo, hi, _)| size_mm > *lo && size_mm <= *hi)
        .map(|(_, _, rm)| *rm)
}

static TENSILE_BANDS: Lazy<HashMap<WireAlloy, Vec<Band>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        WireAlloy::MusicWire,
        vec![
            (0.1, 0.5, 2800.0),
            (0.5, 1.0, 2400.0),
            (1.0, 2.0, 2150.0),
            (2.0, 3.0, 1950.0),
            (3.0, 5.0, 1800.0),
            (5.0, 6.5, 1700.0),
        ],
    );
    m.insert(
        WireAlloy::ChromeSilicon,
        vec![
            (0.5, 2.0, 2000.0),
            (2.0, 5.0, 1900.0),
            (5.0, 10.0, 1800.0),
            (10.0, 16.0, 1700.0),
        ],
    );
    m.insert(
        WireAlloy::ChromeVanadium,
        vec![
            (0.5, 2.0, 1900.0),
            (2.0, 5.0, 1800.0),
            (5.0, 10.0, 1700.0),
            (10.0, 16.0, 1600.0),
        ],
    );
    m.insert(
        WireAlloy::Stainless302,
        vec![
            (0.2, 1.0, 2000.0),
            (1.0, 3.0, 1700.0),
            (3.0, 6.0, 1500.0),
            (6.0, 10.0, 1400.0),
        ],
    );
    m
});

impl WireAlloy {
    /// All wire alloy variants for UI selection
    pub const ALL: [WireAlloy; 4] = [
        WireAlloy::MusicWire,
        WireAlloy::ChromeSilicon,
        WireAlloy::ChromeVanadium,
        WireAlloy::Stainless302,
    ];

    /// Get the ASTM code string (e.g., "A228")
    pub fn code(&self) -> &'static str {
        match self {
            WireAlloy::MusicWire => "A228",
            WireAlloy::ChromeSilicon => "A401",
            WireAlloy::ChromeVanadium => "A232",
            WireAlloy::Stainless302 => "A313",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "A228" | "MUSICWIRE" | "MUSIC" => Ok(WireAlloy::MusicWire),
            "A401" | "CHROMESILICON" | "CRSI" => Ok(WireAlloy::ChromeSilicon),
            "A232" | "CHROMEVANADIUM" | "CRV" => Ok(WireAlloy::ChromeVanadium),
            "A313" | "STAINLESS302" | "302" | "SS302" => Ok(WireAlloy::Stainless302),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WireAlloy::MusicWire => "Music Wire (A228)",
            WireAlloy::ChromeSilicon => "Chrome-Silicon (A401)",
            WireAlloy::ChromeVanadium => "Chrome-Vanadium (A232)",
            WireAlloy::Stainless302 => "Stainless 302 (A313)",
        }
    }

    /// Elastic properties for this alloy
    pub fn properties(&self) -> WireProperties {
        match self {
            WireAlloy::MusicWire => WireProperties {
                e_mpa: Megapascals(207_000.0),
                g_mpa: Megapascals(79_300.0),
                shear_allowable_fraction: 0.45,
            },
            WireAlloy::ChromeSilicon => WireProperties {
                e_mpa: Megapascals(207_000.0),
                g_mpa: Megapascals(77_200.0),
                shear_allowable_fraction: 0.50,
            },
            WireAlloy::ChromeVanadium => WireProperties {
                e_mpa: Megapascals(207_000.0),
                g_mpa: Megapascals(77_200.0),
                shear_allowable_fraction: 0.45,
            },
            WireAlloy::Stainless302 => WireProperties {
                e_mpa: Megapascals(193_000.0),
                g_mpa: Megapascals(69_000.0),
                shear_allowable_fraction: 0.35,
            },
        }
    }

    /// Minimum tensile strength Rm for a wire diameter.
    ///
    /// Errors with `SizeOutOfRange` when the diameter falls outside the
    /// tabulated bands for this alloy.
    pub fn min_tensile_mpa(&self, wire_diameter_mm: f64) -> CalcResult<Megapascals> {
        find_band(&TENSILE_BANDS[self], wire_diameter_mm)
            .map(Megapascals)
            .ok_or_else(|| CalcError::size_out_of_range(self.display_name(), wire_diameter_mm))
    }

    /// Allowable static shear stress for a wire diameter:
    /// alloy fraction × minimum tensile.
    pub fn allowable_shear_mpa(&self, wire_diameter_mm: f64) -> CalcResult<Megapascals> {
        let rm = self.min_tensile_mpa(wire_diameter_mm)?;
        Ok(rm * self.properties().shear_allowable_fraction)
    }
}

impl std::fmt::Display for WireAlloy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_wire_bands() {
        let rm_thin = WireAlloy::MusicWire.min_tensile_mpa(0.3).unwrap();
        let rm_thick = WireAlloy::MusicWire.min_tensile_mpa(4.0).unwrap();
        // Thinner wire is stronger per unit area
        assert!(rm_thin > rm_thick);
        assert_eq!(rm_thin.value(), 2800.0);
        assert_eq!(rm_thick.value(), 1800.0);
    }

    #[test]
    fn test_shared_boundary_is_unambiguous() {
        // d = 2.0 sits on the 2150/1950 boundary; the bands are (lo, hi],
        // so it belongs to the finer band only.
        let rm = WireAlloy::MusicWire.min_tensile_mpa(2.0).unwrap();
        assert_eq!(rm.value(), 2150.0);
        let rm = WireAlloy::ChromeVanadium.min_tensile_mpa(5.0).unwrap();
        assert_eq!(rm.value(), 1800.0);
    }

    #[test]
    fn test_exclusive_floor() {
        // The table floor itself is outside the tabulated range.
        assert!(WireAlloy::MusicWire.min_tensile_mpa(0.1).is_err());
        assert!(WireAlloy::MusicWire.min_tensile_mpa(0.11).is_ok());
    }

    #[test]
    fn test_out_of_range_diameter() {
        let err = WireAlloy::MusicWire.min_tensile_mpa(20.0).unwrap_err();
        assert_eq!(err.error_code(), "SIZE_OUT_OF_RANGE");
    }

    #[test]
    fn test_allowable_shear() {
        // Music wire at 2.5 mm: 0.45 × 1950
        let tau = WireAlloy::MusicWire.allowable_shear_mpa(2.5).unwrap();
        assert!((tau.value() - 877.5).abs() < 0.1);
    }

    #[test]
    fn test_moduli_in_gpa() {
        let props = WireAlloy::MusicWire.properties();
        assert!((props.e_gpa().value() - 207.0).abs() < 1e-9);
        assert!((props.g_gpa().value() - 79.3).abs() < 1e-9);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            WireAlloy::from_str_flexible("music wire").unwrap(),
            WireAlloy::MusicWire
        );
        assert_eq!(
            WireAlloy::from_str_flexible("CrSi").unwrap(),
            WireAlloy::ChromeSilicon
        );
        assert!(WireAlloy::from_str_flexible("unobtainium").is_err());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&WireAlloy::ChromeVanadium).unwrap();
        assert_eq!(json, "\"A232\"");
        let roundtrip: WireAlloy = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, WireAlloy::ChromeVanadium);
    }
}
