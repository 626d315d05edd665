//! # Materials Database
//!
//! Spring material definitions and property lookups. Two families:
//!
//! - **Round wire** ([`wire`]): music wire, chrome-silicon, chrome-vanadium,
//!   stainless 302 — used by compression, die and garter springs, stressed
//!   in torsion.
//! - **Flat strip** ([`strip`]): carbon steel and 17-7 PH — used by wave
//!   springs, stressed in bending.
//!
//! Minimum tensile strength depends on wire diameter / strip thickness and
//! is looked up from handbook strength bands; allowable working stress is a
//! family-specific fraction of it.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::materials::WireAlloy;
//!
//! let alloy = WireAlloy::MusicWire;
//! let props = alloy.properties();
//! println!("G = {} GPa", props.g_gpa().value());
//! let tau_allow = alloy.allowable_shear_mpa(2.0).unwrap();
//! assert!(tau_allow.value() > 900.0);
//! ```

pub mod strip;
pub mod wire;

pub use strip::{StripAlloy, StripProperties};
pub use wire::{WireAlloy, WireProperties};
