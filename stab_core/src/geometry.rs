//! # Cylinder Weight Model
//!
//! Pure weight functions for cylindrical bar stock and drilled bores.
//! Everything reduces to weight = π·r²·length·density, with lengths and
//! diameters in inches and densities in ounces per cubic inch.
//!
//! The two bore diameters are fixed by the tooling: blind holes are made
//! with the tap drill for the stud thread, through-holes with a 5/16" bit.
//!
//! ## Example
//!
//! ```rust
//! use stab_core::geometry::cylinder_weight_oz;
//! use stab_core::materials::Material;
//!
//! let density = Material::Stainless.density_oz_per_in3();
//! let weight = cylinder_weight_oz(0.5, 1.0, density);
//! assert!((weight - 0.911).abs() < 0.001);
//! ```

use std::f64::consts::PI;

/// Tap drill diameter in inches, oversize to clear the stud threads
pub const TAP_DRILL_DIA_IN: f64 = 0.280;

/// Through-hole drill diameter in inches
pub const THRU_DRILL_DIA_IN: f64 = 5.0 / 16.0;

/// Weight of a solid cylinder of the given diameter and length
pub fn cylinder_weight_oz(diameter_in: f64, length_in: f64, density_oz_per_in3: f64) -> f64 {
    let radius = diameter_in / 2.0;
    PI * radius * radius * length_in * density_oz_per_in3
}

/// Weight of material removed by a tap-drill bore of the given depth
pub fn drill_hole_weight_oz(depth_in: f64, density_oz_per_in3: f64) -> f64 {
    let radius = TAP_DRILL_DIA_IN / 2.0;
    PI * radius * radius * depth_in * density_oz_per_in3
}

/// Weight of material removed by a full-length through bore
pub fn through_hole_weight_oz(length_in: f64, density_oz_per_in3: f64) -> f64 {
    let radius = THRU_DRILL_DIA_IN / 2.0;
    PI * radius * radius * length_in * density_oz_per_in3
}
