//! # Blind-Hole Calculation
//!
//! Solves for the bar-stock length of a weight with a tap-drilled blind
//! hole of known depth, in closed form.
//!
//! ## Assumptions
//!
//! - End placement: one hole, drilled into one end
//! - Mid placement: holes of the same depth drilled into both ends, so the
//!   removed-material correction is counted twice
//! - The stud is a separate steel part; its weight is deducted from the
//!   target rather than computed from the body material
//!
//! ## Example
//!
//! ```rust
//! use stab_core::calculations::blind_hole::{calculate, BlindHoleInput, DrillPlacement};
//! use stab_core::materials::{Material, StudSize};
//!
//! let input = BlindHoleInput {
//!     label: "W-1".to_string(),
//!     target_weight_oz: 8.0,
//!     diameter_in: 0.75,
//!     material: Material::Tungsten,
//!     drill_depth_in: 0.5,
//!     stud: StudSize::Medium,
//!     placement: DrillPlacement::End,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.length_in - 1.869).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};
use crate::geometry::drill_hole_weight_oz;
use crate::materials::{Material, StudSize};

use super::WeightResult;

/// Where the blind hole is drilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrillPlacement {
    /// Single hole at one end
    #[default]
    End,
    /// Holes of equal depth at both ends
    Mid,
}

impl DrillPlacement {
    pub const ALL: [DrillPlacement; 2] = [DrillPlacement::End, DrillPlacement::Mid];

    /// Number of bores removed from the body
    pub fn hole_count(&self) -> f64 {
        match self {
            DrillPlacement::End => 1.0,
            DrillPlacement::Mid => 2.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DrillPlacement::End => "End drilled",
            DrillPlacement::Mid => "Mid drilled",
        }
    }
}

impl std::fmt::Display for DrillPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for a blind-hole weight.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "target_weight_oz": 8.0,
///   "diameter_in": 0.75,
///   "material": "Tungsten",
///   "drill_depth_in": 0.5,
///   "stud": "Medium",
///   "placement": "End"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlindHoleInput {
    /// User label for this weight (e.g., "W-1", "Front Bar 8oz")
    pub label: String,

    /// Desired finished weight in ounces
    pub target_weight_oz: f64,

    /// Bar-stock diameter in inches
    pub diameter_in: f64,

    /// Body material
    pub material: Material,

    /// Tap-drill depth in inches
    pub drill_depth_in: f64,

    /// Stud to install
    pub stud: StudSize,

    /// End- or mid-drilled configuration
    pub placement: DrillPlacement,
}

impl BlindHoleInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.target_weight_oz <= 0.0 {
            return Err(CalcError::invalid_input(
                "target_weight_oz",
                self.target_weight_oz.to_string(),
                "Target weight must be positive",
            ));
        }
        if self.diameter_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_in",
                self.diameter_in.to_string(),
                "Diameter must be positive",
            ));
        }
        if self.drill_depth_in < 0.0 {
            return Err(CalcError::invalid_input(
                "drill_depth_in",
                self.drill_depth_in.to_string(),
                "Drill depth cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Solve for the bar-stock length in closed form.
///
/// The bored-out material reduces the net weight, so its weight is added
/// back into the numerator before dividing by the solid cylinder's weight
/// per inch:
///
/// ```text
/// length = (target + holes * bore_weight(depth) - stud_weight)
///          / (pi * (diameter / 2)^2 * density)
/// ```
///
/// A target lighter than the stud yields a non-positive length; that is
/// returned as-is and can be checked with [`WeightResult::is_physical`].
///
/// # Arguments
///
/// * `input` - Blind-hole parameters
///
/// # Returns
///
/// * `Ok(WeightResult)` - Solved dimensions
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &BlindHoleInput) -> CalcResult<WeightResult> {
    input.validate()?;

    let density = input.material.density_oz_per_in3();
    let bore_weight = drill_hole_weight_oz(input.drill_depth_in, density);

    let numerator =
        input.target_weight_oz + input.placement.hole_count() * bore_weight - input.stud.weight_oz();
    let radius = input.diameter_in / 2.0;
    let length_in = numerator / (PI * radius * radius * density);

    Ok(WeightResult {
        length_in,
        drill_depth_in: input.drill_depth_in,
        stud_length_in: input.stud.length_in(),
        target_weight_oz: input.target_weight_oz,
        diameter_in: input.diameter_in,
        material: input.material,
    })
}
