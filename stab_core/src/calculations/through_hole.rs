//! # Through-Hole Calculation
//!
//! Solves for the bar-stock length of a weight bored end to end with the
//! 5/16" through drill. There is no closed form here because the bore grows
//! with the bar: the solver walks the length until the net weight lands
//! inside the tolerance band around the target.
//!
//! ## Search rule
//!
//! Starting from the caller's initial guess:
//!
//! - net weight below target: lengthen by 0.001"
//! - net weight above the band: halve the length
//!
//! The asymmetric step/halve rule is kept as-is from the shop-proven
//! procedure, bounded by an iteration cap that fails the solve as
//! [`NonConvergence`](crate::errors::CalcError::NonConvergence) instead of
//! spinning forever on inputs the rule cannot satisfy (e.g. a bar diameter
//! that does not exceed the bore).
//!
//! ## Example
//!
//! ```rust
//! use stab_core::calculations::through_hole::{calculate, ThroughHoleInput};
//! use stab_core::materials::{Material, StudSize};
//!
//! let input = ThroughHoleInput {
//!     label: "W-2".to_string(),
//!     target_weight_oz: 10.0,
//!     diameter_in: 0.5,
//!     material: Material::Stainless,
//!     stud: StudSize::None,
//!     initial_length_in: 1.0,
//!     tolerance_oz: 0.01,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.is_through());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{cylinder_weight_oz, through_hole_weight_oz};
use crate::materials::{Material, StudSize};

use super::WeightResult;

/// Length increment applied while the net weight is under the target
pub const LENGTH_STEP_IN: f64 = 0.001;

/// Iteration cap for the search. Legitimate solves take tens of thousands
/// of steps at most; degenerate inputs fail here instead of hanging.
pub const MAX_ITERATIONS: u32 = 5_000_000;

/// Input parameters for a through-hole weight.
///
/// The stud selection flows through to the report only; the through bore is
/// tapped for the stud directly, so no stud weight enters the length solve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-2",
///   "target_weight_oz": 10.0,
///   "diameter_in": 0.5,
///   "material": "Stainless",
///   "stud": "None",
///   "initial_length_in": 1.0,
///   "tolerance_oz": 0.01
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughHoleInput {
    /// User label for this weight (e.g., "W-2", "Rear Bar 10oz")
    pub label: String,

    /// Desired finished weight in ounces
    pub target_weight_oz: f64,

    /// Bar-stock diameter in inches
    pub diameter_in: f64,

    /// Body material
    pub material: Material,

    /// Stud to install
    pub stud: StudSize,

    /// Starting length for the search, in inches
    pub initial_length_in: f64,

    /// Acceptable weight deviation from the target, in ounces
    pub tolerance_oz: f64,
}

impl ThroughHoleInput {
    /// Validate input parameters.
    ///
    /// The initial length and tolerance must be strictly positive: halving
    /// a zero length never moves it, and a zero-width band is narrower than
    /// the search step can resolve.
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
        if self.initial_length_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "initial_length_in",
                self.initial_length_in.to_string(),
                "Initial length guess must be positive",
            ));
        }
        if self.tolerance_oz <= 0.0 {
            return Err(CalcError::invalid_input(
                "tolerance_oz",
                self.tolerance_oz.to_string(),
                "Tolerance must be positive",
            ));
        }
        Ok(())
    }

    /// Net weight of a through-bored bar of the given length
    fn net_weight_oz(&self, length_in: f64) -> f64 {
        let density = self.material.density_oz_per_in3();
        cylinder_weight_oz(self.diameter_in, length_in, density)
            - through_hole_weight_oz(length_in, density)
    }
}

/// Solve for the bar-stock length by iterative search.
///
/// # Arguments
///
/// * `input` - Through-hole parameters
///
/// # Returns
///
/// * `Ok(WeightResult)` - Solved dimensions, with drill depth equal to length
/// * `Err(CalcError)` - If inputs are invalid or the search hits the
///   iteration cap
pub fn calculate(input: &ThroughHoleInput) -> CalcResult<WeightResult> {
    input.validate()?;

    let band_low = input.target_weight_oz - input.tolerance_oz;
    let band_high = input.target_weight_oz + input.tolerance_oz;

    let mut length_in = input.initial_length_in;
    let mut net = input.net_weight_oz(length_in);
    let mut iterations: u32 = 0;

    while net < band_low || net > band_high {
        if iterations >= MAX_ITERATIONS {
            return Err(CalcError::non_convergence(iterations, net));
        }
        if net < input.target_weight_oz {
            length_in += LENGTH_STEP_IN;
        } else {
            length_in /= 2.0;
        }
        net = input.net_weight_oz(length_in);
        iterations += 1;
    }

    Ok(WeightResult {
        length_in,
        // a through-hole has no separate blind depth
        drill_depth_in: length_in,
        stud_length_in: input.stud.length_in(),
        target_weight_oz: input.target_weight_oz,
        diameter_in: input.diameter_in,
        material: input.material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> ThroughHoleInput {
        ThroughHoleInput {
            label: "Test Weight".to_string(),
            target_weight_oz: 10.0,
            diameter_in: 0.5,
            material: Material::Stainless,
            stud: StudSize::None,
            initial_length_in: 1.0,
            tolerance_oz: 0.01,
        }
    }

    #[test]
    fn test_stainless_reference_case() {
        // 10 oz at 0.5" dia in 316 stainless, searching up from 1"
        let input = test_input();
        let result = calculate(&input).unwrap();

        let net = input.net_weight_oz(result.length_in);
        assert!(net >= 9.99 && net <= 10.01);

        // net weight per inch is ~0.555 oz, so the bar lands near 18"
        assert!((result.length_in - 18.0).abs() < 0.1);
    }

    #[test]
    fn test_depth_equals_length() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.drill_depth_in, result.length_in);
        assert!(result.is_through());
    }

    #[test]
    fn test_overshoot_guess_converges() {
        // Guess far above the answer; the halving branch must bring it back
        let mut input = test_input();
        input.initial_length_in = 100.0;
        let result = calculate(&input).unwrap();

        let net = input.net_weight_oz(result.length_in);
        assert!((net - input.target_weight_oz).abs() <= input.tolerance_oz);
    }

    #[test]
    fn test_tungsten_converges() {
        let input = ThroughHoleInput {
            label: "Tungsten".to_string(),
            target_weight_oz: 6.0,
            diameter_in: 0.75,
            material: Material::Tungsten,
            stud: StudSize::Short,
            initial_length_in: 0.5,
            tolerance_oz: 0.05,
        };
        let result = calculate(&input).unwrap();
        let net = input.net_weight_oz(result.length_in);
        assert!((net - 6.0).abs() <= 0.05);
        assert_eq!(result.stud_length_in, 0.5);
    }

    #[test]
    fn test_bore_wider_than_bar_does_not_converge() {
        // A 0.25" bar loses more to the 5/16" bore than it weighs, so the
        // net weight can never reach the target
        let mut input = test_input();
        input.diameter_in = 0.25;
        let error = calculate(&input).unwrap_err();
        assert_eq!(error.error_code(), "NON_CONVERGENCE");
    }

    #[test]
    fn test_zero_initial_length_rejected() {
        let mut input = test_input();
        input.initial_length_in = 0.0;
        let error = calculate(&input).unwrap_err();
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_tolerance_rejected() {
        let mut input = test_input();
        input.tolerance_oz = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.tolerance_oz = -0.01;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ThroughHoleInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.tolerance_oz, roundtrip.tolerance_oz);
        assert_eq!(input.initial_length_in, roundtrip.initial_length_in);
    }
}
