//! # Weight Calculations
//!
//! This module contains the length solvers. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `calculate(input) -> Result<WeightResult, CalcError>` - Pure calculation function
//!
//! All three machining configurations solve for the same thing - the length
//! of bar stock that hits the target weight - so they share one
//! [`WeightResult`] output shape, which the report renders.
//!
//! ## Available Calculations
//!
//! - [`blind_hole`] - Closed-form solve for end- or mid-drilled blind holes
//! - [`through_hole`] - Iterative solve for a full-length through bore

pub mod blind_hole;
pub mod through_hole;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::Material;

// Re-export commonly used types
pub use blind_hole::{BlindHoleInput, DrillPlacement};
pub use through_hole::ThroughHoleInput;

/// Solved dimensions for a stabilizer weight.
///
/// Produced by every solver; immutable once constructed. For a through-hole
/// solve the drill depth equals the length, which the report renders as
/// "thru" rather than a number.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_in": 1.837,
///   "drill_depth_in": 0.5,
///   "stud_length_in": 0.75,
///   "target_weight_oz": 8.0,
///   "diameter_in": 0.75,
///   "material": "Tungsten"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightResult {
    /// Solved bar-stock length (inches)
    pub length_in: f64,

    /// Drill depth used (inches); equals `length_in` for a through-hole
    pub drill_depth_in: f64,

    /// Length of the stud to install (inches); 0.0 for no stud
    pub stud_length_in: f64,

    /// Target weight the solve was run for (ounces)
    pub target_weight_oz: f64,

    /// Weight diameter (inches)
    pub diameter_in: f64,

    /// Body material
    pub material: Material,
}

impl WeightResult {
    /// True when the bore runs the full length of the weight
    pub fn is_through(&self) -> bool {
        self.drill_depth_in == self.length_in
    }

    /// True when a stud is part of the assembly
    pub fn has_stud(&self) -> bool {
        self.stud_length_in > 0.0
    }

    /// True when the solved length is physically meaningful.
    ///
    /// The closed forms can return a non-positive length when the stud
    /// outweighs the target; that is reported as-is rather than rejected.
    pub fn is_physical(&self) -> bool {
        self.length_in > 0.0
    }
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// End- or mid-drilled blind-hole calculation
    BlindHole(BlindHoleInput),
    /// Through-hole calculation
    ThroughHole(ThroughHoleInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::BlindHole(b) => &b.label,
            CalculationItem::ThroughHole(t) => &t.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::BlindHole(_) => "Blind Hole",
            CalculationItem::ThroughHole(_) => "Through Hole",
        }
    }

    /// Run the wrapped calculation
    pub fn solve(&self) -> CalcResult<WeightResult> {
        match self {
            CalculationItem::BlindHole(input) => blind_hole::calculate(input),
            CalculationItem::ThroughHole(input) => through_hole::calculate(input),
        }
    }
}
