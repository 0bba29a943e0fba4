//! # Materials and Studs
//!
//! Bar-stock materials and threaded studs for stabilizer weights.
//! Densities are for the specific alloys the weights are machined from,
//! in ounces per cubic inch.
//!
//! ## Materials
//!
//! - **Tungsten**: H17 tungsten alloy, 9.82662 oz/in³
//! - **Stainless**: 316 stainless steel, 4.64 oz/in³
//! - **Bronze**: 932 bearing bronze, 5.152 oz/in³
//!
//! ## Example
//!
//! ```rust
//! use stab_core::materials::{Material, StudSize};
//!
//! let material = Material::from_selector('t').unwrap();
//! assert_eq!(material, Material::Tungsten);
//! assert_eq!(material.display_name(), "Tungsten");
//!
//! let stud = StudSize::from_selector('m').unwrap();
//! assert_eq!(stud.weight_oz(), 0.19);
//! assert_eq!(stud.length_in(), 0.75);
//! ```
//!
//! Unrecognized selectors are rejected with a typed error before any
//! calculation runs; no sentinel density ever reaches the arithmetic.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Bar-stock material for the weight body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// H17 tungsten alloy
    Tungsten,
    /// 316 stainless steel
    Stainless,
    /// 932 bearing bronze
    Bronze,
}

impl Material {
    /// All materials for iteration
    pub const ALL: [Material; 3] = [Material::Tungsten, Material::Stainless, Material::Bronze];

    /// Parse from a single-character selector (`'t'`, `'s'`, `'b'`)
    pub fn from_selector(selector: char) -> CalcResult<Self> {
        match selector {
            't' => Ok(Material::Tungsten),
            's' => Ok(Material::Stainless),
            'b' => Ok(Material::Bronze),
            other => Err(CalcError::material_not_found(other.to_string())),
        }
    }

    /// The single-character selector for this material
    pub fn selector(&self) -> char {
        match self {
            Material::Tungsten => 't',
            Material::Stainless => 's',
            Material::Bronze => 'b',
        }
    }

    /// Density in ounces per cubic inch
    pub fn density_oz_per_in3(&self) -> f64 {
        match self {
            Material::Tungsten => 9.82662,
            Material::Stainless => 4.64,
            Material::Bronze => 5.152,
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Tungsten => "Tungsten",
            Material::Stainless => "Stainless",
            Material::Bronze => "Bronze",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Threaded stud screwed into the weight.
///
/// The stud is a separate steel component, so its weight is deducted from
/// the bar-stock weight rather than computed from the body material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StudSize {
    /// No stud
    #[default]
    None,
    /// 0.5" stud
    Short,
    /// 0.75" stud
    Medium,
    /// 1.0" stud
    Long,
    /// 1.5" stud
    ExtraLong,
}

impl StudSize {
    /// All stud sizes for iteration
    pub const ALL: [StudSize; 5] = [
        StudSize::None,
        StudSize::Short,
        StudSize::Medium,
        StudSize::Long,
        StudSize::ExtraLong,
    ];

    /// Parse from a single-character selector (`'n'`, `'s'`, `'m'`, `'l'`, `'x'`)
    pub fn from_selector(selector: char) -> CalcResult<Self> {
        match selector {
            'x' => Ok(StudSize::ExtraLong),
            'l' => Ok(StudSize::Long),
            'm' => Ok(StudSize::Medium),
            's' => Ok(StudSize::Short),
            'n' => Ok(StudSize::None),
            other => Err(CalcError::stud_not_found(other.to_string())),
        }
    }

    /// The single-character selector for this stud size
    pub fn selector(&self) -> char {
        match self {
            StudSize::None => 'n',
            StudSize::Short => 's',
            StudSize::Medium => 'm',
            StudSize::Long => 'l',
            StudSize::ExtraLong => 'x',
        }
    }

    /// Stud weight in ounces
    pub fn weight_oz(&self) -> f64 {
        match self {
            StudSize::None => 0.0,
            StudSize::Short => 0.15,
            StudSize::Medium => 0.19,
            StudSize::Long => 0.30,
            StudSize::ExtraLong => 0.40,
        }
    }

    /// Stud length in inches
    pub fn length_in(&self) -> f64 {
        match self {
            StudSize::None => 0.0,
            StudSize::Short => 0.5,
            StudSize::Medium => 0.75,
            StudSize::Long => 1.0,
            StudSize::ExtraLong => 1.5,
        }
    }

    /// Get display name for this stud size
    pub fn display_name(&self) -> &'static str {
        match self {
            StudSize::None => "None",
            StudSize::Short => "Short (0.5\")",
            StudSize::Medium => "Medium (0.75\")",
            StudSize::Long => "Long (1.0\")",
            StudSize::ExtraLong => "Extra Long (1.5\")",
        }
    }
}

impl std::fmt::Display for StudSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_densities() {
        assert_eq!(Material::Tungsten.density_oz_per_in3(), 9.82662);
        assert_eq!(Material::Stainless.density_oz_per_in3(), 4.64);
        assert_eq!(Material::Bronze.density_oz_per_in3(), 5.152);
    }

    #[test]
    fn test_material_selectors() {
        assert_eq!(Material::from_selector('t').unwrap(), Material::Tungsten);
        assert_eq!(Material::from_selector('s').unwrap(), Material::Stainless);
        assert_eq!(Material::from_selector('b').unwrap(), Material::Bronze);

        for material in Material::ALL {
            assert_eq!(
                Material::from_selector(material.selector()).unwrap(),
                material
            );
        }
    }

    #[test]
    fn test_unknown_material_rejected() {
        let error = Material::from_selector('x').unwrap_err();
        assert_eq!(error.error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(
            error,
            CalcError::MaterialNotFound {
                selector: "x".to_string()
            }
        );
    }

    #[test]
    fn test_stud_weights_and_lengths() {
        assert_eq!(StudSize::None.weight_oz(), 0.0);
        assert_eq!(StudSize::None.length_in(), 0.0);
        assert_eq!(StudSize::Short.weight_oz(), 0.15);
        assert_eq!(StudSize::Short.length_in(), 0.5);
        assert_eq!(StudSize::Medium.weight_oz(), 0.19);
        assert_eq!(StudSize::Medium.length_in(), 0.75);
        assert_eq!(StudSize::Long.weight_oz(), 0.30);
        assert_eq!(StudSize::Long.length_in(), 1.0);
        assert_eq!(StudSize::ExtraLong.weight_oz(), 0.40);
        assert_eq!(StudSize::ExtraLong.length_in(), 1.5);
    }

    #[test]
    fn test_stud_selectors() {
        for stud in StudSize::ALL {
            assert_eq!(StudSize::from_selector(stud.selector()).unwrap(), stud);
        }
        assert!(StudSize::from_selector('q').is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Material::Tungsten.to_string(), "Tungsten");
        assert_eq!(StudSize::None.display_name(), "None");
        assert_eq!(StudSize::ExtraLong.display_name(), "Extra Long (1.5\")");
    }

    #[test]
    fn test_serialization() {
        let material = Material::Bronze;
        let json = serde_json::to_string(&material).unwrap();
        assert_eq!(json, "\"Bronze\"");
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(material, roundtrip);

        let stud = StudSize::Medium;
        let json = serde_json::to_string(&stud).unwrap();
        let roundtrip: StudSize = serde_json::from_str(&json).unwrap();
        assert_eq!(stud, roundtrip);
    }

    #[test]
    fn test_default_stud() {
        assert_eq!(StudSize::default(), StudSize::None);
    }
}
