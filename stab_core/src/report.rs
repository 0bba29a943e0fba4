//! # Result Report
//!
//! Renders a [`WeightResult`] as the fixed six-line shop summary:
//!
//! ```text
//! Material    Tungsten
//! Weight      8.00 oz
//! Diameter    0.750"
//! Length      1.869"
//! Drill Depth 0.500"
//! Stud Length 0.750"
//! ```
//!
//! A through-hole renders its depth line as the literal `thru`, and a
//! weight without a stud renders its stud line as `none`. Field order,
//! labels, and units are a compatibility contract and must not change.
//!
//! Weights print with two decimals and dimensions with three, rounded
//! half-up on the decimal value. `{:.n}` formatting is not used here: it
//! rounds ties on the binary value, which turns 0.3125 into "0.312" where
//! the shop convention expects "0.313".

use crate::calculations::WeightResult;

/// Format a value with the given number of decimal places, rounding
/// half-up.
///
/// Rounding is applied to the shortest decimal representation of the
/// value, so ties behave the way they read: 1.0005 rounds to "1.001".
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let repr = format!("{}", value.abs());
    let (int_str, frac_str) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (repr.as_str(), ""),
    };

    let mut digits: Vec<char> = int_str.chars().collect();
    digits.extend(frac_str.chars().take(decimals));
    for _ in frac_str.len()..decimals {
        digits.push('0');
    }

    if frac_str.chars().nth(decimals).is_some_and(|d| d >= '5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, '1');
                break;
            }
            i -= 1;
            if digits[i] == '9' {
                digits[i] = '0';
            } else {
                digits[i] = ((digits[i] as u8) + 1) as char;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(&digits[..int_len]);
    if decimals > 0 {
        out.push('.');
        out.extend(&digits[int_len..]);
    }
    out
}

/// Format a weight in ounces (two decimals)
pub fn format_weight(weight_oz: f64) -> String {
    format_fixed(weight_oz, 2)
}

/// Format a dimension in inches (three decimals)
pub fn format_dimension(dimension_in: f64) -> String {
    format_fixed(dimension_in, 3)
}

/// Render the six-line report for a solved weight.
pub fn render(result: &WeightResult) -> String {
    let mut lines = Vec::with_capacity(6);
    lines.push(format!("Material \t{}", result.material.display_name()));
    lines.push(format!(
        "Weight \t\t{} oz",
        format_weight(result.target_weight_oz)
    ));
    lines.push(format!(
        "Diameter \t{}\"",
        format_dimension(result.diameter_in)
    ));
    lines.push(format!("Length \t\t{}\"", format_dimension(result.length_in)));
    if result.is_through() {
        lines.push("Drill Depth \tthru".to_string());
    } else {
        lines.push(format!(
            "Drill Depth \t{}\"",
            format_dimension(result.drill_depth_in)
        ));
    }
    if result.has_stud() {
        lines.push(format!(
            "Stud Length \t{}\"",
            format_dimension(result.stud_length_in)
        ));
    } else {
        lines.push("Stud Length \tnone".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    fn test_result() -> WeightResult {
        WeightResult {
            length_in: 1.8687,
            drill_depth_in: 0.5,
            stud_length_in: 0.75,
            target_weight_oz: 8.0,
            diameter_in: 0.75,
            material: Material::Tungsten,
        }
    }

    #[test]
    fn test_half_up_ties_round_away_from_zero() {
        // 0.3125 is exact in binary; ties-to-even would print 0.312
        assert_eq!(format_fixed(0.3125, 3), "0.313");
        assert_eq!(format_fixed(12.345, 2), "12.35");
        assert_eq!(format_fixed(1.0005, 3), "1.001");
    }

    #[test]
    fn test_plain_rounding() {
        assert_eq!(format_fixed(1.8687, 3), "1.869");
        assert_eq!(format_fixed(1.8683, 3), "1.868");
        assert_eq!(format_fixed(8.0, 2), "8.00");
        assert_eq!(format_fixed(5.0, 3), "5.000");
    }

    #[test]
    fn test_carry_through_integer_part() {
        assert_eq!(format_fixed(0.9999, 3), "1.000");
        assert_eq!(format_fixed(9.999, 2), "10.00");
    }

    #[test]
    fn test_blind_hole_report() {
        let report = render(&test_result());
        let expected = "Material \tTungsten\n\
                        Weight \t\t8.00 oz\n\
                        Diameter \t0.750\"\n\
                        Length \t\t1.869\"\n\
                        Drill Depth \t0.500\"\n\
                        Stud Length \t0.750\"\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_through_hole_renders_thru() {
        let mut result = test_result();
        result.drill_depth_in = result.length_in;
        let report = render(&result);
        assert!(report.contains("Drill Depth \tthru\n"));
        assert!(!report.contains("Drill Depth \t1."));
    }

    #[test]
    fn test_no_stud_renders_none() {
        let mut result = test_result();
        result.stud_length_in = 0.0;
        let report = render(&result);
        assert!(report.ends_with("Stud Length \tnone\n"));
    }

    #[test]
    fn test_report_is_six_lines() {
        let report = render(&test_result());
        assert_eq!(report.lines().count(), 6);
    }
}
