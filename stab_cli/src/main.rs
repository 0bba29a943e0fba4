//! # Stabcalc CLI Application
//!
//! Terminal front end for the stabilizer weight calculator. Prompts for the
//! target weight, bar stock, material, and machining configuration, then
//! prints the six-line shop report plus a JSON dump of the solved result.

use std::io::{self, BufRead, Write};

use stab_core::calculations::blind_hole::{self, BlindHoleInput, DrillPlacement};
use stab_core::calculations::through_hole::{self, ThroughHoleInput};
use stab_core::errors::CalcResult;
use stab_core::materials::{Material, StudSize};
use stab_core::report;
use stab_core::WeightResult;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_char(prompt: &str, default: char) -> char {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().chars().next().unwrap_or(default)
}

fn run() -> CalcResult<WeightResult> {
    let target_weight_oz = prompt_f64("Target weight (oz) [8.0]: ", 8.0);
    let diameter_in = prompt_f64("Bar diameter (in) [0.75]: ", 0.75);

    let material = Material::from_selector(prompt_char(
        "Material - (t)ungsten, (s)tainless, (b)ronze [t]: ",
        't',
    ))?;
    let stud = StudSize::from_selector(prompt_char(
        "Stud - e(x)tra long, (l)ong, (m)edium, (s)hort, (n)one [n]: ",
        'n',
    ))?;

    let mode = prompt_char(
        "Configuration - (e)nd drilled, (m)id drilled, (t)hrough hole [e]: ",
        'e',
    );

    println!();

    match mode {
        't' => {
            let initial_length_in = prompt_f64("Initial length guess (in) [1.0]: ", 1.0);
            let tolerance_oz = prompt_f64("Weight tolerance (oz) [0.01]: ", 0.01);
            through_hole::calculate(&ThroughHoleInput {
                label: "CLI".to_string(),
                target_weight_oz,
                diameter_in,
                material,
                stud,
                initial_length_in,
                tolerance_oz,
            })
        }
        mode => {
            let drill_depth_in = prompt_f64("Drill depth (in) [0.5]: ", 0.5);
            let placement = if mode == 'm' {
                DrillPlacement::Mid
            } else {
                DrillPlacement::End
            };
            blind_hole::calculate(&BlindHoleInput {
                label: "CLI".to_string(),
                target_weight_oz,
                diameter_in,
                material,
                drill_depth_in,
                stud,
                placement,
            })
        }
    }
}

fn main() {
    println!("Stabcalc CLI - Stabilizer Weight Calculator");
    println!("===========================================");
    println!();

    match run() {
        Ok(result) => {
            println!();
            print!("{}", report::render(&result));

            if !result.is_physical() {
                println!();
                println!("Warning: solved length is not positive - the stud outweighs the target.");
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
