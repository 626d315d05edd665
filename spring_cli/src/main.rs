//! # Coilfield CLI Application
//!
//! Terminal front-end for the spring calculation engine. Prompts for a
//! variable-pitch compression spring, runs the non-linear analysis and
//! prints the verdict with a few curve samples.

use std::io::{self, BufRead, Write};

use spring_core::calculations::variable_pitch::{calculate, VariablePitchInput};
use spring_core::materials::WireAlloy;
use spring_core::SpringItem;

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

fn main() {
    println!("Coilfield CLI - Spring Engineering Calculator");
    println!("=============================================");
    println!();

    let wire = prompt_f64("Wire diameter (mm) [2.0]: ", 2.0);
    let mean = prompt_f64("Mean coil diameter (mm) [16.0]: ", 16.0);
    let short_pitch = prompt_f64("Short-end coil pitch (mm) [4.0]: ", 4.0);
    let long_pitch = prompt_f64("Long-end coil pitch (mm) [6.0]: ", 6.0);

    // Symmetric progressive winding: short pitch at the ends, long in the middle
    let mid = (short_pitch + long_pitch) / 2.0;
    let input = VariablePitchInput {
        label: "CLI-Demo".to_string(),
        wire_diameter_mm: wire,
        mean_diameter_mm: mean,
        pitches_mm: vec![short_pitch, mid, long_pitch, long_pitch, mid, short_pitch],
        alloy: WireAlloy::MusicWire,
        steps: 50,
    };
    let item = SpringItem::VariablePitch(input.clone());

    println!();
    println!("Analyzing {} ({}, music wire)...", item.label(), item.family());
    println!();

    match calculate(&input) {
        Ok(result) => {
            println!("Initial rate:   {:.2} N/mm", result.initial_rate_n_per_mm);
            println!("Travel:         {:.2} mm", result.travel_mm);
            println!("Force at solid: {:.1} N", result.solid_force_n);
            println!("Peak stress:    {:.0} MPa", result.peak_stress_mpa);
            println!("Allowable:      {:.0} MPa", result.allowable_stress_mpa);
            println!("Safety factor:  {:.2}", result.safety_factor);
            println!("Stored energy:  {:.3} J", result.stored_energy_j);
            println!("Verdict:        {}", result.verdict);
            println!();
            println!("  x (mm)    F (N)    k (N/mm)  active coils");
            for point in result.curve.iter().step_by(10) {
                println!(
                    "  {:6.2}  {:7.1}  {:9.2}  {:6.1}",
                    point.x_mm, point.force_n, point.rate_n_per_mm, point.active_scalar
                );
            }
        }
        Err(e) => {
            eprintln!("Analysis failed [{}]: {}", e.error_code(), e);
            std::process::exit(1);
        }
    }
}
