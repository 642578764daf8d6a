//! Cgpa command handler
//!
//! Builds CGPA-mode semester summaries from specs given on the command line
//! and prints the cumulative GPA.

use logger::{info, warn};
use pu_gpa::core::engine::{CalculationMode, GpaEngine, SummaryUpdate};
use pu_gpa::core::input::{self, FieldInput};

/// Run the cgpa command.
///
/// Specs that fail the input-shaping rules are skipped with a warning.
///
/// # Arguments
/// * `semester_specs` - Semesters as `GPA:CREDITS`
/// * `verbose` - Whether to show detail beyond the headline figure
pub fn run(semester_specs: &[String], verbose: bool) {
    if semester_specs.is_empty() {
        eprintln!("✗ No semesters provided. Use -s GPA:CREDITS.");
        return;
    }

    let mut engine = GpaEngine::new();
    let mut entered = 0usize;

    for spec in semester_specs {
        match apply_summary_spec(&mut engine, entered, spec) {
            Ok(()) => entered += 1,
            Err(err) => warn!("Skipping semester '{spec}': {err}"),
        }
    }

    if entered == 0 {
        eprintln!("✗ No valid semester entries.");
        return;
    }

    info!("Entered {entered} semester(s)");

    println!("\n=== Semesters ===");
    println!("{:<12} {:>6} {:>8}", "Semester", "GPA", "Credits");
    for summary in engine.cgpa_semesters() {
        let gpa = summary
            .gpa
            .map_or_else(|| "-".to_string(), |gpa| format!("{gpa:.2}"));
        let credits = summary
            .credits
            .map_or_else(|| "-".to_string(), |credits| credits.to_string());
        println!("{:<12} {gpa:>6} {credits:>8}", summary.name);
    }

    let cgpa = engine.select_current_value(CalculationMode::Cgpa);
    println!("\nCumulative GPA: {cgpa:.2} (scale 0.0 - 4.0)");

    if verbose {
        let counted = engine
            .cgpa_semesters()
            .iter()
            .filter(|summary| summary.counts_toward_cgpa())
            .count();
        println!(
            "Counted {counted} of {} semester(s)",
            engine.cgpa_semesters().len()
        );
    }
}

/// Apply one `GPA:CREDITS` spec through the engine operations
fn apply_summary_spec(engine: &mut GpaEngine, entered: usize, spec: &str) -> Result<(), String> {
    let (gpa_text, credits_text) = spec
        .split_once(':')
        .ok_or_else(|| "expected GPA:CREDITS".to_string())?;

    let gpa = match input::shape_summary_gpa(gpa_text) {
        FieldInput::Value(value) => Some(value),
        FieldInput::Cleared => None,
        FieldInput::Rejected => {
            return Err(format!(
                "gpa '{gpa_text}' must be a number between 0.00 and 4.00"
            ))
        }
    };
    let credits = match input::shape_summary_credits(credits_text) {
        FieldInput::Value(value) => Some(value),
        FieldInput::Cleared => None,
        FieldInput::Rejected => {
            return Err(format!(
                "credits '{credits_text}' must be a whole number between 1 and 50"
            ))
        }
    };
    // Unlike course credits, an empty credits field stays empty.
    let credits = input::commit_summary_credits(credits);

    let summary_id = if entered == 0 {
        1
    } else {
        engine.add_cgpa_semester()
    };
    engine.update_summary_field(summary_id, &SummaryUpdate::Gpa(gpa));
    engine.update_summary_field(summary_id, &SummaryUpdate::Credits(credits));
    Ok(())
}
