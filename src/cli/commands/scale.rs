//! Scale command handler
//!
//! Renders the fixed reference grading table.

use pu_gpa::core::scale::{range_label, GRADE_SCALE};

/// Print the reference grading scale
pub fn run() {
    println!("\n=== Punjab University Grading Scale ===\n");
    println!("{:<12} {:<6} {:>6}", "Marks", "Grade", "Points");

    for (index, band) in GRADE_SCALE.iter().enumerate() {
        println!(
            "{:<12} {:<6} {:>6.2}",
            range_label(index),
            band.letter.as_str(),
            band.points
        );
    }
}
