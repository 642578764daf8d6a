//! Gpa command handler
//!
//! Builds a semester through the engine operations from course specs given
//! on the command line, prints the per-course table and the semester GPA,
//! and optionally renders a report.

use logger::{error, info, warn};
use pu_gpa::config::Config;
use pu_gpa::core::engine::{CalculationMode, CourseUpdate, GpaEngine};
use pu_gpa::core::input::{self, FieldInput};
use pu_gpa::core::models::Semester;
use pu_gpa::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use pu_gpa::core::scale::Letter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the gpa command.
///
/// Specs that fail the input-shaping rules are skipped with a warning; the
/// model only ever sees accepted values.
///
/// # Arguments
/// * `course_specs` - Courses as `[NAME:]MARKS:CREDITS`
/// * `grade_specs` - Courses as `[NAME:]LETTER:CREDITS`
/// * `report` - Optional report format (markdown, html)
/// * `output` - Optional report output path
/// * `config` - Configuration containing the default reports directory
/// * `verbose` - Whether to show detail beyond the headline figure
pub fn run(
    course_specs: &[String],
    grade_specs: &[String],
    report: Option<&str>,
    output: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    if course_specs.is_empty() && grade_specs.is_empty() {
        eprintln!("✗ No courses provided. Use -c MARKS:CREDITS or -g LETTER:CREDITS.");
        return;
    }

    let mut engine = GpaEngine::new();
    let mut entered = 0usize;

    for spec in course_specs {
        match apply_marks_spec(&mut engine, entered, spec) {
            Ok(()) => entered += 1,
            Err(err) => warn!("Skipping course '{spec}': {err}"),
        }
    }
    for spec in grade_specs {
        match apply_grade_spec(&mut engine, entered, spec) {
            Ok(()) => entered += 1,
            Err(err) => warn!("Skipping course '{spec}': {err}"),
        }
    }

    if entered == 0 {
        eprintln!("✗ No valid course entries.");
        return;
    }

    info!("Entered {entered} course(s)");

    let semester = &engine.semesters()[0];
    print_course_table(semester);

    let gpa = engine.select_current_value(CalculationMode::Gpa);
    println!("\n{} GPA: {gpa:.2} (scale 0.0 - 4.0)", semester.name);

    if verbose {
        let counted: u32 = semester
            .courses
            .iter()
            .filter(|course| course.counts_toward_gpa())
            .map(|course| u32::from(course.credits))
            .sum();
        println!("Counted {counted} credit hour(s) toward the GPA");
    }

    if let Some(format_str) = report {
        match generate_report(&engine, gpa, format_str, output, config) {
            Ok(path) => {
                println!("✓ Report generated: {}", path.display());
                info!("Report written to {}", path.display());
            }
            Err(err) => {
                error!("Report generation failed: {err}");
                eprintln!("{err}");
            }
        }
    }
}

/// Split a `[NAME:]VALUE:CREDITS` spec from the right, so names may
/// contain colons
fn split_spec(spec: &str) -> Result<(Option<String>, &str, &str), String> {
    let parts: Vec<&str> = spec.rsplitn(3, ':').collect();
    match parts.as_slice() {
        [credits, value] => Ok((None, value, credits)),
        [credits, value, name] => Ok((Some((*name).to_string()), value, credits)),
        _ => Err("expected [NAME:]VALUE:CREDITS".to_string()),
    }
}

/// Shape a credits field; an empty field commits to the default
fn parse_credits(text: &str) -> Result<u8, String> {
    match input::shape_course_credits(text) {
        FieldInput::Value(credits) => Ok(credits),
        FieldInput::Cleared => Ok(input::commit_course_credits(0)),
        FieldInput::Rejected => Err(format!(
            "credits '{text}' must be a whole number between 1 and 6"
        )),
    }
}

/// The course to write this spec into: the seeded default course for the
/// first entry, a freshly added course afterwards
fn target_course(engine: &mut GpaEngine, entered: usize) -> Result<u32, String> {
    if entered == 0 {
        Ok(1)
    } else {
        engine
            .add_course(1)
            .ok_or_else(|| "no semester to add the course to".to_string())
    }
}

/// Apply one `[NAME:]MARKS:CREDITS` spec through the engine operations
fn apply_marks_spec(engine: &mut GpaEngine, entered: usize, spec: &str) -> Result<(), String> {
    let (name, marks_text, credits_text) = split_spec(spec)?;

    let marks = match input::shape_marks(marks_text) {
        FieldInput::Value(value) => Some(value),
        FieldInput::Cleared => None,
        FieldInput::Rejected => {
            return Err(format!(
                "marks '{marks_text}' must be a whole number between 0 and 100"
            ))
        }
    };
    let credits = parse_credits(credits_text)?;

    let course_id = target_course(engine, entered)?;
    if let Some(name) = name {
        engine.update_course_field(1, course_id, &CourseUpdate::Name(name));
    }
    engine.update_course_field(1, course_id, &CourseUpdate::Marks(marks));
    engine.update_course_field(1, course_id, &CourseUpdate::Credits(credits));
    Ok(())
}

/// Apply one `[NAME:]LETTER:CREDITS` spec through the engine operations
fn apply_grade_spec(engine: &mut GpaEngine, entered: usize, spec: &str) -> Result<(), String> {
    let (name, letter_text, credits_text) = split_spec(spec)?;

    let letter = Letter::from_str(letter_text)?;
    let credits = parse_credits(credits_text)?;

    let course_id = target_course(engine, entered)?;
    if let Some(name) = name {
        engine.update_course_field(1, course_id, &CourseUpdate::Name(name));
    }
    engine.update_course_field(1, course_id, &CourseUpdate::Grade(letter));
    engine.update_course_field(1, course_id, &CourseUpdate::Credits(credits));
    Ok(())
}

/// Print the per-course table for a semester
fn print_course_table(semester: &Semester) {
    println!("\n=== {} ===", semester.name);
    println!(
        "{:<24} {:>5} {:>5} {:>7} {:>6}",
        "Course", "Marks", "Grade", "Credits", "Points"
    );

    for course in &semester.courses {
        let name = if course.name.is_empty() {
            "(unnamed)"
        } else {
            &course.name
        };
        let marks = course
            .marks
            .map_or_else(|| "-".to_string(), |marks| format!("{marks:.0}"));
        let grade = course.grade.map_or("-", Letter::as_str);

        println!(
            "{name:<24} {marks:>5} {grade:>5} {:>7} {:>6.2}",
            course.credits, course.grade_points
        );
    }
}

/// Render the report and return the path it was written to
fn generate_report(
    engine: &GpaEngine,
    gpa: f64,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let output_path: PathBuf = if let Some(path) = output {
        path.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        reports_dir.join(format!("semester_gpa.{}", format.extension()))
    };

    let semester = engine
        .semesters()
        .first()
        .ok_or_else(|| "✗ No semester to report".to_string())?;
    let ctx = ReportContext::new(semester, gpa);

    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    reporter
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write report to {}: {e}", output_path.display()))?;

    Ok(output_path)
}
