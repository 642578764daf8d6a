//! Markdown report generator
//!
//! Generates GPA reports in Markdown format. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::scale;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{semester_name}}", &ctx.semester.name);
        output = output.replace("{{gpa}}", &format!("{:.2}", ctx.gpa));
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{counted_credits}}", &ctx.counted_credits().to_string());

        let course_table = Self::generate_course_table(ctx);
        output = output.replace("{{course_table}}", &course_table);

        let scale_table = Self::generate_scale_table();
        output = output.replace("{{grade_scale}}", &scale_table);

        output
    }

    /// Generate the per-course table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Course | Marks | Grade | Credits | Grade Points |\n");
        table.push_str("|---|---|---|---|---|\n");

        for course in &ctx.semester.courses {
            let name = if course.name.is_empty() {
                "(unnamed)"
            } else {
                &course.name
            };
            let marks = course
                .marks
                .map_or_else(|| "-".to_string(), |marks| format!("{marks:.0}"));
            let grade = course.grade.map_or("-", scale::Letter::as_str);

            let _ = writeln!(
                table,
                "| {name} | {marks} | {grade} | {} | {:.2} |",
                course.credits, course.grade_points
            );
        }

        table
    }

    /// Generate the reference grading scale table
    fn generate_scale_table() -> String {
        let mut table = String::new();

        table.push_str("| Marks | Grade | Points |\n");
        table.push_str("|---|---|---|\n");

        for (index, band) in scale::GRADE_SCALE.iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {:.2} |",
                scale::range_label(index),
                band.letter,
                band.points
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{CourseUpdate, GpaEngine};

    fn sample_context(engine: &GpaEngine) -> ReportContext {
        ReportContext::new(&engine.semesters()[0], 3.48)
    }

    #[test]
    fn renders_headline_and_tables() {
        let mut engine = GpaEngine::new();
        assert!(engine.update_course_field(1, 1, &CourseUpdate::Name("Calculus I".to_string())));
        assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(90.0))));

        let reporter = MarkdownReporter::new();
        let output = reporter
            .render(&sample_context(&engine))
            .expect("render markdown");

        assert!(output.contains("Semester GPA: 3.48 / 4.00"));
        assert!(output.contains("| Calculus I | 90 | A | 3 | 4.00 |"));
        assert!(output.contains("| 85 & Above | A | 4.00 |"));
        assert!(output.contains("| Below 50 | F | 0.00 |"));
        assert!(!output.contains("{{"), "all placeholders substituted");
    }

    #[test]
    fn unmarked_courses_render_placeholders() {
        let engine = GpaEngine::new();

        let reporter = MarkdownReporter::new();
        let output = reporter
            .render(&sample_context(&engine))
            .expect("render markdown");

        assert!(output.contains("| (unnamed) | - | - | 3 | 0.00 |"));
    }
}
