//! HTML report generator
//!
//! Generates GPA reports as self-contained HTML with embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::scale;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{semester_name}}", &escape_html(&ctx.semester.name));
        output = output.replace("{{gpa}}", &format!("{:.2}", ctx.gpa));
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{counted_credits}}", &ctx.counted_credits().to_string());

        let course_rows = Self::generate_course_rows(ctx);
        output = output.replace("{{course_rows}}", &course_rows);

        let scale_rows = Self::generate_scale_rows();
        output = output.replace("{{scale_rows}}", &scale_rows);

        output
    }

    /// Generate `<tr>` rows for the per-course table
    fn generate_course_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for course in &ctx.semester.courses {
            let name = if course.name.is_empty() {
                "(unnamed)".to_string()
            } else {
                escape_html(&course.name)
            };
            let marks = course
                .marks
                .map_or_else(|| "-".to_string(), |marks| format!("{marks:.0}"));
            let grade = course.grade.map_or("-", scale::Letter::as_str);

            let _ = writeln!(
                rows,
                "    <tr><td>{name}</td><td>{marks}</td><td>{grade}</td><td>{}</td><td>{:.2}</td></tr>",
                course.credits, course.grade_points
            );
        }

        rows
    }

    /// Generate `<tr>` rows for the reference grading scale table
    fn generate_scale_rows() -> String {
        let mut rows = String::new();

        for (index, band) in scale::GRADE_SCALE.iter().enumerate() {
            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                scale::range_label(index),
                band.letter,
                band.points
            );
        }

        rows
    }
}

/// Minimal HTML escaping for user-entered text
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
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

    #[test]
    fn renders_self_contained_document() {
        let mut engine = GpaEngine::new();
        assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(77.0))));

        let ctx = ReportContext::new(&engine.semesters()[0], 3.30);
        let reporter = HtmlReporter::new();
        let output = reporter.render(&ctx).expect("render html");

        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<td>B+</td>"));
        assert!(output.contains(">3.30<"));
        assert!(!output.contains("{{"), "all placeholders substituted");
    }

    #[test]
    fn escapes_user_entered_names() {
        let mut engine = GpaEngine::new();
        assert!(engine.update_course_field(
            1,
            1,
            &CourseUpdate::Name("Data <Structures> & Algorithms".to_string())
        ));

        let ctx = ReportContext::new(&engine.semesters()[0], 0.0);
        let output = HtmlReporter::new().render(&ctx).expect("render html");

        assert!(output.contains("Data &lt;Structures&gt; &amp; Algorithms"));
    }
}
