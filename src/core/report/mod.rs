//! Report generation module for GPA results
//!
//! Renders a semester's courses, the derived GPA, and the reference grading
//! table to shareable documents (Markdown, HTML).

pub mod formats;

use crate::core::models::Semester;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything needed to render a GPA report, providing a single
/// source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Semester being reported
    pub semester: &'a Semester,
    /// Derived semester GPA, already rounded
    pub gpa: f64,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(semester: &'a Semester, gpa: f64) -> Self {
        Self { semester, gpa }
    }

    /// Get course count
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.semester.courses.len()
    }

    /// Total credit hours counted toward the GPA
    #[must_use]
    pub fn counted_credits(&self) -> u32 {
        self.semester
            .courses
            .iter()
            .filter(|course| course.counts_toward_gpa())
            .map(|course| u32::from(course.credits))
            .sum()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
