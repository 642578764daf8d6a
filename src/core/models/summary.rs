//! CGPA-mode semester summary model

use serde::{Deserialize, Serialize};

/// A semester summary for cumulative-GPA calculation
///
/// CGPA mode does not reuse GPA-mode data; the user enters each semester's
/// GPA and total credit hours directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSummary {
    /// Identifier, unique across summaries
    pub id: u32,

    /// Display label (e.g., "Semester 1")
    pub name: String,

    /// Semester GPA in [0.00, 4.00]; `None` when not entered
    pub gpa: Option<f64>,

    /// Total credit hours in [1, 50]; `None` when not entered
    pub credits: Option<u32>,
}

impl SemesterSummary {
    /// Create a new summary named after its id, with both fields unset
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Semester {id}"),
            gpa: None,
            credits: None,
        }
    }

    /// Whether this summary contributes to the cumulative GPA
    /// (gpa and credits both entered and positive)
    #[must_use]
    pub fn counts_toward_cgpa(&self) -> bool {
        self.gpa.is_some_and(|gpa| gpa > 0.0) && self.credits.is_some_and(|credits| credits > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_unset() {
        let summary = SemesterSummary::new(3);

        assert_eq!(summary.id, 3);
        assert_eq!(summary.name, "Semester 3");
        assert!(summary.gpa.is_none());
        assert!(summary.credits.is_none());
    }

    #[test]
    fn test_counts_toward_cgpa_requires_both_fields() {
        let mut summary = SemesterSummary::new(1);
        assert!(!summary.counts_toward_cgpa());

        summary.gpa = Some(3.5);
        assert!(!summary.counts_toward_cgpa());

        summary.credits = Some(15);
        assert!(summary.counts_toward_cgpa());
    }

    #[test]
    fn test_zero_gpa_does_not_count() {
        let mut summary = SemesterSummary::new(1);
        summary.gpa = Some(0.0);
        summary.credits = Some(12);

        assert!(!summary.counts_toward_cgpa());
    }
}
