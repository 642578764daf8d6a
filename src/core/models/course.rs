//! Course model

use crate::core::scale::Letter;
use serde::{Deserialize, Serialize};

/// Default credit hours for a newly added course
pub const DEFAULT_CREDITS: u8 = 3;

/// One course row in a semester
///
/// `grade` and `grade_points` are derived from `marks` (or vice versa when
/// the user picks a letter directly); the engine keeps them reconciled on
/// every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier, unique within the owning semester
    pub id: u32,

    /// Course name (free text, may be empty)
    pub name: String,

    /// Percentage marks in [0, 100]; `None` when not entered
    pub marks: Option<f64>,

    /// Credit hours in [1, 6]; 0 is the transient cleared state that a
    /// commit restores to the default
    pub credits: u8,

    /// Letter grade derived from marks; `None` until the first edit
    pub grade: Option<Letter>,

    /// Grade points derived from marks, in [0.00, 4.00]
    pub grade_points: f64,
}

impl Course {
    /// Create a new course with default values
    ///
    /// # Arguments
    /// * `id` - Identifier unique within the owning semester
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            marks: None,
            credits: DEFAULT_CREDITS,
            grade: None,
            grade_points: 0.0,
        }
    }

    /// Whether marks have been entered and are non-zero
    #[must_use]
    pub fn has_marks(&self) -> bool {
        self.marks.is_some_and(|marks| marks != 0.0)
    }

    /// Whether this course contributes to the semester GPA
    /// (marks entered and non-zero, credits positive)
    #[must_use]
    pub fn counts_toward_gpa(&self) -> bool {
        self.has_marks() && self.credits > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_defaults() {
        let course = Course::new(1);

        assert_eq!(course.id, 1);
        assert!(course.name.is_empty());
        assert!(course.marks.is_none());
        assert_eq!(course.credits, DEFAULT_CREDITS);
        assert!(course.grade.is_none());
        assert!(course.grade_points.abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_toward_gpa_requires_marks_and_credits() {
        let mut course = Course::new(1);
        assert!(!course.counts_toward_gpa());

        course.marks = Some(72.0);
        assert!(course.counts_toward_gpa());

        course.credits = 0;
        assert!(!course.counts_toward_gpa());
    }

    #[test]
    fn test_zero_marks_do_not_count() {
        let mut course = Course::new(1);
        course.marks = Some(0.0);

        assert!(!course.has_marks());
        assert!(!course.counts_toward_gpa());
    }
}
