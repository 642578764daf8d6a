//! Semester model

use super::Course;
use serde::{Deserialize, Serialize};

/// A semester holding an ordered, non-empty list of courses
///
/// The semester GPA is derived from the courses on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Identifier, unique across semesters
    pub id: u32,

    /// Display label (e.g., "Semester 1")
    pub name: String,

    /// Courses in entry order; never empty
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create a new semester named after its id, seeded with one default course
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Semester {id}"),
            courses: vec![Course::new(1)],
        }
    }

    /// Next course id: one past the highest id ever present
    ///
    /// Freed ids are not reused, so ids stay monotonically non-decreasing
    /// within a session even after removals.
    #[must_use]
    pub fn next_course_id(&self) -> u32 {
        self.courses
            .iter()
            .map(|course| course.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Find a course by id
    #[must_use]
    pub fn course(&self, course_id: u32) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }
}
