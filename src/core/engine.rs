//! GPA engine
//!
//! Owns the editable entity graph (semesters with courses, and CGPA-mode
//! semester summaries) and derives GPA/CGPA values from it. All operations
//! are synchronous and total: inputs are either applied or silently left
//! unapplied, and nothing here performs I/O.
//!
//! Mutations rebuild the affected collection into a fresh value rather than
//! editing in place, so a previously obtained snapshot never observes a
//! partially updated collection.

use crate::core::models::{Course, Semester, SemesterSummary};
use crate::core::scale::{self, Letter};

/// Which headline value the front end is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMode {
    /// Single-semester GPA over the first semester's courses
    Gpa,
    /// Cumulative GPA over all semester summaries
    Cgpa,
}

/// A single-field edit to a course
#[derive(Debug, Clone, PartialEq)]
pub enum CourseUpdate {
    /// Set the course name verbatim
    Name(String),
    /// Set marks and re-derive grade and grade points from the scale
    Marks(Option<f64>),
    /// Set credit hours verbatim (0 is the transient cleared state)
    Credits(u8),
    /// Set the letter grade; grade points follow the scale entry and marks
    /// are overwritten with the letter's representative value
    Grade(Letter),
}

/// A single-field edit to a CGPA-mode semester summary
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryUpdate {
    /// Set the display label verbatim
    Name(String),
    /// Set the semester GPA
    Gpa(Option<f64>),
    /// Set the semester credit hours
    Credits(Option<u32>),
}

/// The calculator state for one interactive session
///
/// Holds at least one semester and one summary at all times; the removal
/// operations are no-ops when exactly one remains.
#[derive(Debug, Clone, PartialEq)]
pub struct GpaEngine {
    semesters: Vec<Semester>,
    cgpa_semesters: Vec<SemesterSummary>,
}

impl Default for GpaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GpaEngine {
    /// Create an engine with one default semester and one default summary
    #[must_use]
    pub fn new() -> Self {
        Self {
            semesters: vec![Semester::new(1)],
            cgpa_semesters: vec![SemesterSummary::new(1)],
        }
    }

    /// Current semester snapshot (GPA mode)
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Current summary snapshot (CGPA mode)
    #[must_use]
    pub fn cgpa_semesters(&self) -> &[SemesterSummary] {
        &self.cgpa_semesters
    }

    /// Apply a single-field edit to a course.
    ///
    /// Marks edits re-derive `grade_points` from the scale and resolve the
    /// letter by points equality; grade edits overwrite marks with the
    /// letter's representative value (deliberately lossy). Name and credits
    /// are set verbatim.
    ///
    /// # Returns
    /// `true` if the target course existed and the edit was applied
    pub fn update_course_field(
        &mut self,
        semester_id: u32,
        course_id: u32,
        update: &CourseUpdate,
    ) -> bool {
        let mut applied = false;

        let next: Vec<Semester> = self
            .semesters
            .iter()
            .map(|semester| {
                if semester.id != semester_id {
                    return semester.clone();
                }
                let mut updated = semester.clone();
                updated.courses = semester
                    .courses
                    .iter()
                    .map(|course| {
                        if course.id != course_id {
                            return course.clone();
                        }
                        applied = true;
                        apply_course_update(course, update)
                    })
                    .collect();
                updated
            })
            .collect();

        self.semesters = next;
        applied
    }

    /// Add a course to a semester with id = (max existing id) + 1
    ///
    /// # Returns
    /// The new course id, or `None` if the semester does not exist
    pub fn add_course(&mut self, semester_id: u32) -> Option<u32> {
        let mut new_id = None;

        let next: Vec<Semester> = self
            .semesters
            .iter()
            .map(|semester| {
                if semester.id != semester_id {
                    return semester.clone();
                }
                let id = semester.next_course_id();
                let mut updated = semester.clone();
                updated.courses.push(Course::new(id));
                new_id = Some(id);
                updated
            })
            .collect();

        self.semesters = next;
        new_id
    }

    /// Remove a course from a semester.
    ///
    /// No-op when the semester holds exactly one course, keeping the
    /// non-empty invariant.
    ///
    /// # Returns
    /// `true` if a course was removed
    pub fn remove_course(&mut self, semester_id: u32, course_id: u32) -> bool {
        let mut removed = false;

        let next: Vec<Semester> = self
            .semesters
            .iter()
            .map(|semester| {
                if semester.id != semester_id || semester.courses.len() <= 1 {
                    return semester.clone();
                }
                let mut updated = semester.clone();
                updated.courses = semester
                    .courses
                    .iter()
                    .filter(|course| course.id != course_id)
                    .cloned()
                    .collect();
                removed = updated.courses.len() < semester.courses.len();
                updated
            })
            .collect();

        self.semesters = next;
        removed
    }

    /// Add a semester with id = (max existing id) + 1
    ///
    /// # Returns
    /// The new semester id
    pub fn add_semester(&mut self) -> u32 {
        let id = next_id(self.semesters.iter().map(|semester| semester.id));
        let mut next = self.semesters.clone();
        next.push(Semester::new(id));
        self.semesters = next;
        id
    }

    /// Remove a semester; no-op when exactly one remains
    ///
    /// # Returns
    /// `true` if the semester was removed
    pub fn remove_semester(&mut self, semester_id: u32) -> bool {
        if self.semesters.len() <= 1 {
            return false;
        }
        let next: Vec<Semester> = self
            .semesters
            .iter()
            .filter(|semester| semester.id != semester_id)
            .cloned()
            .collect();
        let removed = next.len() < self.semesters.len();
        self.semesters = next;
        removed
    }

    /// Apply a single-field edit to a CGPA-mode summary
    ///
    /// # Returns
    /// `true` if the target summary existed and the edit was applied
    pub fn update_summary_field(&mut self, summary_id: u32, update: &SummaryUpdate) -> bool {
        let mut applied = false;

        let next: Vec<SemesterSummary> = self
            .cgpa_semesters
            .iter()
            .map(|summary| {
                if summary.id != summary_id {
                    return summary.clone();
                }
                applied = true;
                let mut updated = summary.clone();
                match update {
                    SummaryUpdate::Name(name) => updated.name.clone_from(name),
                    SummaryUpdate::Gpa(gpa) => updated.gpa = *gpa,
                    SummaryUpdate::Credits(credits) => updated.credits = *credits,
                }
                updated
            })
            .collect();

        self.cgpa_semesters = next;
        applied
    }

    /// Add a CGPA-mode summary with id = (max existing id) + 1
    ///
    /// # Returns
    /// The new summary id
    pub fn add_cgpa_semester(&mut self) -> u32 {
        let id = next_id(self.cgpa_semesters.iter().map(|summary| summary.id));
        let mut next = self.cgpa_semesters.clone();
        next.push(SemesterSummary::new(id));
        self.cgpa_semesters = next;
        id
    }

    /// Remove a CGPA-mode summary; no-op when exactly one remains
    ///
    /// # Returns
    /// `true` if the summary was removed
    pub fn remove_cgpa_semester(&mut self, summary_id: u32) -> bool {
        if self.cgpa_semesters.len() <= 1 {
            return false;
        }
        let next: Vec<SemesterSummary> = self
            .cgpa_semesters
            .iter()
            .filter(|summary| summary.id != summary_id)
            .cloned()
            .collect();
        let removed = next.len() < self.cgpa_semesters.len();
        self.cgpa_semesters = next;
        removed
    }

    /// GPA of one semester's courses, by semester id
    #[must_use]
    pub fn semester_gpa(&self, semester_id: u32) -> Option<f64> {
        self.semesters
            .iter()
            .find(|semester| semester.id == semester_id)
            .map(|semester| compute_semester_gpa(&semester.courses))
    }

    /// The headline value for the requested mode.
    ///
    /// GPA mode surfaces only the first semester's figure even when more
    /// semesters exist; each additional semester card shows its own GPA
    /// independently. CGPA mode aggregates all summaries.
    #[must_use]
    pub fn select_current_value(&self, mode: CalculationMode) -> f64 {
        match mode {
            CalculationMode::Gpa => self
                .semesters
                .first()
                .map_or(0.0, |semester| compute_semester_gpa(&semester.courses)),
            CalculationMode::Cgpa => compute_cumulative_gpa(&self.cgpa_semesters),
        }
    }
}

/// Next id for a non-empty id sequence: max + 1, never reusing freed ids
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}

/// Produce the updated course for one field edit, re-deriving the
/// grade/points/marks triple as required by the edited field
fn apply_course_update(course: &Course, update: &CourseUpdate) -> Course {
    let mut updated = course.clone();
    match update {
        CourseUpdate::Name(name) => updated.name.clone_from(name),
        CourseUpdate::Credits(credits) => updated.credits = *credits,
        CourseUpdate::Marks(marks) => {
            updated.marks = *marks;
            updated.grade_points = scale::lookup(marks.unwrap_or(0.0)).points;
            updated.grade = scale::band_for_points(updated.grade_points).map(|band| band.letter);
        }
        CourseUpdate::Grade(letter) => {
            updated.grade = Some(*letter);
            updated.grade_points = scale::band(*letter).points;
            updated.marks = Some(scale::reverse_lookup(*letter));
        }
    }
    updated
}

/// Weighted semester GPA: Σ(grade points × credits) / Σ(credits) over the
/// courses with entered, non-zero marks and positive credits.
///
/// Returns 0 when no course qualifies. Recomputed from the full course list
/// on every call; rounded to two decimals.
#[must_use]
pub fn compute_semester_gpa(courses: &[Course]) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for course in courses {
        if !course.counts_toward_gpa() {
            continue;
        }
        total_points += course.grade_points * f64::from(course.credits);
        total_credits += u32::from(course.credits);
    }

    if total_credits == 0 {
        return 0.0;
    }
    round2(total_points / f64::from(total_credits))
}

/// Weighted cumulative GPA: Σ(gpa × credits) / Σ(credits) over the
/// summaries with positive gpa and credits.
///
/// Same zero-credit fallback and rounding as [`compute_semester_gpa`].
#[must_use]
pub fn compute_cumulative_gpa(summaries: &[SemesterSummary]) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for summary in summaries {
        if !summary.counts_toward_cgpa() {
            continue;
        }
        let (Some(gpa), Some(credits)) = (summary.gpa, summary.credits) else {
            continue;
        };
        total_points += gpa * f64::from(credits);
        total_credits += credits;
    }

    if total_credits == 0 {
        return 0.0;
    }
    round2(total_points / f64::from(total_credits))
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
