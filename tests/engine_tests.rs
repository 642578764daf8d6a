//! Integration tests for the GPA engine
//!
//! Exercises the engine the way a front end would: structural mutations,
//! per-field edits, and the derived headline values.

use pu_gpa::engine::{
    compute_cumulative_gpa, compute_semester_gpa, CalculationMode, CourseUpdate, GpaEngine,
    SummaryUpdate,
};
use pu_gpa::models::SemesterSummary;
use pu_gpa::scale::Letter;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Build a semester of (marks, credits) pairs through the engine operations
fn engine_with_courses(entries: &[(f64, u8)]) -> GpaEngine {
    let mut engine = GpaEngine::new();
    for (index, (marks, credits)) in entries.iter().enumerate() {
        let course_id = if index == 0 {
            1
        } else {
            engine.add_course(1).expect("add course")
        };
        assert!(engine.update_course_field(1, course_id, &CourseUpdate::Marks(Some(*marks))));
        assert!(engine.update_course_field(1, course_id, &CourseUpdate::Credits(*credits)));
    }
    engine
}

#[test]
fn weighted_average_example_from_two_courses() {
    // 90 marks -> 4.00 points, 65 marks -> 2.70 points
    // (4.00*3 + 2.70*2) / 5 = 3.48
    let engine = engine_with_courses(&[(90.0, 3), (65.0, 2)]);

    assert_close(engine.select_current_value(CalculationMode::Gpa), 3.48);
}

#[test]
fn each_mark_band_feeds_the_average() {
    let engine = engine_with_courses(&[(85.0, 3), (61.0, 3)]);

    // (4.00 + 2.30) / 2 = 3.15
    assert_close(engine.select_current_value(CalculationMode::Gpa), 3.15);
}

#[test]
fn unqualified_courses_contribute_nothing() {
    let mut engine = engine_with_courses(&[(90.0, 3)]);

    // A zero-credit course and an unmarked course change nothing.
    let zero_credit = engine.add_course(1).expect("zero-credit course");
    assert!(engine.update_course_field(1, zero_credit, &CourseUpdate::Marks(Some(55.0))));
    assert!(engine.update_course_field(1, zero_credit, &CourseUpdate::Credits(0)));
    let _ = engine.add_course(1).expect("unmarked course");

    assert_close(engine.select_current_value(CalculationMode::Gpa), 4.00);
}

#[test]
fn all_unqualified_yields_zero() {
    let engine = GpaEngine::new();
    assert_close(engine.select_current_value(CalculationMode::Gpa), 0.0);

    assert_close(compute_semester_gpa(&[]), 0.0);
}

#[test]
fn grade_pick_sets_points_and_overwrites_marks() {
    let mut engine = GpaEngine::new();
    assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(95.0))));
    assert!(engine.update_course_field(1, 1, &CourseUpdate::Grade(Letter::BPlus)));

    let course = engine.semesters()[0].course(1).expect("course");
    assert_close(course.grade_points, 3.30);
    assert_eq!(course.marks, Some(77.0), "prior marks are overwritten");
}

#[test]
fn marks_edit_wins_over_previous_grade_pick() {
    let mut engine = GpaEngine::new();
    assert!(engine.update_course_field(1, 1, &CourseUpdate::Grade(Letter::D)));
    assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(88.0))));

    let course = engine.semesters()[0].course(1).expect("course");
    assert_eq!(course.grade, Some(Letter::A));
    assert_close(course.grade_points, 4.00);
}

#[test]
fn course_ids_skip_freed_ids() {
    let mut engine = GpaEngine::new();
    assert_eq!(engine.add_course(1), Some(2));
    assert_eq!(engine.add_course(1), Some(3));
    assert!(engine.remove_course(1, 2));

    // Max existing id is 3, so the next id is 4; 2 is never reused.
    assert_eq!(engine.add_course(1), Some(4));

    assert!(engine.remove_course(1, 4));
    // Ids are max + 1, so removing the highest survivor steps back to 4.
    assert_eq!(engine.add_course(1), Some(4));
}

#[test]
fn removal_guards_keep_one_of_everything() {
    let mut engine = GpaEngine::new();

    assert!(!engine.remove_semester(1));
    assert!(!engine.remove_cgpa_semester(1));
    assert!(!engine.remove_course(1, 1));

    assert_eq!(engine.semesters().len(), 1);
    assert_eq!(engine.semesters()[0].id, 1);
    assert_eq!(engine.cgpa_semesters().len(), 1);
    assert_eq!(engine.semesters()[0].courses.len(), 1);
}

#[test]
fn removing_missing_targets_is_a_quiet_no_op() {
    let mut engine = GpaEngine::new();
    let second = engine.add_semester();

    assert!(!engine.remove_semester(99));
    assert!(!engine.remove_course(second, 42));
    assert_eq!(engine.semesters().len(), 2);
}

#[test]
fn gpa_mode_headline_ignores_later_semesters() {
    let mut engine = GpaEngine::new();
    assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(70.0))));

    let second = engine.add_semester();
    assert!(engine.update_course_field(second, 1, &CourseUpdate::Marks(Some(90.0))));

    // Headline is the first semester's 3.00; the second card shows its own.
    assert_close(engine.select_current_value(CalculationMode::Gpa), 3.00);
    assert_close(engine.semester_gpa(second).expect("second gpa"), 4.00);
}

#[test]
fn cumulative_example_from_two_semesters() {
    let mut engine = GpaEngine::new();
    assert!(engine.update_summary_field(1, &SummaryUpdate::Gpa(Some(3.5))));
    assert!(engine.update_summary_field(1, &SummaryUpdate::Credits(Some(15))));
    let second = engine.add_cgpa_semester();
    assert!(engine.update_summary_field(second, &SummaryUpdate::Gpa(Some(3.8))));
    assert!(engine.update_summary_field(second, &SummaryUpdate::Credits(Some(18))));

    // (3.5*15 + 3.8*18) / 33 = 3.6636..., rounded to 3.66
    assert_close(engine.select_current_value(CalculationMode::Cgpa), 3.66);
}

#[test]
fn cumulative_ignores_zero_gpa_and_missing_credits() {
    let mut summaries = vec![SemesterSummary::new(1), SemesterSummary::new(2)];
    summaries[0].gpa = Some(3.0);
    summaries[0].credits = Some(12);
    summaries[1].gpa = Some(0.0);
    summaries[1].credits = Some(18);

    assert_close(compute_cumulative_gpa(&summaries), 3.00);

    summaries[0].credits = None;
    assert_close(compute_cumulative_gpa(&summaries), 0.0);
}

#[test]
fn snapshots_are_not_disturbed_by_later_edits() {
    let mut engine = GpaEngine::new();
    assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(90.0))));

    // A front end holds onto a snapshot of the current collection.
    let snapshot = engine.semesters().to_vec();

    assert!(engine.update_course_field(1, 1, &CourseUpdate::Marks(Some(50.0))));

    // The snapshot still reflects the state at the time it was taken.
    assert_eq!(snapshot[0].courses[0].marks, Some(90.0));
    assert_eq!(
        engine.semesters()[0].courses[0].marks,
        Some(50.0),
        "the engine moved on"
    );
}
