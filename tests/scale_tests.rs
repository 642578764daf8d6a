//! Integration tests for the grading scale
//!
//! Pins the public contract of the fixed ten-band table: band boundaries,
//! the representative-marks round trip, and points uniqueness.

use pu_gpa::scale::{band, band_for_points, lookup, reverse_lookup, Letter, GRADE_SCALE};

#[test]
fn table_has_ten_descending_contiguous_bands() {
    assert_eq!(GRADE_SCALE.len(), 10);

    let mut previous: Option<f64> = None;
    for entry in &GRADE_SCALE {
        if let Some(bound) = entry.lower_bound {
            if let Some(prev) = previous {
                assert!(bound < prev, "bounds must strictly descend");
            }
            previous = Some(bound);
        } else {
            // Only the final band is unbounded below.
            assert_eq!(entry.letter, Letter::F);
        }
    }
}

#[test]
fn every_letter_appears_exactly_once() {
    for letter in Letter::ALL {
        let count = GRADE_SCALE
            .iter()
            .filter(|entry| entry.letter == letter)
            .count();
        assert_eq!(count, 1, "letter {letter} should appear once");
    }
}

#[test]
fn lookup_matches_published_table() {
    let expected = [
        (85.0, Letter::A, 4.00),
        (80.0, Letter::AMinus, 3.70),
        (75.0, Letter::BPlus, 3.30),
        (70.0, Letter::B, 3.00),
        (65.0, Letter::BMinus, 2.70),
        (61.0, Letter::CPlus, 2.30),
        (58.0, Letter::C, 2.00),
        (55.0, Letter::CMinus, 1.70),
        (50.0, Letter::D, 1.00),
        (0.0, Letter::F, 0.00),
    ];

    for (marks, letter, points) in expected {
        let entry = lookup(marks);
        assert_eq!(entry.letter, letter, "letter at {marks}");
        assert!(
            (entry.points - points).abs() < f64::EPSILON,
            "points at {marks}"
        );
    }
}

#[test]
fn lookup_is_total_over_the_reals() {
    assert_eq!(lookup(-100.0).letter, Letter::F);
    assert_eq!(lookup(f64::NAN).letter, Letter::F);
    assert_eq!(lookup(f64::INFINITY).letter, Letter::A);
    assert_eq!(lookup(1000.0).letter, Letter::A);
}

#[test]
fn representative_marks_reproduce_their_letter() {
    for letter in Letter::ALL {
        assert_eq!(lookup(reverse_lookup(letter)).letter, letter);
    }
}

#[test]
fn representative_marks_match_published_values() {
    let expected = [
        (Letter::A, 90.0),
        (Letter::AMinus, 82.0),
        (Letter::BPlus, 77.0),
        (Letter::B, 72.0),
        (Letter::BMinus, 67.0),
        (Letter::CPlus, 62.0),
        (Letter::C, 59.0),
        (Letter::CMinus, 56.0),
        (Letter::D, 52.0),
        (Letter::F, 0.0),
    ];

    for (letter, marks) in expected {
        assert!((reverse_lookup(letter) - marks).abs() < f64::EPSILON);
    }
}

#[test]
fn points_resolve_back_to_a_unique_letter() {
    for entry in &GRADE_SCALE {
        let resolved = band_for_points(entry.points).expect("points resolve");
        assert_eq!(resolved.letter, entry.letter);
    }
    assert!(band_for_points(3.33).is_none());
}

#[test]
fn band_by_letter_agrees_with_lookup() {
    for letter in Letter::ALL {
        let by_letter = band(letter);
        let by_marks = lookup(reverse_lookup(letter));
        assert_eq!(by_letter.letter, by_marks.letter);
        assert!((by_letter.points - by_marks.points).abs() < f64::EPSILON);
    }
}
