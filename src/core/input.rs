//! Input shaping for text-field edits
//!
//! The calculator accepts raw text from its front end and applies it to the
//! model only when it fits the field's domain. Rejection is silent: the
//! predicates here return a verdict and the caller leaves the model
//! untouched on [`FieldInput::Rejected`]. No operation raises an error.

use crate::core::models::course::DEFAULT_CREDITS;

/// Verdict for one text-field edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput<T> {
    /// Parsed and in range; apply to the model
    Value(T),
    /// Field emptied; apply the unset state
    Cleared,
    /// Out of domain; leave the model unchanged
    Rejected,
}

impl<T> FieldInput<T> {
    /// Whether the edit should be applied (value or clear)
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Shape a course marks edit: digits only, integer in [0, 100]
#[must_use]
pub fn shape_marks(text: &str) -> FieldInput<f64> {
    let text = text.trim();
    if text.is_empty() {
        return FieldInput::Cleared;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return FieldInput::Rejected;
    }
    match text.parse::<u32>() {
        Ok(marks) if marks <= 100 => FieldInput::Value(f64::from(marks)),
        _ => FieldInput::Rejected,
    }
}

/// Shape a course credits edit: integer in [1, 6]
///
/// Clearing the field enters the transient zero state; committing that
/// state (focus loss) goes through [`commit_course_credits`].
#[must_use]
pub fn shape_course_credits(text: &str) -> FieldInput<u8> {
    let text = text.trim();
    if text.is_empty() {
        return FieldInput::Cleared;
    }
    match text.parse::<u8>() {
        Ok(credits) if (1..=6).contains(&credits) => FieldInput::Value(credits),
        _ => FieldInput::Rejected,
    }
}

/// Shape a CGPA-mode gpa edit: at most one decimal point, at most two
/// fractional digits, value in [0.00, 4.00]
#[must_use]
pub fn shape_summary_gpa(text: &str) -> FieldInput<f64> {
    let text = text.trim();
    if text.is_empty() || text == "." {
        return FieldInput::Cleared;
    }
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return FieldInput::Rejected;
    }
    let mut parts = text.splitn(3, '.');
    let _integer = parts.next();
    let fraction = parts.next();
    if parts.next().is_some() {
        // Second decimal point
        return FieldInput::Rejected;
    }
    if fraction.is_some_and(|digits| digits.len() > 2) {
        return FieldInput::Rejected;
    }
    match text.parse::<f64>() {
        Ok(gpa) if (0.0..=4.0).contains(&gpa) => FieldInput::Value(gpa),
        _ => FieldInput::Rejected,
    }
}

/// Shape a CGPA-mode credits edit: integer in [1, 50]
#[must_use]
pub fn shape_summary_credits(text: &str) -> FieldInput<u32> {
    let text = text.trim();
    if text.is_empty() {
        return FieldInput::Cleared;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return FieldInput::Rejected;
    }
    match text.parse::<u32>() {
        Ok(credits) if (1..=50).contains(&credits) => FieldInput::Value(credits),
        _ => FieldInput::Rejected,
    }
}

/// Commit rule for course credits on focus loss: a cleared (zero) field
/// reverts to the default of 3
#[must_use]
pub const fn commit_course_credits(credits: u8) -> u8 {
    if credits == 0 {
        DEFAULT_CREDITS
    } else {
        credits
    }
}

/// Commit rule for CGPA-mode credits on focus loss: a cleared or zero
/// field stays empty. This asymmetry with course credits is deliberate.
#[must_use]
pub fn commit_summary_credits(credits: Option<u32>) -> Option<u32> {
    credits.filter(|&value| value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_accept_digits_in_range() {
        assert_eq!(shape_marks("0"), FieldInput::Value(0.0));
        assert_eq!(shape_marks("73"), FieldInput::Value(73.0));
        assert_eq!(shape_marks("100"), FieldInput::Value(100.0));
        assert_eq!(shape_marks(""), FieldInput::Cleared);
        assert_eq!(shape_marks("  "), FieldInput::Cleared);
    }

    #[test]
    fn marks_reject_out_of_domain() {
        assert_eq!(shape_marks("101"), FieldInput::Rejected);
        assert_eq!(shape_marks("-3"), FieldInput::Rejected);
        assert_eq!(shape_marks("7.5"), FieldInput::Rejected);
        assert_eq!(shape_marks("abc"), FieldInput::Rejected);
    }

    #[test]
    fn course_credits_accept_one_to_six() {
        assert_eq!(shape_course_credits("1"), FieldInput::Value(1));
        assert_eq!(shape_course_credits("6"), FieldInput::Value(6));
        assert_eq!(shape_course_credits(""), FieldInput::Cleared);
    }

    #[test]
    fn course_credits_reject_out_of_domain() {
        assert_eq!(shape_course_credits("0"), FieldInput::Rejected);
        assert_eq!(shape_course_credits("7"), FieldInput::Rejected);
        assert_eq!(shape_course_credits("12"), FieldInput::Rejected);
        assert_eq!(shape_course_credits("x"), FieldInput::Rejected);
    }

    #[test]
    fn summary_gpa_accepts_two_decimals_up_to_four() {
        assert_eq!(shape_summary_gpa("0"), FieldInput::Value(0.0));
        assert_eq!(shape_summary_gpa("3.75"), FieldInput::Value(3.75));
        assert_eq!(shape_summary_gpa("4.00"), FieldInput::Value(4.0));
        assert_eq!(shape_summary_gpa("4."), FieldInput::Value(4.0));
        assert_eq!(shape_summary_gpa(""), FieldInput::Cleared);
        assert_eq!(shape_summary_gpa("."), FieldInput::Cleared);
    }

    #[test]
    fn summary_gpa_rejects_bad_shapes_and_range() {
        assert_eq!(shape_summary_gpa("4.01"), FieldInput::Rejected);
        assert_eq!(shape_summary_gpa("5"), FieldInput::Rejected);
        assert_eq!(shape_summary_gpa("3.141"), FieldInput::Rejected);
        assert_eq!(shape_summary_gpa("3.1.4"), FieldInput::Rejected);
        assert_eq!(shape_summary_gpa("-1"), FieldInput::Rejected);
        assert_eq!(shape_summary_gpa("3,5"), FieldInput::Rejected);
    }

    #[test]
    fn summary_credits_accept_one_to_fifty() {
        assert_eq!(shape_summary_credits("1"), FieldInput::Value(1));
        assert_eq!(shape_summary_credits("50"), FieldInput::Value(50));
        assert_eq!(shape_summary_credits(""), FieldInput::Cleared);
        assert_eq!(shape_summary_credits("0"), FieldInput::Rejected);
        assert_eq!(shape_summary_credits("51"), FieldInput::Rejected);
    }

    #[test]
    fn commit_rules_differ_between_modes() {
        // Course credits snap back to the default.
        assert_eq!(commit_course_credits(0), DEFAULT_CREDITS);
        assert_eq!(commit_course_credits(5), 5);

        // Summary credits stay empty.
        assert_eq!(commit_summary_credits(None), None);
        assert_eq!(commit_summary_credits(Some(0)), None);
        assert_eq!(commit_summary_credits(Some(18)), Some(18));
    }
}
