//! Pre-flight input integrity checks.
//!
//! Advisory checks run before an allocation: the engine itself stays
//! best-effort and never aborts a batch, but most of what it silently
//! tolerates at run time (unknown names, bad rows) is better caught here
//! and shown to the user first. Detects:
//! - Duplicate roster names
//! - References to assistants missing from the roster
//! - Zero headcounts and non-positive durations
//! - Unparseable date/time fields

use chrono::NaiveDateTime;
use std::collections::HashSet;

use crate::models::{is_placeholder_name, CourseLoadRecord, Exam};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two roster entries share a name; only one pool record would exist.
    DuplicateName,
    /// A course-load record or pre-assignment names an assistant not on
    /// the roster. Legal at run time (external staff) but usually a typo.
    UnknownAssistant,
    /// An exam requests zero proctors.
    ZeroHeadcount,
    /// An exam's duration is zero or negative.
    InvalidDuration,
    /// An exam's date/time does not parse.
    InvalidDateTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates allocation inputs.
///
/// Checks:
/// 1. No duplicate roster names
/// 2. Course-load records only reference roster names
/// 3. Pre-assigned exam names only reference roster names
/// 4. Every exam has `needed >= 1` and a positive duration
/// 5. Every exam's date/time parses as `YYYY-MM-DD` + `HH:MM`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    roster: &[String],
    records: &[CourseLoadRecord],
    exams: &[Exam],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut known = HashSet::new();
    for name in roster {
        if !known.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate roster name: {name}"),
            ));
        }
    }

    for record in records {
        for name in &record.assistants {
            if !is_placeholder_name(name) && !known.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAssistant,
                    format!(
                        "Course '{}' references unknown assistant '{}'",
                        record.course_code, name
                    ),
                ));
            }
        }
    }

    for exam in exams {
        let label = format!("{} {}", exam.course_code, exam.exam_kind);

        for name in &exam.pre_assigned {
            if !is_placeholder_name(name) && !known.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAssistant,
                    format!("Exam '{label}' pre-assigns unknown assistant '{name}'"),
                ));
            }
        }

        if exam.needed == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHeadcount,
                format!("Exam '{label}' requests zero proctors"),
            ));
        }

        if exam.duration_minutes <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Exam '{label}' has invalid duration {} min",
                    exam.duration_minutes
                ),
            ));
        }

        let stamp = format!("{} {}", exam.date, exam.time);
        if NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M").is_err() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDateTime,
                format!("Exam '{label}' has invalid date/time '{stamp}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
