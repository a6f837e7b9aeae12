//! Exam and course-load input records.
//!
//! Both are immutable inputs: the allocator reads them and appends to the
//! output log, never mutating them. Date and time ride along as raw strings
//! and are parsed per exam inside the engine, so one malformed row becomes
//! a per-exam error instead of poisoning input construction.

use serde::{Deserialize, Serialize};

/// Placeholder value used by data-entry layers for "no assistant here".
const PLACEHOLDER: &str = "none";

/// Whether a name field is a placeholder rather than a real name.
///
/// Empty/whitespace-only strings and the literal `"none"` (any ASCII case)
/// are excluded wherever assistant names are resolved.
pub fn is_placeholder_name(name: &str) -> bool {
    name.trim().is_empty() || name.trim().eq_ignore_ascii_case(PLACEHOLDER)
}

/// One scheduled exam needing proctors.
///
/// Identity is the combination of course code, exam kind, and date/time;
/// it is not required to be unique, but typically is within one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Course code, e.g. `"MATH 219"`.
    pub course_code: String,
    /// Exam kind label, e.g. `"MT1"`, `"Final"`.
    pub exam_kind: String,
    /// Scheduled date as `YYYY-MM-DD`.
    pub date: String,
    /// Start time as `HH:MM` (24-hour, naive local time).
    pub time: String,
    /// Duration in minutes.
    pub duration_minutes: i64,
    /// Requested proctor headcount (≥ 1).
    pub needed: usize,
    /// Pre-assigned staff names (0–3). Placeholders are filtered out
    /// during allocation; order is preserved.
    pub pre_assigned: Vec<String>,
}

impl Exam {
    /// Creates an exam with no pre-assigned staff.
    pub fn new(
        course_code: impl Into<String>,
        exam_kind: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        duration_minutes: i64,
        needed: usize,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            exam_kind: exam_kind.into(),
            date: date.into(),
            time: time.into(),
            duration_minutes,
            needed,
            pre_assigned: Vec::new(),
        }
    }

    /// Adds a pre-assigned staff name.
    pub fn with_pre_assigned(mut self, name: impl Into<String>) -> Self {
        self.pre_assigned.push(name.into());
        self
    }

    /// Pre-assigned names with placeholders removed, order preserved.
    pub fn valid_pre_assigned(&self) -> Vec<&str> {
        self.pre_assigned
            .iter()
            .map(String::as_str)
            .filter(|name| !is_placeholder_name(name))
            .collect()
    }
}

/// Maps a course (or administrative duty) to a starting load contribution
/// and the assistants it pre-assigns.
///
/// Input to load seeding: assistants named here begin the allocation run
/// already carrying `load` points, so the allocator routes proctoring away
/// from them until the rest of the pool catches up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseLoadRecord {
    /// Course or duty code.
    pub course_code: String,
    /// Load contribution (≥ 0). Records with zero load seed nothing.
    pub load: f64,
    /// Assistant names this record pre-assigns (0–3).
    pub assistants: Vec<String>,
}

impl CourseLoadRecord {
    /// Creates a record with no assistants attached.
    pub fn new(course_code: impl Into<String>, load: f64) -> Self {
        Self {
            course_code: course_code.into(),
            load,
            assistants: Vec::new(),
        }
    }

    /// Attaches an assistant name.
    pub fn with_assistant(mut self, name: impl Into<String>) -> Self {
        self.assistants.push(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_names() {
        assert!(is_placeholder_name(""));
        assert!(is_placeholder_name("   "));
        assert!(is_placeholder_name("none"));
        assert!(is_placeholder_name("None"));
        assert!(is_placeholder_name("NONE"));
        assert!(!is_placeholder_name("Nonea"));
        assert!(!is_placeholder_name("Ada"));
    }

    #[test]
    fn test_valid_pre_assigned_filters_and_keeps_order() {
        let exam = Exam::new("MATH 219", "MT1", "2025-04-15", "17:40", 120, 4)
            .with_pre_assigned("Berk")
            .with_pre_assigned("none")
            .with_pre_assigned("Ada");

        assert_eq!(exam.valid_pre_assigned(), vec!["Berk", "Ada"]);
    }

    #[test]
    fn test_builders() {
        let record = CourseLoadRecord::new("MetE 301", 20.0)
            .with_assistant("Ada")
            .with_assistant("Berk");
        assert_eq!(record.course_code, "MetE 301");
        assert_eq!(record.assistants.len(), 2);

        let exam = Exam::new("MetE 301", "Final", "2025-06-01", "09:30", 150, 3);
        assert!(exam.pre_assigned.is_empty());
        assert_eq!(exam.needed, 3);
    }
}
