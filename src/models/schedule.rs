//! Schedule output models.
//!
//! One [`ScheduleEntry`] per successfully processed exam, collected with
//! any per-exam errors into an [`AllocationReport`]. The report is the
//! whole outcome of a run: the caller decides whether collected errors
//! abort the workflow or ship alongside partial results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AllocationError;

/// Why an assignee occupies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssigneeRole {
    /// Pre-assigned staff member tracked in the pool; accrues load.
    CourseAssistant,
    /// Pre-assigned name with no pool record; listed for the schedule but
    /// accrues no load.
    External,
    /// Filled from the pool by the least-load rule; accrues load.
    Proctor,
}

impl AssigneeRole {
    /// Display label used in exported schedules.
    pub fn label(self) -> &'static str {
        match self {
            Self::CourseAssistant => "course-assistant",
            Self::External => "manual/external",
            Self::Proctor => "proctor",
        }
    }
}

/// One seated person on one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Display name.
    pub name: String,
    /// How the slot was filled.
    pub role: AssigneeRole,
}

impl Assignee {
    pub fn new(name: impl Into<String>, role: AssigneeRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role.label())
    }
}

/// One row of the output schedule.
///
/// Field layout matches the consumer-facing export: date, time, course,
/// kind, duration, points, assignees. `requested` keeps the headcount as
/// entered; `needed` is the effective headcount after pre-assigned staff
/// overflow raised it, so deviations are visible without diffing inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Exam date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Course code.
    pub course_code: String,
    /// Exam kind label.
    pub exam_kind: String,
    /// Duration in minutes.
    pub duration_minutes: i64,
    /// Proctoring points credited per seated pool assistant (2 decimals).
    pub points: f64,
    /// Headcount as requested on the exam record.
    pub requested: usize,
    /// Effective headcount (≥ `requested` when pre-assigned staff overflow).
    pub needed: usize,
    /// Seated staff in assignment order: pre-assigned first, then proctors
    /// in fill order.
    pub assignees: Vec<Assignee>,
}

impl ScheduleEntry {
    /// Assignees rendered as a comma-joined display string,
    /// e.g. `"Ada (proctor), Berk (course-assistant)"`.
    pub fn assignees_joined(&self) -> String {
        self.assignees
            .iter()
            .map(Assignee::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether fewer slots were filled than the effective headcount.
    pub fn understaffed(&self) -> bool {
        self.assignees.len() < self.needed
    }
}

/// Outcome of one allocation run.
///
/// Entries appear in exam input order; exams that failed to process have
/// no entry and one error instead.
#[derive(Debug, Default)]
pub struct AllocationReport {
    /// One entry per successfully processed exam.
    pub entries: Vec<ScheduleEntry>,
    /// Per-exam failures, in encounter order.
    pub errors: Vec<AllocationError>,
}

impl AllocationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every exam processed cleanly.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Entries for a given course code.
    pub fn entries_for_course(&self, course_code: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.course_code == course_code)
            .collect()
    }

    /// Number of schedule entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
