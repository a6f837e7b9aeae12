//! Error taxonomy for the allocation core.
//!
//! Nothing here is fatal to a run: the engine collects per-exam errors into
//! the report and keeps going, so one malformed row never aborts the batch.

use thiserror::Error;

/// A per-exam failure recorded during an allocation run.
///
/// Each variant identifies the offending exam by course code and exam kind
/// so the caller can point the user at the row that was skipped.
#[derive(Error, Debug)]
pub enum AllocationError {
    /// The exam's date/time fields did not parse as `YYYY-MM-DD` + `HH:MM`.
    #[error("exam {course_code} {exam_kind}: invalid date/time '{value}': {source}")]
    InvalidDateTime {
        course_code: String,
        exam_kind: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The exam's duration is zero or negative.
    #[error("exam {course_code} {exam_kind}: invalid duration {minutes} min")]
    InvalidDuration {
        course_code: String,
        exam_kind: String,
        minutes: i64,
    },
}

impl AllocationError {
    /// Course code of the exam this error belongs to.
    pub fn course_code(&self) -> &str {
        match self {
            Self::InvalidDateTime { course_code, .. } => course_code,
            Self::InvalidDuration { course_code, .. } => course_code,
        }
    }
}
