//! Domain models for exam duty allocation.
//!
//! Provides the input records (roster, course loads, exams) and output
//! records (schedule entries, allocation report) consumed and produced by
//! the allocation engine.
//!
//! # Identity
//!
//! Assistants are addressed by an opaque [`AssistantId`] handle into the
//! pool's arena; the display name is an editable attribute, not the key.
//! Name lookup happens once at the pool boundary, so a typo in an input
//! record surfaces as a lookup miss instead of silently forking a record.

mod assistant;
mod exam;
mod schedule;

pub use assistant::{Assistant, AssistantId, AssistantPool};
pub use exam::{is_placeholder_name, CourseLoadRecord, Exam};
pub use schedule::{AllocationReport, Assignee, AssigneeRole, ScheduleEntry};
