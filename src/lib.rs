//! Load-balanced assignment of exam invigilation duties.
//!
//! Assigns proctoring slots for a term's exams to a pool of teaching
//! assistants, keeping cumulative workload level across the term. The
//! allocator is a deterministic greedy heuristic: exams are processed in
//! input order, pre-assigned course staff are seated first, and the
//! remaining slots go to whoever currently carries the least load.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Assistant`, `AssistantPool`, `Exam`,
//!   `CourseLoadRecord`, `ScheduleEntry`, `AllocationReport`
//! - **`points`**: Proctoring-point calculation from exam time and duration
//! - **`allocation`**: Load seeding and the greedy allocation engine
//! - **`report`**: Final load table and fairness metrics
//! - **`validation`**: Input integrity checks (duplicate names, dangling refs)
//!
//! # Architecture
//!
//! This crate owns only the allocation core. Data entry, table editing, and
//! CSV/chart rendering belong to the consumer, which supplies a roster,
//! course-load records, and an exam list, and reads back a schedule log plus
//! the final per-assistant load table.
//!
//! The pool is the single piece of shared mutable state. One allocation run
//! owns it exclusively; every mutating operation takes `&mut AssistantPool`
//! so the mutation is visible at the call site.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//!   (greedy least-loaded assignment)

pub mod allocation;
pub mod error;
pub mod models;
pub mod points;
pub mod report;
pub mod validation;

pub use allocation::{initialize_loads, AllocationEngine};
pub use error::AllocationError;
pub use models::{
    AllocationReport, Assignee, AssigneeRole, Assistant, AssistantId, AssistantPool,
    CourseLoadRecord, Exam, ScheduleEntry,
};
