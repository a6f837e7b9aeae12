//! Load seeding and the greedy allocation engine.
//!
//! One allocation run is: build a pool from the roster, seed starting
//! loads from course-load records, then feed the exam list through the
//! engine. The engine mutates the pool exam by exam; the run's outcome is
//! an [`AllocationReport`](crate::models::AllocationReport) plus the final
//! pool state.
//!
//! # Algorithm
//!
//! For each exam, in input order: seat pre-assigned staff first (they are
//! never bumped for capacity), then fill remaining slots from the
//! currently least-loaded assistants. Because loads carry across exams,
//! every assignment pushes its assistant down the pick order for later
//! exams — this is what levels workload over the run.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" —
//! the classic greedy least-loaded list-scheduling heuristic.

mod engine;
mod init;

pub use engine::AllocationEngine;
pub use init::initialize_loads;
