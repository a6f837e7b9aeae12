//! Greedy least-load allocation engine.
//!
//! # Algorithm
//!
//! Exams are processed strictly in input order; the pool mutates between
//! exams and the next exam sees the updated loads. Per exam:
//!
//! 1. Parse date/time and validate duration (failure → per-exam error,
//!    exam skipped, run continues).
//! 2. Compute proctoring points.
//! 3. Seat pre-assigned staff, raising the headcount if they exceed it —
//!    manual staff are never bumped for capacity.
//! 4. Fill remaining slots walking the pool in ascending-load order.
//! 5. Record the schedule entry (under-staffing is recorded, not an error).
//!
//! # Determinism
//!
//! The load ordering is a stable sort with arena (insertion) order as the
//! tie-break, so identical inputs always produce identical schedules.
//!
//! # Complexity
//! O(E · A log A): the whole pool is re-ranked before every exam's fill
//! step. Fine at this scale (tens of assistants, hundreds of exams); a
//! min-heap keyed by (load, insertion seq) would take it to O(E · k log A)
//! if the pool ever grows past that.

use chrono::NaiveDateTime;
use std::collections::HashSet;

use crate::error::AllocationError;
use crate::models::{AllocationReport, Assignee, AssigneeRole, AssistantPool, Exam, ScheduleEntry};
use crate::points::compute_points;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Greedy least-load allocator.
///
/// Stateless between runs; all run state lives in the pool and the report.
///
/// # Example
///
/// ```
/// use exam_duty::{AllocationEngine, AssistantPool, Exam, initialize_loads};
///
/// let mut pool = AssistantPool::from_roster(["Ada", "Berk"]);
/// initialize_loads(&mut pool, &[]);
///
/// let exams = vec![Exam::new("MATH 219", "MT1", "2025-04-15", "10:00", 120, 1)];
/// let report = AllocationEngine::new().allocate(&mut pool, &exams);
///
/// assert_eq!(report.entry_count(), 1);
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine;

impl AllocationEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Runs the allocation over `exams`, mutating `pool` in place.
    ///
    /// Exams are never reordered. A failing exam contributes an error to
    /// the report instead of an entry; the caller decides whether collected
    /// errors abort the workflow or ship with partial results.
    pub fn allocate(&self, pool: &mut AssistantPool, exams: &[Exam]) -> AllocationReport {
        let mut report = AllocationReport::new();

        for exam in exams {
            match self.process_exam(pool, exam) {
                Ok(entry) => report.entries.push(entry),
                Err(error) => {
                    tracing::warn!(
                        course = %exam.course_code,
                        kind = %exam.exam_kind,
                        %error,
                        "Exam skipped"
                    );
                    report.errors.push(error);
                }
            }
        }

        report
    }

    fn process_exam(
        &self,
        pool: &mut AssistantPool,
        exam: &Exam,
    ) -> Result<ScheduleEntry, AllocationError> {
        let stamp = format!("{} {}", exam.date, exam.time);
        let start = NaiveDateTime::parse_from_str(&stamp, DATETIME_FORMAT).map_err(|source| {
            AllocationError::InvalidDateTime {
                course_code: exam.course_code.clone(),
                exam_kind: exam.exam_kind.clone(),
                value: stamp.clone(),
                source,
            }
        })?;

        if exam.duration_minutes <= 0 {
            return Err(AllocationError::InvalidDuration {
                course_code: exam.course_code.clone(),
                exam_kind: exam.exam_kind.clone(),
                minutes: exam.duration_minutes,
            });
        }

        let points = compute_points(start, exam.duration_minutes as f64);

        // Mandatory staff first. If more names are declared than slots
        // requested, the headcount rises to seat them all.
        let pre_assigned = exam.valid_pre_assigned();
        let requested = exam.needed;
        let needed = requested.max(pre_assigned.len());

        let mut assignees: Vec<Assignee> = Vec::new();
        let mut seated: HashSet<String> = HashSet::new();

        for name in pre_assigned {
            if seated.contains(name) {
                continue;
            }
            match pool.id_of(name) {
                Some(id) => {
                    pool.credit(id, points);
                    assignees.push(Assignee::new(name, AssigneeRole::CourseAssistant));
                }
                None => {
                    // Not a tracked assistant: listed on the schedule,
                    // no load accrues.
                    assignees.push(Assignee::new(name, AssigneeRole::External));
                }
            }
            seated.insert(name.to_string());
        }

        // Least-load fill. The pool is re-ranked for every exam, which is
        // what levels workload across the run: each assignment pushes its
        // assistant down the pick order for later exams.
        if assignees.len() < needed {
            let remaining = needed - assignees.len();
            let mut filled = 0;

            for id in pool.ids_by_load() {
                if filled >= remaining {
                    break;
                }
                let name = pool.get(id).name.clone();
                if seated.contains(&name) {
                    continue;
                }
                pool.credit(id, points);
                tracing::debug!(
                    course = %exam.course_code,
                    assistant = %name,
                    points,
                    "Proctor assigned"
                );
                seated.insert(name.clone());
                assignees.push(Assignee::new(name, AssigneeRole::Proctor));
                filled += 1;
            }
        }

        if assignees.len() < needed {
            // Pool exhausted: record what was filled, no slot manufactured.
            tracing::warn!(
                course = %exam.course_code,
                kind = %exam.exam_kind,
                seated = assignees.len(),
                needed,
                "Exam under-staffed"
            );
        }

        Ok(ScheduleEntry {
            date: exam.date.clone(),
            time: exam.time.clone(),
            course_code: exam.course_code.clone(),
            exam_kind: exam.exam_kind.clone(),
            duration_minutes: exam.duration_minutes,
            points,
            requested,
            needed,
            assignees,
        })
    }
}
