//! Load seeding from course-duty responsibilities.
//!
//! Before any exam is assigned, assistants who already carry term duties
//! (grading, lab supervision, being a course's assistant) start the run
//! with those points on the board. The allocator then routes proctoring
//! away from them until the rest of the pool catches up.

use crate::models::{is_placeholder_name, AssistantPool, CourseLoadRecord};

/// Resets the pool and seeds starting loads from course-load records.
///
/// Every assistant is first reset to zero load and empty duties, so
/// calling this twice with the same inputs is the same as calling it once.
///
/// Records are consumed one per course code: duplicate codes collapse to
/// the maximum declared load and the ordered union of their assistant
/// names. For each collapsed record with a positive load, every named
/// assistant found in the pool is credited the load and gets a duty string
/// `"<code> (<N>p)"` appended. Names with no pool record are silently
/// ignored; placeholder names are excluded.
///
/// Iteration follows input order, so duty strings come out in a
/// reproducible order even though the load totals are order-independent.
pub fn initialize_loads(pool: &mut AssistantPool, records: &[CourseLoadRecord]) {
    pool.reset_loads();

    for record in collapse_by_course(records) {
        if record.load <= 0.0 {
            continue;
        }
        let duty = format!("{} ({}p)", record.course_code, record.load as i64);
        for name in &record.assistants {
            if let Some(id) = pool.id_of(name) {
                pool.credit(id, record.load);
                pool.get_mut(id).course_duties.push(duty.clone());
            }
        }
    }
}

/// Collapses records sharing a course code into one, preserving first-seen
/// code order. Load is the maximum across the group; assistant names are
/// the deduplicated union in first-occurrence order, placeholders removed.
fn collapse_by_course(records: &[CourseLoadRecord]) -> Vec<CourseLoadRecord> {
    let mut collapsed: Vec<CourseLoadRecord> = Vec::new();

    for record in records {
        let names = record
            .assistants
            .iter()
            .filter(|name| !is_placeholder_name(name));

        match collapsed
            .iter_mut()
            .find(|c| c.course_code == record.course_code)
        {
            Some(existing) => {
                existing.load = existing.load.max(record.load);
                for name in names {
                    if !existing.assistants.iter().any(|n| n == name) {
                        existing.assistants.push(name.clone());
                    }
                }
            }
            None => {
                let mut fresh = CourseLoadRecord::new(record.course_code.clone(), record.load);
                for name in names {
                    if !fresh.assistants.iter().any(|n| n == name) {
                        fresh.assistants.push(name.clone());
                    }
                }
                collapsed.push(fresh);
            }
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> AssistantPool {
        AssistantPool::from_roster(["Ada", "Berk", "Ceren"])
    }

    #[test]
    fn test_basic_seeding() {
        let mut pool = pool();
        let records = vec![
            CourseLoadRecord::new("MetE 301", 20.0).with_assistant("Ada"),
            CourseLoadRecord::new("MetE 202", 10.0)
                .with_assistant("Ada")
                .with_assistant("Berk"),
        ];

        initialize_loads(&mut pool, &records);

        let ada = pool.get(pool.id_of("Ada").unwrap());
        assert_eq!(ada.load, 30.0);
        assert_eq!(ada.course_duties, vec!["MetE 301 (20p)", "MetE 202 (10p)"]);

        let berk = pool.get(pool.id_of("Berk").unwrap());
        assert_eq!(berk.load, 10.0);

        let ceren = pool.get(pool.id_of("Ceren").unwrap());
        assert_eq!(ceren.load, 0.0);
        assert!(ceren.course_duties.is_empty());
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let mut pool = pool();
        let records = vec![CourseLoadRecord::new("MetE 301", 20.0).with_assistant("Ada")];

        initialize_loads(&mut pool, &records);
        initialize_loads(&mut pool, &records);

        let ada = pool.get(pool.id_of("Ada").unwrap());
        assert_eq!(ada.load, 20.0);
        assert_eq!(ada.course_duties, vec!["MetE 301 (20p)"]);
    }

    #[test]
    fn test_reset_clears_previous_state() {
        let mut pool = pool();
        let id = pool.id_of("Berk").unwrap();
        pool.credit(id, 99.0);

        initialize_loads(&mut pool, &[]);
        assert_eq!(pool.get(id).load, 0.0);
    }

    #[test]
    fn test_unknown_names_silently_ignored() {
        let mut pool = pool();
        let records = vec![CourseLoadRecord::new("MetE 301", 20.0).with_assistant("Nobody")];

        initialize_loads(&mut pool, &records);
        assert!(pool.iter().all(|a| a.load == 0.0));
    }

    #[test]
    fn test_zero_load_records_seed_nothing() {
        let mut pool = pool();
        let records = vec![CourseLoadRecord::new("MetE 301", 0.0).with_assistant("Ada")];

        initialize_loads(&mut pool, &records);
        let ada = pool.get(pool.id_of("Ada").unwrap());
        assert_eq!(ada.load, 0.0);
        assert!(ada.course_duties.is_empty());
    }

    #[test]
    fn test_placeholder_names_excluded() {
        let mut pool = pool();
        let records = vec![CourseLoadRecord::new("MetE 301", 20.0)
            .with_assistant("none")
            .with_assistant("")
            .with_assistant("Ada")];

        initialize_loads(&mut pool, &records);
        assert_eq!(pool.get(pool.id_of("Ada").unwrap()).load, 20.0);
    }

    #[test]
    fn test_duplicate_course_codes_collapse() {
        // Rows per exam kind share a course code; max load wins, names union.
        let mut pool = pool();
        let records = vec![
            CourseLoadRecord::new("MetE 301", 20.0).with_assistant("Ada"),
            CourseLoadRecord::new("MetE 301", 15.0)
                .with_assistant("Ada")
                .with_assistant("Berk"),
        ];

        initialize_loads(&mut pool, &records);

        let ada = pool.get(pool.id_of("Ada").unwrap());
        assert_eq!(ada.load, 20.0); // credited once, at the max
        assert_eq!(ada.course_duties, vec!["MetE 301 (20p)"]);

        let berk = pool.get(pool.id_of("Berk").unwrap());
        assert_eq!(berk.load, 20.0);
    }

    #[test]
    fn test_duty_string_truncates_fractional_load() {
        let mut pool = pool();
        let records = vec![CourseLoadRecord::new("MetE 301", 12.75).with_assistant("Ada")];

        initialize_loads(&mut pool, &records);
        let ada = pool.get(pool.id_of("Ada").unwrap());
        assert_eq!(ada.load, 12.75); // full value credited
        assert_eq!(ada.course_duties, vec!["MetE 301 (12p)"]); // display truncates
    }

    #[test]
    fn test_empty_records_ok() {
        let mut pool = pool();
        initialize_loads(&mut pool, &[]);
        assert!(pool.iter().all(|a| a.load == 0.0 && a.course_duties.is_empty()));
    }
}
