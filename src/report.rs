//! Final load table and fairness metrics.
//!
//! Turns the post-run pool into consumer-facing reporting: the
//! per-assistant load table (sorted heaviest-first, the usual display
//! order) and summary statistics that make the leveling property
//! measurable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Min/Max Load | Lightest and heaviest assistant |
//! | Spread | max − min (the leveling quality measure) |
//! | Mean Load | Total load / pool size |
//! | Total Load | Sum across the pool |

use serde::{Deserialize, Serialize};

use crate::models::AssistantPool;

/// One row of the final per-assistant load table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRow {
    /// Assistant display name.
    pub name: String,
    /// Final accumulated load.
    pub load: f64,
    /// Seeded duty sources, comma-joined; `"-"` when none.
    pub duties: String,
}

/// Builds the final load table, sorted descending by load.
///
/// The sort is stable: equally loaded assistants keep roster order.
pub fn load_table(pool: &AssistantPool) -> Vec<LoadRow> {
    let mut rows: Vec<LoadRow> = pool
        .iter()
        .map(|a| LoadRow {
            name: a.name.clone(),
            load: a.load,
            duties: if a.course_duties.is_empty() {
                "-".to_string()
            } else {
                a.course_duties.join(", ")
            },
        })
        .collect();

    rows.sort_by(|a, b| b.load.partial_cmp(&a.load).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

/// Summary statistics over the pool's final loads.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadKpi {
    /// Lightest final load.
    pub min_load: f64,
    /// Heaviest final load.
    pub max_load: f64,
    /// max − min; small spread = well-leveled run.
    pub spread: f64,
    /// Mean load across the pool.
    pub mean_load: f64,
    /// Sum of all loads.
    pub total_load: f64,
}

impl LoadKpi {
    /// Computes load statistics for a pool.
    ///
    /// An empty pool yields all-zero metrics.
    pub fn calculate(pool: &AssistantPool) -> Self {
        if pool.is_empty() {
            return Self {
                min_load: 0.0,
                max_load: 0.0,
                spread: 0.0,
                mean_load: 0.0,
                total_load: 0.0,
            };
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut total = 0.0;
        for a in pool.iter() {
            min = min.min(a.load);
            max = max.max(a.load);
            total += a.load;
        }

        Self {
            min_load: min,
            max_load: max,
            spread: max - min,
            mean_load: total / pool.len() as f64,
            total_load: total,
        }
    }

    /// Whether the spread stays within `tolerance` load points.
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.spread <= tolerance
    }
}
