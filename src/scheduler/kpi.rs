//! Run aggregates (KPIs).
//!
//! Computes the summary statistics reported under every schedule table.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | Sum of waits / process count |
//! | Average turnaround | Sum of turnarounds / process count |
//! | Throughput | Process count / last completion time |
//! | CPU utilization | Busy time / last completion time |

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleRow, Timeline};

/// Aggregate statistics of one scheduling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunAggregates {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Latest completion time across all rows.
    pub last_completion: i64,
    /// Fraction of `[0, last_completion)` during which the CPU was busy.
    pub cpu_utilization: f64,
}

impl RunAggregates {
    /// Computes aggregates from completed rows and the timeline that
    /// produced them.
    ///
    /// An empty batch, or one whose last completion is 0, yields zeros
    /// rather than NaN or infinity.
    pub fn calculate(rows: &[ScheduleRow], timeline: &Timeline) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let count = rows.len() as f64;
        let last_completion = rows.iter().map(|r| r.completion_time).max().unwrap_or(0);
        let (throughput, cpu_utilization) = if last_completion > 0 {
            (
                count / last_completion as f64,
                timeline.busy_time() as f64 / last_completion as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            average_wait: total_wait(rows) as f64 / count,
            average_turnaround: total_turnaround(rows) as f64 / count,
            throughput,
            last_completion,
            cpu_utilization,
        }
    }
}

/// Sum of wait times.
pub fn total_wait(rows: &[ScheduleRow]) -> i64 {
    rows.iter().map(|r| r.wait_time).sum()
}

/// Sum of turnaround times.
pub fn total_turnaround(rows: &[ScheduleRow]) -> i64 {
    rows.iter().map(|r| r.turnaround_time).sum()
}
