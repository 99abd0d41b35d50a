//! Schedule (result) model.
//!
//! A schedule is the outcome of running one policy over a batch: one row
//! of metrics per process, the Gantt timeline, and aggregate statistics.

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};
use crate::scheduler::RunAggregates;

/// Per-process metrics produced by a scheduling run.
///
/// Constructed through [`ScheduleRow::new`], which keeps
/// `turnaround = burst + wait` and `completion = arrival + turnaround`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process ID.
    pub process_id: i64,
    /// Process priority.
    pub priority: i64,
    /// Burst duration.
    pub burst_duration: i64,
    /// Arrival time.
    pub arrival_time: i64,
    /// Time spent ready but not running.
    pub wait_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time at which the process finished.
    pub completion_time: i64,
}

impl ScheduleRow {
    /// Derives the row for `process` given its wait time.
    pub fn new(process: &Process, wait_time: i64) -> Self {
        let turnaround_time = process.burst_duration + wait_time;
        Self {
            process_id: process.id,
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            wait_time,
            turnaround_time,
            completion_time: process.arrival_time + turnaround_time,
        }
    }

    /// Derives the row for `process` from the time it finished.
    ///
    /// Wait is clamped at zero.
    pub fn completed_at(process: &Process, completion_time: i64) -> Self {
        let wait = completion_time - process.burst_duration - process.arrival_time;
        Self::new(process, wait.max(0))
    }
}

/// A completed scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// One row per process.
    pub rows: Vec<ScheduleRow>,
    /// CPU ownership intervals.
    pub timeline: Timeline,
    /// Averages, throughput, and CPU utilization.
    pub aggregates: RunAggregates,
}

impl Schedule {
    /// Builds a schedule, computing aggregates from the rows.
    pub fn new(rows: Vec<ScheduleRow>, timeline: Timeline) -> Self {
        let aggregates = RunAggregates::calculate(&rows, &timeline);
        Self {
            rows,
            timeline,
            aggregates,
        }
    }

    /// Finds the row for a process.
    pub fn row_for(&self, process_id: i64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.process_id == process_id)
    }

    /// Process IDs ordered by completion time (ties keep row order).
    pub fn completion_order(&self) -> Vec<i64> {
        let mut rows: Vec<&ScheduleRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.completion_time);
        rows.into_iter().map(|r| r.process_id).collect()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_invariants() {
        let p = Process::new(1, 4, 3).with_priority(2);
        let row = ScheduleRow::new(&p, 5);
        assert_eq!(row.turnaround_time, 9);
        assert_eq!(row.completion_time, 12);
        assert_eq!(row.priority, 2);
    }

    #[test]
    fn test_completed_at_clamps_wait() {
        let p = Process::new(1, 4, 3);
        let row = ScheduleRow::completed_at(&p, 10);
        assert_eq!(row.wait_time, 3);
        assert_eq!(row.completion_time, 10);

        // Completion earlier than possible yields zero wait
        let row = ScheduleRow::completed_at(&p, 5);
        assert_eq!(row.wait_time, 0);
        assert_eq!(row.completion_time, 7);
    }

    #[test]
    fn test_schedule_lookup_and_order() {
        let a = Process::new(1, 5, 0);
        let b = Process::new(2, 2, 0);
        let schedule = Schedule::new(
            vec![ScheduleRow::new(&a, 2), ScheduleRow::new(&b, 0)],
            Timeline::new(),
        );
        assert_eq!(schedule.row_count(), 2);
        assert_eq!(schedule.row_for(1).map(|r| r.completion_time), Some(7));
        assert!(schedule.row_for(99).is_none());
        assert_eq!(schedule.completion_order(), vec![2, 1]);
    }
}
