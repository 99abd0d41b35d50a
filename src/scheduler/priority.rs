//! Preemptive static-priority scheduler.
//!
//! # Algorithm
//!
//! At every time unit:
//! 1. Push every process that has arrived by now onto a min-heap keyed by
//!    `priority` (lower value = served first).
//! 2. If the heap is empty, jump to the next arrival, or stop if none remain.
//! 3. Pop the head, run it for one unit, then either record its completion
//!    or push it back.
//!
//! Preemption is driven only by the static priority; remaining burst is
//! never consulted. Equal priorities alternate in heap insertion order.

use super::{CpuScheduler, MinHeap};
use crate::models::{sorted_by_arrival, Process, Schedule, ScheduleRow, Timeline};

/// Priority-preemptive scheduler.
///
/// Rows are returned in arrival order (stable for equal arrivals).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl PriorityScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let processes = sorted_by_arrival(processes);
        let count = processes.len();

        // (index into `processes`, remaining burst)
        let mut ready: MinHeap<i64, (usize, i64)> = MinHeap::new();
        let mut rows: Vec<Option<ScheduleRow>> = vec![None; count];
        let mut timeline = Timeline::new();
        let mut inserted = 0;
        let mut now = processes.first().map(|p| p.arrival_time).unwrap_or(0);

        loop {
            while inserted < count && processes[inserted].arrival_time <= now {
                let process = &processes[inserted];
                if process.burst_duration > 0 {
                    ready.push(process.priority, (inserted, process.burst_duration));
                } else {
                    rows[inserted] = Some(ScheduleRow::new(process, 0));
                }
                inserted += 1;
            }

            let Some((priority, (index, remaining))) = ready.pop() else {
                if inserted < count {
                    now = processes[inserted].arrival_time;
                    continue;
                }
                break;
            };

            timeline.tick(processes[index].id, now);
            now += 1;

            let remaining = remaining - 1;
            if remaining == 0 {
                rows[index] = Some(ScheduleRow::completed_at(&processes[index], now));
            } else {
                ready.push(priority, (index, remaining));
            }
        }

        Schedule::new(rows.into_iter().flatten().collect(), timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;

    #[test]
    fn test_priority_lower_value_preempts() {
        let batch = vec![
            Process::new(1, 4, 0).with_priority(2),
            Process::new(2, 2, 0).with_priority(1),
        ];
        let schedule = PriorityScheduler::new().schedule(&batch);

        let p2 = schedule.row_for(2).unwrap();
        assert_eq!(p2.completion_time, 2);
        assert_eq!(p2.wait_time, 0);

        let p1 = schedule.row_for(1).unwrap();
        assert_eq!(p1.completion_time, 6);
        assert_eq!(p1.wait_time, 2);
        assert_eq!(p1.turnaround_time, 6);

        assert_eq!(
            schedule.timeline.slices(),
            &[TimeSlice::new(2, 0, 2), TimeSlice::new(1, 2, 6)]
        );
    }

    #[test]
    fn test_priority_arrival_preempts_running() {
        let batch = vec![
            Process::new(1, 5, 0).with_priority(3),
            Process::new(2, 2, 2).with_priority(0),
        ];
        let schedule = PriorityScheduler::new().schedule(&batch);
        assert_eq!(
            schedule.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(1, 4, 7)
            ]
        );
        assert_eq!(schedule.row_for(1).map(|r| r.wait_time), Some(2));
    }

    #[test]
    fn test_priority_ignores_remaining_burst() {
        // SRTF would pick 2; static priority keeps 1
        let batch = vec![
            Process::new(1, 6, 0).with_priority(0),
            Process::new(2, 1, 0).with_priority(5),
        ];
        let schedule = PriorityScheduler::new().schedule(&batch);
        assert_eq!(schedule.completion_order(), vec![1, 2]);
        assert_eq!(schedule.row_for(2).map(|r| r.wait_time), Some(6));
    }

    #[test]
    fn test_priority_equal_priorities_alternate() {
        let batch = vec![Process::new(1, 2, 0), Process::new(2, 2, 0)];
        let schedule = PriorityScheduler::new().schedule(&batch);
        let pids: Vec<i64> = schedule.timeline.slices().iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![1, 2, 1, 2]);
        assert_eq!(schedule.row_for(1).map(|r| r.completion_time), Some(3));
        assert_eq!(schedule.row_for(2).map(|r| r.completion_time), Some(4));
    }

    #[test]
    fn test_priority_idle_gap_and_late_start() {
        let batch = vec![Process::new(1, 1, 3), Process::new(2, 2, 8)];
        let schedule = PriorityScheduler::new().schedule(&batch);
        assert_eq!(
            schedule.timeline.slices(),
            &[TimeSlice::new(1, 3, 4), TimeSlice::new(2, 8, 10)]
        );
        assert_eq!(schedule.aggregates.last_completion, 10);
        assert!((schedule.aggregates.throughput - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_priority_rows_in_arrival_order() {
        let batch = vec![
            Process::new(1, 1, 4).with_priority(0),
            Process::new(2, 3, 0).with_priority(1),
        ];
        let schedule = PriorityScheduler::new().schedule(&batch);
        let ids: Vec<i64> = schedule.rows.iter().map(|r| r.process_id).collect();
        assert_eq!(ids, vec![2, 1]);
        // Input untouched
        assert_eq!(batch[0].id, 1);
    }

    #[test]
    fn test_priority_empty_batch() {
        let schedule = PriorityScheduler::new().schedule(&[]);
        assert_eq!(schedule.row_count(), 0);
        assert!(schedule.timeline.is_empty());
    }
}
