//! Shortest-job-first.
//!
//! # Algorithm
//!
//! Discrete virtual-time stepping, one time unit per iteration:
//! 1. Among arrived, unfinished processes pick the one with the least
//!    remaining burst (ties: earliest in arrival order).
//! 2. If none is eligible, jump to the next arrival without consuming a tick.
//! 3. Run the pick for one unit; record its completion when it reaches zero.
//!
//! # Complexity
//! O(n * B) where n = processes and B = total burst.

use super::CpuScheduler;
use crate::models::{sorted_by_arrival, Process, Schedule, ScheduleRow, Timeline};

/// Shortest-remaining-burst scheduler.
///
/// Rows are returned in arrival order (stable for equal arrivals).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Sjf {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let processes = sorted_by_arrival(processes);
        let count = processes.len();

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_duration.max(0)).collect();
        let mut rows: Vec<Option<ScheduleRow>> = vec![None; count];
        let mut timeline = Timeline::new();
        let mut completed = 0;
        let mut now: i64 = 0;

        // Nothing to run: done on arrival
        for (i, process) in processes.iter().enumerate() {
            if remaining[i] == 0 {
                rows[i] = Some(ScheduleRow::new(process, 0));
                completed += 1;
            }
        }

        while completed < count {
            let selected = (0..count)
                .filter(|&i| processes[i].arrival_time <= now && remaining[i] > 0)
                .min_by_key(|&i| remaining[i]);

            let Some(i) = selected else {
                let next_arrival = (0..count)
                    .filter(|&i| remaining[i] > 0 && processes[i].arrival_time > now)
                    .map(|i| processes[i].arrival_time)
                    .min();
                match next_arrival {
                    Some(arrival) => {
                        now = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            timeline.tick(processes[i].id, now);
            remaining[i] -= 1;
            now += 1;

            if remaining[i] == 0 {
                rows[i] = Some(ScheduleRow::completed_at(&processes[i], now));
                completed += 1;
            }
        }

        Schedule::new(rows.into_iter().flatten().collect(), timeline)
    }
}
