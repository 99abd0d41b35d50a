//! First-come, first-served.
//!
//! Processes run to completion, one after another, in the order given.
//! The caller is responsible for passing the batch in arrival order.

use serde::{Deserialize, Serialize};

use super::CpuScheduler;
use crate::models::{Process, Schedule, ScheduleRow, Timeline};

/// How FCFS derives each process's wait time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FcfsWaitMode {
    /// `wait = max(0, clock - arrival)` for every process; the clock skips
    /// idle gaps so that they do not leak into later waits.
    #[default]
    Corrected,
    /// Per-row waits match the historical tool: wait is recomputed only
    /// when `arrival > 0` (otherwise the previous value carries over), it is
    /// not clamped, and the clock is the plain running sum of bursts.
    ///
    /// Aggregates are not legacy: throughput divides by the latest
    /// completion across all rows, while the historical tool used whichever
    /// row came last and could divide by zero or a negative time.
    Legacy,
}

/// First-come, first-served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs {
    wait_mode: FcfsWaitMode,
}

impl Fcfs {
    /// Creates a scheduler in corrected mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wait-time mode.
    pub fn with_wait_mode(mut self, wait_mode: FcfsWaitMode) -> Self {
        self.wait_mode = wait_mode;
        self
    }
}

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        if self.wait_mode == FcfsWaitMode::Legacy {
            log::warn!(target: "fcfs", "legacy wait mode: waits may carry over or go negative");
        }

        let mut rows = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;
        let mut wait: i64 = 0;

        for process in processes {
            match self.wait_mode {
                FcfsWaitMode::Corrected => {
                    clock = clock.max(process.arrival_time);
                    wait = clock - process.arrival_time;
                }
                FcfsWaitMode::Legacy => {
                    if process.arrival_time > 0 {
                        wait = clock - process.arrival_time;
                    }
                }
            }

            let start = process.arrival_time + wait;
            clock += process.burst_duration;
            timeline.push(process.id, start, clock);
            rows.push(ScheduleRow::new(process, wait));
        }

        Schedule::new(rows, timeline)
    }
}
