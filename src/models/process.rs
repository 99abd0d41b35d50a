//! Process (input record) model.
//!
//! A process is a unit of CPU work: it arrives at some simulated time and
//! needs a fixed amount of CPU time (its burst) to complete.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer simulated time units relative to t=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: i64,
    /// Time at which the process becomes ready (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_duration: i64,
    /// Scheduling priority (lower = served first). Only the priority policy reads it.
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    ///
    /// Argument order follows the input record layout: id, burst, arrival.
    pub fn new(id: i64, burst_duration: i64, arrival_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Returns a copy of the batch sorted by arrival time.
///
/// The sort is stable, so processes arriving together keep their input order.
pub fn sorted_by_arrival(processes: &[Process]) -> Vec<Process> {
    let mut sorted = processes.to_vec();
    sorted.sort_by_key(|p| p.arrival_time);
    sorted
}
