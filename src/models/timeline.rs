//! Gantt timeline model.
//!
//! A timeline is the ordered sequence of contiguous intervals during which
//! a single process owns the CPU. Under preemptive policies a process may
//! own several non-adjacent slices.

use serde::{Deserialize, Serialize};

/// One contiguous interval `[start, stop)` of CPU ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Owning process ID.
    pub pid: i64,
    /// Start time.
    pub start: i64,
    /// Stop time (exclusive).
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(pid: i64, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Accumulates time slices as a scheduler advances simulated time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a whole run `[start, stop)` for `pid`.
    ///
    /// Merges into the last slice when it belongs to the same process and
    /// ends exactly at `start`.
    pub fn push(&mut self, pid: i64, start: i64, stop: i64) {
        match self.slices.last_mut() {
            Some(last) if last.pid == pid && last.stop == start => last.stop = stop,
            _ => self.slices.push(TimeSlice::new(pid, start, stop)),
        }
    }

    /// Records one tick of execution for `pid` starting at `at`.
    #[inline]
    pub fn tick(&mut self, pid: i64, at: i64) {
        self.push(pid, at, at + 1);
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Slices owned by a given process.
    pub fn slices_for(&self, pid: i64) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
