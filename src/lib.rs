//! CPU process scheduling simulator.
//!
//! Runs a fixed batch of processes through classical scheduling policies
//! and reports, per policy, each process's wait, turnaround, and completion
//! time, the aggregate averages and throughput, and a Gantt timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimeSlice`, `Timeline`,
//!   `ScheduleRow`, `Schedule`
//! - **`scheduler`**: Policies (`Fcfs`, `Sjf`, `PriorityScheduler`), the
//!   closed `Policy` set, `RunAggregates`, and the `MinHeap` ready queue
//! - **`validation`**: Batch integrity checks (duplicate IDs, bad bursts)
//! - **`input`**: Delimited process-list loader
//! - **`report`**: Text and JSON rendering
//! - **`config`**: Run options and command-line parsing
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{CpuScheduler, Sjf};
//!
//! let batch = vec![Process::new(1, 5, 0), Process::new(2, 2, 0)];
//! let schedule = Sjf::new().schedule(&batch);
//! assert_eq!(schedule.row_for(2).map(|r| r.completion_time), Some(2));
//! assert_eq!(schedule.row_for(1).map(|r| r.completion_time), Some(7));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

mod error;

pub use error::{Error, ErrorKind, Result};
