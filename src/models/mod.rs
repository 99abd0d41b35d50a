//! Scheduling domain models.
//!
//! Provides the input record (`Process`), the Gantt timeline built while a
//! policy runs (`TimeSlice`, `Timeline`), and the per-run result
//! (`ScheduleRow`, `Schedule`).
//!
//! | Type | Role |
//! |------|------|
//! | Process | Static input record |
//! | TimeSlice | One uninterrupted CPU interval |
//! | Timeline | Ordered slices of one run |
//! | ScheduleRow | Derived per-process metrics |
//! | Schedule | Rows + timeline + aggregates |

mod process;
mod schedule;
mod timeline;

pub use process::{sorted_by_arrival, Process};
pub use schedule::{Schedule, ScheduleRow};
pub use timeline::{TimeSlice, Timeline};
