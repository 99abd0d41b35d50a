//! Result rendering.
//!
//! Text output, per policy and in reporting order:
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |
//! 0	5	7
//!
//! Schedule table
//! +----+----------+-- ...
//! ```
//!
//! A policy without an implementation prints only its banner.

mod table;

pub use table::Table;

use std::io::{self, Write};

use crate::models::{Schedule, Timeline};
use crate::scheduler::{PolicyOutcome, PolicyReport, RunAggregates};

const GANTT_CELL: usize = 8;

/// Writes every report as text.
pub fn render_text<W: Write>(w: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    for report in reports {
        write_title(w, report.title)?;
        if let PolicyOutcome::Completed(schedule) = &report.outcome {
            write_schedule(w, schedule)?;
        }
    }
    w.flush()
}

/// Writes every report as one pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, reports)?;
    writeln!(w)?;
    w.flush()
}

/// Writes the banner above a policy's section.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt chart: one PID cell per slice, then start markers
/// separated by tabs and the final stop time.
pub fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in timeline.slices() {
        let pid = slice.pid.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    let slices = timeline.slices();
    for (i, slice) in slices.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == slices.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Writes the per-process table with the aggregates footer.
pub fn write_table<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "Schedule table")?;
    let mut table = Table::new(&[
        "ID",
        "Priority",
        "Burst",
        "Arrival",
        "Wait",
        "Turnaround",
        "Exit",
    ]);
    for row in &schedule.rows {
        table = table.row(vec![
            row.process_id.to_string(),
            row.priority.to_string(),
            row.burst_duration.to_string(),
            row.arrival_time.to_string(),
            row.wait_time.to_string(),
            row.turnaround_time.to_string(),
            row.completion_time.to_string(),
        ]);
    }
    table.footer(footer(&schedule.aggregates)).render(w)
}

fn write_schedule<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    write_gantt(w, &schedule.timeline)?;
    write_table(w, schedule)
}

fn footer(aggregates: &RunAggregates) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("Average\n{:.2}", aggregates.average_wait),
        format!("Average\n{:.2}", aggregates.average_turnaround),
        format!("Throughput\n{:.2}/t", aggregates.throughput),
    ]
}
