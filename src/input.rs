//! Delimited process-list loader.
//!
//! Reads header-less CSV records of the form
//! `ProcessID,BurstDuration,ArrivalTime[,Priority]`, one per line.
//! Fields may be quoted and are trimmed; blank lines are skipped. Each
//! record is judged on its own, so 3- and 4-field records may be mixed.
//! Any malformed record fails the whole load; nothing partial is returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, ErrorKind, Result};
use crate::models::Process;

const FIELD_NAMES: [&str; 4] = ["process ID", "burst duration", "arrival time", "priority"];

/// Opens `path` and loads every process in it.
pub fn open(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| {
        Error::new(
            ErrorKind::Open,
            format!("failed to open {}: {error}", path.display()),
        )
    })?;
    log::info!(target: "input", "Reading processes from {}", path.display());
    load_processes(file)
}

/// Parses every record from `reader`.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut processes = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| {
            let kind = if error.is_io_error() {
                ErrorKind::Read
            } else {
                ErrorKind::Parse
            };
            Error::new(kind, format!("failed to read input: {error}"))
        })?;
        // Whitespace-only lines come through as one empty field
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 1);
        processes.push(parse_record(&record, line)?);
    }

    log::debug!(target: "input", "Loaded {} processes", processes.len());
    Ok(processes)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Process> {
    if !(3..=4).contains(&record.len()) {
        return Err(Error::new(
            ErrorKind::Parse,
            format!("line {line}: expected 3 or 4 fields, found {}", record.len()),
        ));
    }

    let values = record
        .iter()
        .enumerate()
        .map(|(i, field)| parse_field(field, FIELD_NAMES[i], line))
        .collect::<Result<Vec<i64>>>()?;

    let process = Process::new(values[0], values[1], values[2]);
    Ok(match values.get(3) {
        Some(&priority) => process.with_priority(priority),
        None => process,
    })
}

fn parse_field(field: &str, name: &str, line: u64) -> Result<i64> {
    field.parse::<i64>().map_err(|error| {
        Error::new(
            ErrorKind::Parse,
            format!("line {line}: invalid {name} {field:?}: {error}"),
        )
    })
}
