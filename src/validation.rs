//! Input validation for process batches.
//!
//! Checks the structural invariants every policy relies on before any
//! scheduling happens. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst durations
//! - Simulated times that would overflow `i64`
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or less than none).
    NonPositiveBurst,
    /// Arrival plus burst, or the whole batch's horizon, exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every arrival time is >= 0
/// 3. Every burst duration is > 0
/// 4. `arrival + burst` fits in `i64` for every process, and so does the
///    horizon `max(arrival) + sum(burst)` that bounds every policy's clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut total_burst: Option<i64> = Some(0);
    let mut latest_arrival: i64 = 0;

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at negative time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst {}", p.id, p.burst_duration),
            ));
        }

        if p.arrival_time.checked_add(p.burst_duration).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!("Process {} finishes beyond the representable time", p.id),
            ));
        }

        total_burst = total_burst.and_then(|total| total.checked_add(p.burst_duration.max(0)));
        latest_arrival = latest_arrival.max(p.arrival_time);
    }

    if total_burst
        .and_then(|total| total.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Batch horizon (latest arrival + total burst) exceeds the representable time",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
