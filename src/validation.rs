//! Input validation for scheduling runs.
//!
//! Checks a process batch and run parameters before any simulated clock
//! advance. Detects:
//! - Empty batches
//! - Duplicate process IDs
//! - Negative arrival times and non-positive burst times
//! - Batches whose clock would leave the `i64` range
//! - Stale `remaining_time` left over from an earlier preemptive run
//! - Non-positive Round-Robin quanta

use std::collections::HashSet;

use crate::error::{ErrorKind, SimResult, SimulationError};
use crate::models::Process;

/// Validation result carrying every detected issue.
pub type ValidationResult = Result<(), Vec<SimulationError>>;

/// Validates the structural integrity of a process batch.
///
/// Checks:
/// 1. The batch is non-empty (reported alone if violated)
/// 2. No duplicate process IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// The last bound caps every clock value a scheduler can reach, so
/// simulation and metric arithmetic never overflow.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![SimulationError::empty_batch("scheduling")]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(SimulationError::new(
                ErrorKind::InvalidProcess,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(SimulationError::new(
                ErrorKind::InvalidProcess,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(SimulationError::new(
                ErrorKind::InvalidProcess,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(processes).is_none() {
        errors.push(SimulationError::new(
            ErrorKind::InvalidProcess,
            "latest arrival plus total burst time exceeds the representable clock range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the simulated clock: latest arrival plus total burst.
/// `None` on overflow or for an empty batch.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time).max()?;
    processes
        .iter()
        .try_fold(latest, |clock, p| clock.checked_add(p.burst_time))
}

/// Checks that every process still owes its full burst.
///
/// Preemptive runs consume `remaining_time`; the caller must reset it
/// before handing the batch to another preemptive run.
pub fn validate_fresh(processes: &[Process]) -> ValidationResult {
    let errors: Vec<SimulationError> = processes
        .iter()
        .filter(|p| !p.is_fresh())
        .map(|p| {
            SimulationError::new(
                ErrorKind::InvalidProcess,
                format!(
                    "Process {} has remaining time {} but burst time {}; reset it before a preemptive run",
                    p.id, p.remaining_time, p.burst_time
                ),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects a Round-Robin quantum that is zero or negative.
pub fn validate_quantum(quantum: i64) -> SimResult<()> {
    if quantum <= 0 {
        return Err(SimulationError::invalid_quantum(quantum));
    }
    Ok(())
}

/// Folds a list of issues into one error: the first issue's kind with all
/// messages joined.
pub(crate) fn into_single(errors: Vec<SimulationError>) -> SimulationError {
    let kind = errors
        .first()
        .map(|e| e.kind)
        .unwrap_or(ErrorKind::InvalidProcess);
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    SimulationError::new(kind, message)
}
