//! Error type shared by the loader, validation, schedulers and metrics.
//!
//! Every failure carries an [`ErrorKind`] for programmatic matching and a
//! human-readable message. Errors are detected before any simulated clock
//! advance, so a failed call never leaves a half-scheduled batch behind.

use std::fmt;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimulationError>;

/// A simulation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of simulation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The process file does not exist or cannot be opened.
    InputFileMissing,
    /// A line of the process file is not three integers.
    InputFormatError,
    /// Round-Robin time quantum is zero or negative.
    InvalidQuantum,
    /// Scheduling or metrics requested on zero processes.
    EmptyBatch,
    /// A process record violates the data model (negative arrival,
    /// non-positive burst, duplicate id, stale remaining time).
    InvalidProcess,
    /// Metrics requested on a batch whose latest completion time is 0.
    ZeroElapsedTime,
}

impl SimulationError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn empty_batch(operation: &str) -> Self {
        Self::new(
            ErrorKind::EmptyBatch,
            format!("{operation} requested on an empty process batch"),
        )
    }

    pub(crate) fn invalid_quantum(quantum: i64) -> Self {
        Self::new(
            ErrorKind::InvalidQuantum,
            format!("time quantum must be positive, got {quantum}"),
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InputFileMissing => "input file missing",
            ErrorKind::InputFormatError => "input format error",
            ErrorKind::InvalidQuantum => "invalid quantum",
            ErrorKind::EmptyBatch => "empty batch",
            ErrorKind::InvalidProcess => "invalid process",
            ErrorKind::ZeroElapsedTime => "zero elapsed time",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SimulationError {}
