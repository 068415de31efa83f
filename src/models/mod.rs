//! CPU scheduling domain models.
//!
//! Provides the data types threaded through every scheduler: the mutable
//! process record, the algorithm selector, and the immutable per-run
//! result.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term | Table column |
//! |------------|---------------|--------------|
//! | Process | PCB / job | Process ID, Arrival Time, Burst Time |
//! | ProcessSnapshot | Gantt row | + Completion, Waiting, Turnaround Time |
//! | SimulationResult | Schedule | table + CPU utilization, averages |

mod algorithm;
mod process;
mod schedule;

pub use algorithm::{Algorithm, AlgorithmKind};
pub use process::{copy_batch, reset_remaining_time, Process};
pub use schedule::{ProcessSnapshot, SimulationResult};
