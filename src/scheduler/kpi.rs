//! Schedule quality metrics.
//!
//! Computes aggregate performance indicators from a completed batch.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | CPU Utilization | 100 * sum(burst) / max(completion) |
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Makespan | Latest completion time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SimResult, SimulationError};
use crate::models::Process;

/// Aggregate performance indicators of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Share of elapsed time spent running processes, in percent.
    pub cpu_utilization: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of burst times.
    pub total_burst_time: i64,
}

impl ScheduleMetrics {
    /// Computes metrics from a completed batch.
    ///
    /// # Errors
    /// - `EmptyBatch` if `processes` is empty.
    /// - `ZeroElapsedTime` if no process completed after t=0.
    pub fn calculate(processes: &[Process]) -> SimResult<Self> {
        if processes.is_empty() {
            return Err(SimulationError::empty_batch("metrics"));
        }

        let makespan = processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);
        if makespan <= 0 {
            return Err(SimulationError::new(
                ErrorKind::ZeroElapsedTime,
                "latest completion time is 0; the batch has not been scheduled",
            ));
        }

        // Per-process times fit in i64 but n of them may not.
        let total_burst: i128 = processes.iter().map(|p| i128::from(p.burst_time)).sum();
        let total_waiting: i128 = processes.iter().map(|p| i128::from(p.waiting_time)).sum();
        let total_turnaround: i128 = processes
            .iter()
            .map(|p| i128::from(p.turnaround_time))
            .sum();
        let count = processes.len() as f64;

        Ok(Self {
            cpu_utilization: total_burst as f64 / makespan as f64 * 100.0,
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            makespan,
            total_burst_time: i64::try_from(total_burst).unwrap_or(i64::MAX),
        })
    }
}
