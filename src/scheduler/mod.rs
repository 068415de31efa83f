//! CPU schedulers and metric evaluation.
//!
//! Provides the three classical single-CPU disciplines behind one
//! [`CpuScheduler`] trait, and schedule quality metrics.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `FcfsScheduler` | no | arrival time, ties by input order |
//! | `SjfScheduler` | no | burst time, then arrival time, then input order |
//! | `RoundRobinScheduler` | yes | FIFO queue, fixed time quantum |
//!
//! Every entry point validates its input, then simulates on a private deep
//! copy of the batch, so the caller's processes are never mutated.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleMetrics;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

use std::fmt::Debug;

use log::info;

use crate::error::SimResult;
use crate::models::{copy_batch, Algorithm, Process, SimulationResult};
use crate::validation::{into_single, validate_batch};

/// A single-CPU scheduling discipline.
pub trait CpuScheduler: Send + Sync + Debug {
    /// The algorithm (with parameters) this scheduler implements.
    fn algorithm(&self) -> Algorithm;

    /// Checks that `processes` can be scheduled. Runs before any copy or
    /// clock advance.
    fn validate(&self, processes: &[Process]) -> SimResult<()> {
        validate_batch(processes).map_err(into_single)
    }

    /// Simulates the discipline on `batch`, setting completion, waiting and
    /// turnaround times of every process.
    ///
    /// The batch must already be validated. Schedulers may reorder it; the
    /// resulting order is the reporting order of the snapshot table.
    fn run_batch(&self, batch: &mut Vec<Process>);

    /// Validates, copies and simulates `processes`, then derives metrics.
    fn schedule(&self, processes: &[Process]) -> SimResult<SimulationResult> {
        self.validate(processes)?;

        let mut batch = copy_batch(processes);
        self.run_batch(&mut batch);

        let metrics = ScheduleMetrics::calculate(&batch)?;
        let algorithm = self.algorithm();
        info!(
            "{algorithm}: {} processes, CPU utilization {:.2}%, avg waiting {:.2}, avg turnaround {:.2}",
            batch.len(),
            metrics.cpu_utilization,
            metrics.avg_waiting_time,
            metrics.avg_turnaround_time
        );
        Ok(SimulationResult::new(algorithm, &batch, metrics))
    }
}

impl Algorithm {
    /// Builds the scheduler for this algorithm.
    ///
    /// # Errors
    /// `InvalidQuantum` for Round-Robin with a quantum <= 0.
    pub fn scheduler(&self) -> SimResult<Box<dyn CpuScheduler>> {
        let scheduler: Box<dyn CpuScheduler> = match *self {
            Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
            Algorithm::Sjf => Box::new(SjfScheduler::new()),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)?),
        };
        Ok(scheduler)
    }
}

/// Runs one algorithm over `processes`.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, Process};
/// use u_cpusched::scheduler::simulate;
///
/// let batch = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
/// let result = simulate(Algorithm::Fcfs, &batch).unwrap();
/// assert_eq!(result.snapshot(2).unwrap().completion_time, 8);
/// assert!((result.metrics.cpu_utilization - 100.0).abs() < 1e-10);
/// ```
pub fn simulate(algorithm: Algorithm, processes: &[Process]) -> SimResult<SimulationResult> {
    algorithm.scheduler()?.schedule(processes)
}

/// Runs FCFS, SJF and Round-Robin (with `quantum`) over the same batch.
///
/// The quantum is checked before any algorithm runs.
pub fn simulate_all(processes: &[Process], quantum: i64) -> SimResult<Vec<SimulationResult>> {
    let schedulers: [Box<dyn CpuScheduler>; 3] = [
        Box::new(FcfsScheduler::new()),
        Box::new(SjfScheduler::new()),
        Box::new(RoundRobinScheduler::new(quantum)?),
    ];
    schedulers.iter().map(|s| s.schedule(processes)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new(1, 0, 6),
            Process::new(2, 1, 2),
            Process::new(3, 2, 4),
            Process::new(4, 12, 3),
        ]
    }

    fn assert_invariants(result: &SimulationResult) {
        for s in &result.snapshots {
            assert_eq!(s.turnaround_time, s.completion_time - s.arrival_time);
            assert_eq!(s.waiting_time, s.turnaround_time - s.burst_time);
            assert!(s.completion_time >= s.arrival_time + s.burst_time);
        }
    }

    #[test]
    fn test_invariants_hold_for_all_algorithms() {
        let batch = sample_batch();
        for quantum in 1..=7 {
            for result in simulate_all(&batch, quantum).unwrap() {
                assert_eq!(result.process_count(), batch.len());
                assert_invariants(&result);
            }
        }
    }

    #[test]
    fn test_caller_batch_untouched() {
        let batch = sample_batch();
        let before = batch.clone();
        simulate(Algorithm::RoundRobin { quantum: 2 }, &batch).unwrap();
        simulate(Algorithm::Fcfs, &batch).unwrap();
        assert_eq!(batch, before);
    }

    #[test]
    fn test_algorithm_builds_scheduler() {
        let s = Algorithm::RoundRobin { quantum: 3 }.scheduler().unwrap();
        assert_eq!(s.algorithm(), Algorithm::RoundRobin { quantum: 3 });
        assert_eq!(Algorithm::Sjf.scheduler().unwrap().algorithm(), Algorithm::Sjf);
    }

    #[test]
    fn test_invalid_quantum_rejected_before_running() {
        let err = simulate(Algorithm::RoundRobin { quantum: 0 }, &sample_batch()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuantum);

        let err = simulate_all(&sample_batch(), -1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_empty_batch_rejected() {
        for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::RoundRobin { quantum: 2 }] {
            let err = simulate(algorithm, &[]).unwrap_err();
            assert_eq!(err.kind, ErrorKind::EmptyBatch);
        }
    }

    #[test]
    fn test_invalid_process_rejected() {
        let batch = vec![Process::new(1, 0, 3), Process::new(1, 2, 0)];
        let err = simulate(Algorithm::Sjf, &batch).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidProcess);
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let err = simulate(Algorithm::Fcfs, &[Process::new(1, i64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidProcess);

        let half = i64::MAX / 2 + 1;
        let batch = vec![Process::new(1, 0, half), Process::new(2, 0, half)];
        let rr = Algorithm::RoundRobin { quantum: i64::MAX };
        assert_eq!(simulate(rr, &batch).unwrap_err().kind, ErrorKind::InvalidProcess);
        assert_eq!(simulate(Algorithm::Sjf, &batch).unwrap_err().kind, ErrorKind::InvalidProcess);
    }

    #[test]
    fn test_large_times_within_range() {
        let third = i64::MAX / 3;
        let batch = vec![
            Process::new(1, 0, third),
            Process::new(2, 0, third),
            Process::new(3, 0, third),
        ];
        for quantum in [third / 2, i64::MAX] {
            for result in simulate_all(&batch, quantum).unwrap() {
                assert_invariants(&result);
                assert_eq!(result.metrics.makespan, 3 * third);
            }
        }
    }

    #[test]
    fn test_simulate_all_labels() {
        let results = simulate_all(&sample_batch(), 2).unwrap();
        let labels: Vec<&str> = results.iter().map(|r| r.algorithm.label()).collect();
        assert_eq!(labels, vec!["FCFS", "SJF", "RR"]);
    }
}
