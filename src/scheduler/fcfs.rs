//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep input order).
//! 2. Run each to completion in that order, advancing the clock to the
//!    process's arrival if the CPU would otherwise sit idle.
//!
//! # Complexity
//! O(n log n).

use log::debug;

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Algorithm, Process};

/// Non-preemptive First-Come-First-Served scheduler.
///
/// Results are reported in dispatch (arrival) order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let batch = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
/// let result = FcfsScheduler::new().schedule(&batch).unwrap();
/// assert_eq!(result.snapshots[0].completion_time, 5);
/// assert_eq!(result.snapshots[1].completion_time, 8);
/// ```
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    engine: RuleEngine,
}

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::Fifo),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn run_batch(&self, batch: &mut Vec<Process>) {
        let order = self.engine.sort_indices(batch);
        let mut sorted: Vec<Process> = order.into_iter().map(|i| batch[i].clone()).collect();

        let mut clock: i64 = 0;
        for process in &mut sorted {
            clock = clock.max(process.arrival_time);
            debug!("FCFS: dispatch process {} at t={clock}", process.id);
            let completion = clock + process.burst_time;
            process.remaining_time = 0;
            process.complete_at(completion);
            clock = completion;
        }

        *batch = sorted;
    }
}
