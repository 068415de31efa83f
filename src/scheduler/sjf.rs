//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Among all processes not yet scheduled, pick the one with the
//!    smallest burst time; ties by earlier arrival, then input order.
//! 2. Advance the clock to its arrival if needed and run it to completion.
//! 3. Repeat until every process has run.
//!
//! Selection is not gated by `arrival_time <= clock`: a process that has
//! not arrived yet can be picked ahead of one that is already waiting, in
//! which case the CPU idles until it arrives. This departs from textbook
//! SJF, which only considers arrived processes.
//!
//! # Complexity
//! O(n^2).

use log::debug;

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Algorithm, Process};

/// Non-preemptive Shortest-Job-First scheduler.
///
/// Results are reported in input order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, SjfScheduler};
///
/// let batch = vec![Process::new(1, 0, 8), Process::new(2, 0, 4), Process::new(3, 0, 2)];
/// let result = SjfScheduler::new().schedule(&batch).unwrap();
/// assert_eq!(result.completion_order(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    engine: RuleEngine,
}

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::Spt)
                .with_rule(rules::Fifo),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for SjfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn run_batch(&self, batch: &mut Vec<Process>) {
        let mut pending: Vec<usize> = (0..batch.len()).collect();
        let mut clock: i64 = 0;

        loop {
            let Some(pos) = self.engine.select_best(pending.iter().map(|&i| &batch[i])) else {
                break;
            };
            let process = &mut batch[pending.remove(pos)];
            clock = clock.max(process.arrival_time);
            debug!("SJF: dispatch process {} at t={clock}", process.id);
            let completion = clock + process.burst_time;
            process.remaining_time = 0;
            process.complete_at(completion);
            clock = completion;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(batch: &[Process]) -> Vec<Process> {
        let mut copy = batch.to_vec();
        SjfScheduler::new().run_batch(&mut copy);
        copy
    }

    #[test]
    fn test_shortest_first() {
        let out = run(&[
            Process::new(1, 0, 8),
            Process::new(2, 0, 4),
            Process::new(3, 0, 2),
        ]);
        // Reported in input order
        assert_eq!(out[0].id, 1);
        assert_eq!(out[2].completion_time, 2);
        assert_eq!(out[1].completion_time, 6);
        assert_eq!(out[0].completion_time, 14);
        assert_eq!(out[0].waiting_time, 6);
    }

    #[test]
    fn test_equal_burst_breaks_by_arrival() {
        let out = run(&[Process::new(1, 3, 4), Process::new(2, 1, 4)]);
        // 2 first: waits until 1, runs 1..5; 1 runs 5..9
        assert_eq!(out[1].completion_time, 5);
        assert_eq!(out[0].completion_time, 9);
        assert_eq!(out[0].waiting_time, 2);
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let out = run(&[Process::new(7, 0, 3), Process::new(5, 0, 3)]);
        assert_eq!(out[0].completion_time, 3);
        assert_eq!(out[1].completion_time, 6);
    }

    #[test]
    fn test_selection_not_gated_by_arrival() {
        // 2 is shorter but arrives later; it still runs first and the CPU
        // idles until t=10.
        let out = run(&[Process::new(1, 0, 5), Process::new(2, 10, 1)]);
        assert_eq!(out[1].completion_time, 11);
        assert_eq!(out[0].completion_time, 16);
        assert_eq!(out[0].waiting_time, 11);
    }

    #[test]
    fn test_single_process() {
        let out = run(&[Process::new(1, 4, 3)]);
        assert_eq!(out[0].completion_time, 7);
        assert_eq!(out[0].waiting_time, 0);
    }
}
