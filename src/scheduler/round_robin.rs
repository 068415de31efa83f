//! Round-Robin scheduler (preemptive, fixed time quantum).
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with every process, in input order.
//! 2. Dequeue the head and advance the clock to its arrival if needed.
//! 3. Run it for `min(remaining, quantum)`. If work remains, re-enqueue it
//!    at the tail; otherwise record its completion time.
//! 4. Repeat until the queue is empty.
//!
//! Queue admission ignores arrival time: processes that arrive later are
//! present in the queue from t=0, and arrival only matters through the
//! clock advance at dequeue time.
//!
//! # Termination
//! Every dequeue consumes at least one tick of a positive `remaining_time`,
//! so the loop runs at most `sum(burst)` times.

use std::collections::VecDeque;

use log::debug;

use super::CpuScheduler;
use crate::error::SimResult;
use crate::models::{Algorithm, Process};
use crate::validation::{into_single, validate_batch, validate_fresh, validate_quantum};

/// Preemptive Round-Robin scheduler.
///
/// Requires every process to enter with `remaining_time == burst_time`;
/// use [`reset_remaining_time`](crate::models::reset_remaining_time) on a
/// batch that went through an earlier preemptive run. Results are reported
/// in input order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let batch = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
/// let result = RoundRobinScheduler::new(2).unwrap().schedule(&batch).unwrap();
/// assert_eq!(result.snapshot(1).unwrap().completion_time, 8);
/// assert_eq!(result.snapshot(2).unwrap().completion_time, 7);
///
/// assert!(RoundRobinScheduler::new(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time quantum.
    ///
    /// # Errors
    /// `InvalidQuantum` if `quantum <= 0`.
    pub fn new(quantum: i64) -> SimResult<Self> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn validate(&self, processes: &[Process]) -> SimResult<()> {
        validate_batch(processes).map_err(into_single)?;
        validate_fresh(processes).map_err(into_single)
    }

    fn run_batch(&self, batch: &mut Vec<Process>) {
        let mut queue: VecDeque<usize> = (0..batch.len()).collect();
        let mut clock: i64 = 0;

        while let Some(idx) = queue.pop_front() {
            let process = &mut batch[idx];
            clock = clock.max(process.arrival_time);
            let slice = process.remaining_time.min(self.quantum);
            debug!(
                "RR: process {} runs {slice} at t={clock}, {} remaining",
                process.id,
                process.remaining_time - slice
            );

            if process.remaining_time <= self.quantum {
                clock += process.remaining_time;
                process.remaining_time = 0;
            } else {
                clock += self.quantum;
                process.remaining_time -= self.quantum;
                queue.push_back(idx);
            }

            if process.remaining_time == 0 {
                process.complete_at(clock);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::reset_remaining_time;

    fn run(batch: &[Process], quantum: i64) -> Vec<Process> {
        let mut copy = batch.to_vec();
        RoundRobinScheduler::new(quantum).unwrap().run_batch(&mut copy);
        copy
    }

    #[test]
    fn test_two_processes_quantum_two() {
        let out = run(&[Process::new(1, 0, 5), Process::new(2, 0, 3)], 2);
        // 1: 0..2, 2: 2..4, 1: 4..6, 2: 6..7 done, 1: 7..8 done
        assert_eq!(out[0].completion_time, 8);
        assert_eq!(out[1].completion_time, 7);
        assert_eq!(out[0].waiting_time, 3);
        assert_eq!(out[1].waiting_time, 4);
    }

    #[test]
    fn test_remaining_time_fully_consumed() {
        let batch = vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 3, 1),
        ];
        for quantum in 1..=8 {
            let out = run(&batch, quantum);
            assert!(out.iter().all(|p| p.remaining_time == 0));
            assert!(out
                .iter()
                .all(|p| p.completion_time >= p.arrival_time + p.burst_time));
        }
    }

    #[test]
    fn test_large_quantum_degenerates_to_single_pass() {
        let out = run(&[Process::new(1, 0, 3), Process::new(2, 0, 2)], 10);
        assert_eq!(out[0].completion_time, 3);
        assert_eq!(out[1].completion_time, 5);
    }

    #[test]
    fn test_queue_not_gated_by_arrival() {
        let out = run(&[Process::new(1, 0, 2), Process::new(2, 5, 2)], 1);
        // 1: 0..1, clock jumps to 5 for 2: 5..6, 1: 6..7 done, 2: 7..8 done
        assert_eq!(out[0].completion_time, 7);
        assert_eq!(out[0].waiting_time, 5);
        assert_eq!(out[1].completion_time, 8);
        assert_eq!(out[1].waiting_time, 1);
    }

    #[test]
    fn test_single_process() {
        let out = run(&[Process::new(1, 3, 5)], 2);
        assert_eq!(out[0].completion_time, 8);
        assert_eq!(out[0].waiting_time, 0);
    }

    #[test]
    fn test_invalid_quantum() {
        assert_eq!(
            RoundRobinScheduler::new(0).unwrap_err().kind,
            ErrorKind::InvalidQuantum
        );
        assert_eq!(
            RoundRobinScheduler::new(-2).unwrap_err().kind,
            ErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_stale_remaining_time_rejected() {
        let mut batch = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        batch[0].remaining_time = 1;
        let scheduler = RoundRobinScheduler::new(2).unwrap();
        let err = scheduler.schedule(&batch).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidProcess);

        reset_remaining_time(&mut batch);
        assert!(scheduler.schedule(&batch).is_ok());
    }

    #[test]
    fn test_repeated_runs_identical() {
        let batch = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let scheduler = RoundRobinScheduler::new(2).unwrap();
        let first = scheduler.schedule(&batch).unwrap();
        let second = scheduler.schedule(&batch).unwrap();
        assert_eq!(first, second);
    }
}
