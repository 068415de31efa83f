//! Process record model.
//!
//! A process is the unit of work handed to a CPU scheduler. Its identity
//! and demand (`id`, `arrival_time`, `burst_time`) are fixed at
//! construction; the remaining fields are simulation state written only by
//! the scheduler that owns the current copy.
//!
//! # Time Representation
//! All times are integer ticks of a simulated clock starting at t=0.

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Invariants (after completion)
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
/// - `completion_time >= arrival_time + burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Identifier, unique within a batch.
    pub id: i64,
    /// Clock time at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Scratch state consumed by preemptive runs.
    pub remaining_time: i64,
    /// Clock time at which the last unit of burst finished (0 until then).
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

impl Process {
    /// Creates a fresh process with `remaining_time = burst_time`.
    pub fn new(id: i64, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Restores `remaining_time` to the full burst.
    pub fn reset_remaining_time(&mut self) {
        self.remaining_time = self.burst_time;
    }

    /// Marks the process finished at `completion_time` and derives
    /// turnaround and waiting times.
    pub(crate) fn complete_at(&mut self, completion_time: i64) {
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Whether `remaining_time` has not been consumed.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.remaining_time == self.burst_time
    }
}

/// Deep-copies a batch so a run can mutate it without touching the caller's.
pub fn copy_batch(processes: &[Process]) -> Vec<Process> {
    processes.to_vec()
}

/// Restores `remaining_time` on every process of the batch.
pub fn reset_remaining_time(processes: &mut [Process]) {
    for process in processes {
        process.reset_remaining_time();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process() {
        let p = Process::new(7, 3, 5);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.completion_time, 0);
        assert!(p.is_fresh());
    }

    #[test]
    fn test_complete_at_derives_times() {
        let mut p = Process::new(1, 2, 4);
        p.complete_at(10);
        assert_eq!(p.completion_time, 10);
        assert_eq!(p.turnaround_time, 8);
        assert_eq!(p.waiting_time, 4);
    }

    #[test]
    fn test_copy_batch_is_independent() {
        let original = vec![Process::new(1, 0, 5)];
        let mut copy = copy_batch(&original);
        copy[0].remaining_time = 0;
        copy[0].complete_at(5);
        assert_eq!(original[0].remaining_time, 5);
        assert_eq!(original[0].completion_time, 0);
    }

    #[test]
    fn test_reset_remaining_time() {
        let mut batch = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        batch[0].remaining_time = 1;
        batch[1].remaining_time = 0;
        reset_remaining_time(&mut batch);
        assert!(batch.iter().all(Process::is_fresh));
    }
}
