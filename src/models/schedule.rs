//! Simulation result model.
//!
//! A simulation result is the terminal state of one scheduler run: an
//! ordered table of per-process snapshots plus aggregate metrics. It is
//! immutable once produced.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process};
use crate::scheduler::ScheduleMetrics;

/// Terminal values of one process after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    /// Process identifier.
    pub id: i64,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Completion time.
    pub completion_time: i64,
    /// Waiting time.
    pub waiting_time: i64,
    /// Turnaround time.
    pub turnaround_time: i64,
}

impl From<&Process> for ProcessSnapshot {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            completion_time: p.completion_time,
            waiting_time: p.waiting_time,
            turnaround_time: p.turnaround_time,
        }
    }
}

/// Outcome of one scheduler run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm (and parameters) that produced this result.
    pub algorithm: Algorithm,
    /// Per-process terminal values, in the order the scheduler reports them.
    pub snapshots: Vec<ProcessSnapshot>,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

impl SimulationResult {
    /// Builds a result from a completed batch.
    pub(crate) fn new(algorithm: Algorithm, processes: &[Process], metrics: ScheduleMetrics) -> Self {
        Self {
            algorithm,
            snapshots: processes.iter().map(ProcessSnapshot::from).collect(),
            metrics,
        }
    }

    /// Whether both results have identical snapshot tables (same values,
    /// same order). Metrics and algorithm parameters are not compared.
    pub fn same_table(&self, other: &SimulationResult) -> bool {
        self.snapshots == other.snapshots
    }

    /// Finds the snapshot for a process id.
    pub fn snapshot(&self, id: i64) -> Option<&ProcessSnapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    /// Process ids in completion order (ties keep table order).
    pub fn completion_order(&self) -> Vec<i64> {
        let mut ordered: Vec<&ProcessSnapshot> = self.snapshots.iter().collect();
        ordered.sort_by_key(|s| s.completion_time);
        ordered.into_iter().map(|s| s.id).collect()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.snapshots.len()
    }
}
