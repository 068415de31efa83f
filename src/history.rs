//! Result history for comparative reporting.
//!
//! Keeps, per algorithm family, the distinct simulation results seen so
//! far, plus a chronological log of every run's averages for comparison
//! charts.
//!
//! Two results are duplicates when their snapshot tables are equal
//! value-for-value and in the same order. Re-running an algorithm on the
//! same batch therefore stores one instance, not two.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{AlgorithmKind, SimulationResult};

/// One bar group in a comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Algorithm label ("FCFS", "SJF", "RR").
    pub label: String,
    /// Average waiting time of the run.
    pub avg_waiting_time: f64,
    /// Average turnaround time of the run.
    pub avg_turnaround_time: f64,
}

impl From<&SimulationResult> for ComparisonEntry {
    fn from(result: &SimulationResult) -> Self {
        Self {
            label: result.algorithm.label().to_string(),
            avg_waiting_time: result.metrics.avg_waiting_time,
            avg_turnaround_time: result.metrics.avg_turnaround_time,
        }
    }
}

/// Stored results, deduplicated per algorithm family.
///
/// # Example
///
/// ```
/// use u_cpusched::history::ResultStore;
/// use u_cpusched::models::{Algorithm, AlgorithmKind, Process};
/// use u_cpusched::scheduler::simulate;
///
/// let batch = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
/// let mut store = ResultStore::new();
/// assert!(store.record(simulate(Algorithm::Fcfs, &batch).unwrap()));
/// assert!(!store.record(simulate(Algorithm::Fcfs, &batch).unwrap()));
/// assert_eq!(store.instances(AlgorithmKind::Fcfs).len(), 1);
/// assert_eq!(store.comparison().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultStore {
    instances: BTreeMap<AlgorithmKind, Vec<SimulationResult>>,
    runs: Vec<ComparisonEntry>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a run.
    ///
    /// The run is always appended to the comparison log. The result is
    /// stored as a new instance only if no stored instance of the same
    /// algorithm family has an equal snapshot table.
    ///
    /// Returns `true` if the result was stored as a new instance.
    pub fn record(&mut self, result: SimulationResult) -> bool {
        self.runs.push(ComparisonEntry::from(&result));
        add_unique_instance(
            self.instances.entry(result.algorithm.kind()).or_default(),
            result,
        )
    }

    /// Stored instances of one family, oldest first.
    pub fn instances(&self, kind: AlgorithmKind) -> &[SimulationResult] {
        self.instances.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The `number`-th stored instance (1-based) of one family.
    pub fn instance(&self, kind: AlgorithmKind, number: usize) -> Option<&SimulationResult> {
        number
            .checked_sub(1)
            .and_then(|idx| self.instances(kind).get(idx))
    }

    /// Chronological comparison log, one entry per recorded run.
    pub fn comparison(&self) -> &[ComparisonEntry] {
        &self.runs
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Appends `result` to `instances` unless an equal snapshot table is
/// already present. Returns `true` if appended.
pub fn add_unique_instance(instances: &mut Vec<SimulationResult>, result: SimulationResult) -> bool {
    if instances.iter().any(|existing| existing.same_table(&result)) {
        debug!("{}: identical result already stored, skipped", result.algorithm);
        return false;
    }
    instances.push(result);
    true
}
