//! Algorithm selector.
//!
//! A value that names a scheduling discipline and carries its parameters.
//! It labels every [`SimulationResult`](super::SimulationResult) and builds
//! the matching scheduler via `Algorithm::scheduler()`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CPU scheduling discipline with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous CPU time per dequeue.
        quantum: i64,
    },
}

/// Algorithm family, ignoring parameters. Keys per-algorithm result lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Round-Robin.
    RoundRobin,
}

impl Algorithm {
    /// The algorithm family.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Fcfs => AlgorithmKind::Fcfs,
            Algorithm::Sjf => AlgorithmKind::Sjf,
            Algorithm::RoundRobin { .. } => AlgorithmKind::RoundRobin,
        }
    }

    /// Short label ("FCFS", "SJF", "RR").
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }
}

impl AlgorithmKind {
    /// All families in menu order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::RoundRobin,
    ];

    /// Short label ("FCFS", "SJF", "RR").
    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "FCFS",
            AlgorithmKind::Sjf => "SJF",
            AlgorithmKind::RoundRobin => "RR",
        }
    }

    /// Long, human-readable name.
    pub fn title(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "First Come First Served",
            AlgorithmKind::Sjf => "Shortest Job First",
            AlgorithmKind::RoundRobin => "Round Robin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.label()),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Algorithm::Fcfs.label(), "FCFS");
        assert_eq!(Algorithm::Sjf.label(), "SJF");
        assert_eq!(Algorithm::RoundRobin { quantum: 2 }.label(), "RR");
        assert_eq!(Algorithm::RoundRobin { quantum: 2 }.to_string(), "RR(q=2)");
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            Algorithm::RoundRobin { quantum: 4 }.kind(),
            AlgorithmKind::RoundRobin
        );
        assert_eq!(AlgorithmKind::ALL.len(), 3);
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"algorithm":"round_robin","quantum":3}"#);
        let back: Algorithm = serde_json::from_str(r#"{"algorithm":"sjf"}"#).unwrap();
        assert_eq!(back, Algorithm::Sjf);
    }
}
