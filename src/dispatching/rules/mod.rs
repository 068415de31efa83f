//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First In, First Out.
///
/// Prioritizes processes that arrived earlier. The ordering behind FCFS.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with the shortest total burst. Minimizes mean
/// waiting time when every process is available at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }
}
