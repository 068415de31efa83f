//! Dispatching rules and rule engine for process selection.
//!
//! A dispatching rule scores a process; the rule engine combines rules
//! into a total order used by the non-preemptive schedulers to decide
//! which process runs next.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! // SJF ordering: shortest burst first, earlier arrival on ties.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_rule(rules::Fifo);
//!
//! let batch = vec![Process::new(1, 0, 8), Process::new(2, 0, 4), Process::new(3, 0, 2)];
//! assert_eq!(engine.sort_indices(&batch), vec![2, 1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Equal scores are ties, resolved by
/// the next rule in the engine and finally by input order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SPT").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
