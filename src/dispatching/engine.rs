//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence; a later rule is consulted only when every
//! earlier rule ties. Processes that tie on all rules keep input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// A composable, sequential rule engine.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
/// use u_cpusched::models::Process;
///
/// let engine = RuleEngine::new().with_rule(rules::Fifo);
/// let batch = vec![Process::new(1, 4, 1), Process::new(2, 0, 9)];
/// assert_eq!(engine.select_best(&batch), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules every process ties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. It is consulted only when every rule added before
    /// it ties, so the first rule is the primary criterion and later ones
    /// break its ties.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Scores of a process under every rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    /// Compares two processes; `Less` means `a` is dispatched first.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Returns indices into `processes`, in dispatch order.
    ///
    /// The sort is stable: full ties keep input order.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Position of the process to dispatch next, or `None` if empty.
    ///
    /// Among full ties the earliest position wins.
    pub fn select_best<'a, I>(&self, processes: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a Process>,
    {
        let mut best: Option<(usize, &Process)> = None;
        for (pos, process) in processes.into_iter().enumerate() {
            match best {
                Some((_, b)) if self.compare(process, b) != Ordering::Less => {}
                _ => best = Some((pos, process)),
            }
        }
        best.map(|(pos, _)| pos)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_fifo_ordering_is_stable() {
        let batch = vec![
            Process::new(1, 4, 1),
            Process::new(2, 0, 5),
            Process::new(3, 0, 3),
        ];
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        // 2 and 3 tie on arrival → input order
        assert_eq!(engine.sort_indices(&batch), vec![1, 2, 0]);
    }

    #[test]
    fn test_spt_with_fifo_tie_breaker() {
        let batch = vec![
            Process::new(1, 5, 4),
            Process::new(2, 1, 4),
            Process::new(3, 9, 2),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::Fifo);
        // 3 shortest; 1 and 2 tie on burst → 2 arrived earlier
        assert_eq!(engine.sort_indices(&batch), vec![2, 1, 0]);
    }

    #[test]
    fn test_select_best_prefers_first_on_full_tie() {
        let batch = vec![Process::new(10, 0, 3), Process::new(20, 0, 3)];
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::Fifo);
        assert_eq!(engine.select_best(&batch), Some(0));
    }

    #[test]
    fn test_empty_input() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        let empty: Vec<Process> = Vec::new();
        assert!(engine.sort_indices(&empty).is_empty());
        assert!(engine.select_best(&empty).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::Fifo);
        let scores = engine.evaluate(&Process::new(1, 6, 2));
        assert_eq!(scores, vec![2, 6]);
        assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let batch = vec![Process::new(1, 9, 9), Process::new(2, 0, 1)];
        let engine = RuleEngine::new();
        assert_eq!(engine.sort_indices(&batch), vec![0, 1]);
        assert_eq!(engine.select_best(&batch), Some(0));
    }
}
