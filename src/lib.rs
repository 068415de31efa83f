//! CPU scheduling simulator.
//!
//! Simulates a single CPU under three classical disciplines and reports
//! per-process and aggregate performance.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Algorithm`, `ProcessSnapshot`,
//!   `SimulationResult`
//! - **`dispatching`**: Selection rules (`Fifo`, `Spt`) and the sequential
//!   `RuleEngine`
//! - **`scheduler`**: `FcfsScheduler`, `SjfScheduler`,
//!   `RoundRobinScheduler` and `ScheduleMetrics`
//! - **`validation`**: Batch and parameter checks run before any clock
//!   advance
//! - **`history`**: Per-algorithm deduplicated result store and comparison
//!   log
//! - **`input`**: Process file loader
//! - **`report`**: Text tables and comparison charts
//! - **`workload`**: Seeded random batch generator
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Algorithm, Process};
//! use u_cpusched::scheduler::simulate;
//!
//! let batch = vec![Process::new(1, 0, 8), Process::new(2, 0, 4), Process::new(3, 0, 2)];
//! let result = simulate(Algorithm::Sjf, &batch).unwrap();
//! assert_eq!(result.completion_order(), vec![3, 2, 1]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod history;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, SimResult, SimulationError};
