//! Random workload generation.
//!
//! Builds reproducible process batches from a seed, for experiments and
//! for producing sample input files.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SimResult, SimulationError};
use crate::models::Process;

/// Seeded generator of random process batches.
///
/// Ids run `1..=count`; arrival times are drawn from `0..=max_arrival`
/// and burst times from `1..=max_burst`.
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(42).with_count(5).with_max_burst(10);
/// let batch = generator.generate().unwrap();
/// assert_eq!(batch.len(), 5);
/// assert_eq!(batch, generator.generate().unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// RNG seed.
    pub seed: u64,
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time.
    pub max_arrival: i64,
    /// Largest burst time.
    pub max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator with 5 processes, arrivals in 0..=10 and bursts
    /// in 1..=10.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 5,
            max_arrival: 10,
            max_burst: 10,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the largest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Generates a batch.
    ///
    /// # Errors
    /// `InvalidProcess` if `max_arrival < 0` or `max_burst < 1`.
    pub fn generate(&self) -> SimResult<Vec<Process>> {
        if self.max_arrival < 0 || self.max_burst < 1 {
            return Err(SimulationError::new(
                ErrorKind::InvalidProcess,
                format!(
                    "workload ranges must satisfy max_arrival >= 0 and max_burst >= 1, got {} and {}",
                    self.max_arrival, self.max_burst
                ),
            ));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        Ok((1..=self.count as i64)
            .map(|id| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(1..=self.max_burst);
                Process::new(id, arrival, burst)
            })
            .collect())
    }
}
