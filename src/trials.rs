//! Randomized trial harness for the boundary search.
//!
//! Runs many independent trials, each against a private pool whose boundary
//! is drawn uniformly at random, and aggregates query counts and a
//! correctness verdict. Deterministic given a seed, so a failing report can
//! be reproduced exactly.
//!
//! A trial is correct when the search returns the hidden boundary;
//! `ProbeBudgetExceeded` is counted separately as a legitimate reported
//! failure, not a correctness violation.

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;
use crate::pool::ResourcePool;
use crate::search::{locate, Outcome};

/// Deterministic RNG for drawing trial boundaries.
///
/// Uses xorshift64* for speed and stable output across platforms. Not
/// cryptographically secure and must never be used for secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRng {
    state: u64,
}

impl TrialRng {
    /// Create a new RNG. A zero seed is remapped to a non-zero constant to
    /// avoid the xorshift lockup state.
    pub fn new(seed: u64) -> Self {
        let s = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: s }
    }

    /// Next 64-bit value from xorshift64*.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a value in `[lo, hi_exclusive)`.
    #[inline(always)]
    pub fn gen_range(&mut self, lo: u64, hi_exclusive: u64) -> u64 {
        debug_assert!(lo < hi_exclusive);
        let span = hi_exclusive - lo;
        lo + (self.next_u64() % span)
    }
}

/// Trial run parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Resources per pool.
    pub pool_size: usize,
    /// Independent trials to run.
    pub iterations: u64,
    /// RNG seed for boundary draws.
    pub seed: u64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            pool_size: 100,
            iterations: 100,
            seed: 0,
        }
    }
}

/// Aggregated results of a trial run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrialReport {
    /// Resources per pool, echoed from the config.
    pub pool_size: usize,
    /// Trials run, echoed from the config.
    pub iterations: u64,
    /// Fewest probes any trial issued.
    pub minimum: u64,
    /// Most probes any trial issued.
    pub maximum: u64,
    /// Mean probes per trial.
    pub average: f64,
    /// Trials that ended in a reported `ProbeBudgetExceeded`.
    pub budget_failures: u64,
    /// Whether every completed trial returned the hidden boundary and no
    /// trial failed in any way other than the reported budget failure.
    pub correct: bool,
}

/// Runs `config.iterations` independent searches and aggregates the probe
/// counts.
///
/// Each trial owns a private pool; pools are never shared or reused, since
/// the probe budget is per-pool state. Boundaries are drawn uniformly from
/// `[0, pool_size)`, matching the production scenario where at least one
/// resource is always free.
pub fn run_trials(config: &TrialConfig) -> TrialReport {
    let mut rng = TrialRng::new(config.seed);

    let mut minimum = u64::MAX;
    let mut maximum = 0u64;
    let mut total = 0u64;
    let mut budget_failures = 0u64;
    let mut correct = true;

    for _ in 0..config.iterations {
        let boundary = if config.pool_size == 0 {
            0
        } else {
            rng.gen_range(0, config.pool_size as u64) as usize
        };
        let mut pool = ResourcePool::from_parts(config.pool_size, boundary);

        match locate(&mut pool) {
            Ok(Outcome::FirstFree(idx)) => {
                if idx != boundary {
                    correct = false;
                }
            }
            Ok(Outcome::PoolEmpty) => {
                if config.pool_size != 0 {
                    correct = false;
                }
            }
            // Boundaries are drawn strictly below pool_size, so a non-empty
            // pool always has a free resource.
            Ok(Outcome::NoFreeResource) => correct = false,
            Err(SearchError::ProbeBudgetExceeded { .. }) => budget_failures += 1,
            Err(_) => correct = false,
        }

        let stats = pool.stats();
        let probes = stats.busy_observations + stats.free_observations;
        minimum = minimum.min(probes);
        maximum = maximum.max(probes);
        total += probes;
    }

    let (minimum, average) = if config.iterations == 0 {
        (0, 0.0)
    } else {
        (minimum, total as f64 / config.iterations as f64)
    };

    TrialReport {
        pool_size: config.pool_size,
        iterations: config.iterations,
        minimum,
        maximum,
        average,
        budget_failures,
        correct,
    }
}
