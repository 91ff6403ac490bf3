//! Fixed-size resource pool with a hidden busy/free boundary.
//!
//! The pool answers one question only: "is index `i` free?". Indices below a
//! hidden boundary are busy, indices at or above it are free, and the
//! partition never changes after construction. Busy answers model a cheap
//! production check; free answers model a check an order of magnitude more
//! expensive, so the pool enforces a hard cap on how many it will give out.

use serde::{Deserialize, Serialize};

use crate::errors::{PoolInitError, QueryError};

/// Maximum free answers a pool tolerates over its lifetime. A probe that
/// would produce the answer past this cap fails instead.
pub const FREE_PROBE_BUDGET: u32 = 2;

/// Classification returned by [`ResourcePool::query`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// Index is below the boundary and in use.
    Busy,
    /// Index is at or above the boundary and available.
    Free,
}

/// Snapshot of the probe counters, for diagnostics and the trial harness.
///
/// The search algorithm must never read these to steer itself; it may use
/// only the classifications returned by `query`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeStats {
    /// Probes answered busy so far.
    pub busy_observations: u64,
    /// Probes answered free so far, including the one that tripped the
    /// budget if it did.
    pub free_observations: u64,
}

/// Pool of `size` resources indexed from `0` to `size - 1`.
///
/// The boundary is an explicit constructor input (a harness draws it at
/// random) and is exposed through no channel other than `query`. One pool
/// serves one search: the counters and the budget are per-pool, and the
/// search assumes exclusive access. Construct a fresh pool per trial.
#[derive(Debug)]
pub struct ResourcePool {
    size: usize,
    boundary: usize,
    busy_observations: u64,
    free_observations: u64,
}

impl ResourcePool {
    /// Creates a pool of `size` resources with the given hidden boundary.
    ///
    /// Fails with `NegativeSize` when `size < 0` and with
    /// `BoundaryOutOfRange` unless `0 <= boundary <= size`. A boundary equal
    /// to `size` means every resource is busy; a boundary of zero means every
    /// resource is free.
    pub fn new(size: i64, boundary: i64) -> Result<Self, PoolInitError> {
        if size < 0 {
            return Err(PoolInitError::NegativeSize { size });
        }
        if boundary < 0 || boundary > size {
            return Err(PoolInitError::BoundaryOutOfRange { boundary, size });
        }
        Ok(Self::from_parts(size as usize, boundary as usize))
    }

    /// Non-validating constructor for in-crate callers that already hold a
    /// boundary in range.
    pub(crate) fn from_parts(size: usize, boundary: usize) -> Self {
        debug_assert!(boundary <= size);
        Self {
            size,
            boundary,
            busy_observations: 0,
            free_observations: 0,
        }
    }

    /// Number of indexable resources.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current probe counters.
    pub fn stats(&self) -> ProbeStats {
        ProbeStats {
            busy_observations: self.busy_observations,
            free_observations: self.free_observations,
        }
    }

    /// Classifies the indexed resource as busy or free.
    ///
    /// This looks like a read but mutates the pool: every call increments the
    /// matching counter before anything else, so a probe that then fails is
    /// still charged. Classification is deterministic per index. Fails with
    /// `IndexOutOfRange` for `index >= size`, and with `ProbeBudgetExceeded`
    /// when the answer would be the free answer past [`FREE_PROBE_BUDGET`].
    pub fn query(&mut self, index: usize) -> Result<Probe, QueryError> {
        if index >= self.size {
            return Err(QueryError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }

        if index >= self.boundary {
            self.free_observations += 1;
            if self.free_observations > u64::from(FREE_PROBE_BUDGET) {
                return Err(QueryError::ProbeBudgetExceeded {
                    budget: FREE_PROBE_BUDGET,
                });
            }
            Ok(Probe::Free)
        } else {
            self.busy_observations += 1;
            Ok(Probe::Busy)
        }
    }
}
