//! Budget-aware boundary search: galloping probe plus bracketed refinement.
//!
//! The search spends cheap busy answers freely and expensive free answers
//! never more than twice. The first free answer ends the galloping phase and
//! brackets the boundary; the second, if spent, must land the bracket at
//! width one or the search reports failure rather than risk a third.

use crate::errors::SearchError;
use crate::pool::{Probe, ResourcePool, FREE_PROBE_BUDGET};

/// Terminal outcome of [`locate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Smallest index whose resource is free.
    FirstFree(usize),
    /// Every resource is busy (the boundary sits at `size`).
    NoFreeResource,
    /// The pool has no resources at all.
    PoolEmpty,
}

/// Finds the smallest free index in `pool`.
///
/// Issues O(log N) probes and never requests more than [`FREE_PROBE_BUDGET`]
/// free answers. When the remaining bracket cannot be resolved without a
/// third free answer the search fails with
/// [`SearchError::ProbeBudgetExceeded`]; the pool is spent for that trial and
/// the search is not retried.
///
/// The search decides its next probe from returned classifications alone:
/// the pool's hidden boundary and its counters stay out of reach.
pub fn locate(pool: &mut ResourcePool) -> Result<Outcome, SearchError> {
    let size = pool.size();
    if size == 0 {
        return Ok(Outcome::PoolEmpty);
    }

    // Galloping phase: 0, 1, 2, 4, 8, ... while busy. A candidate past the
    // end clamps to the last index; if that index is already confirmed busy
    // the whole pool is, and no free-budget was spent learning it.
    let mut confirmed_busy: Option<usize> = None;
    let mut candidate = 0usize;
    let first_free = loop {
        match pool.query(candidate)? {
            Probe::Free => break candidate,
            Probe::Busy => {
                confirmed_busy = Some(candidate);
                let next = if candidate == 0 {
                    1
                } else {
                    candidate.saturating_mul(2)
                };
                if next < size {
                    candidate = next;
                } else {
                    let last = size - 1;
                    if last == candidate {
                        return Ok(Outcome::NoFreeResource);
                    }
                    candidate = last;
                }
            }
        }
    };

    let Some(mut confirmed_busy) = confirmed_busy else {
        // Index 0 answered free: there is no busy prefix to bracket.
        return Ok(Outcome::FirstFree(0));
    };
    let mut confirmed_free = first_free;
    let mut free_seen: u32 = 1;

    // Refinement: the boundary lies in (confirmed_busy, confirmed_free].
    // Busy midpoints are cheap and shrink the bracket from below. A free
    // midpoint spends the last budget slot; after that, every index still
    // inside the bracket has an unknown classification, so probing again
    // could only be done at the risk of a third free answer.
    while confirmed_busy + 1 < confirmed_free {
        if free_seen == FREE_PROBE_BUDGET {
            return Err(SearchError::ProbeBudgetExceeded {
                confirmed_busy,
                confirmed_free,
            });
        }
        let mid = confirmed_busy + (confirmed_free - confirmed_busy) / 2;
        match pool.query(mid)? {
            Probe::Busy => confirmed_busy = mid,
            Probe::Free => {
                confirmed_free = mid;
                free_seen += 1;
            }
        }
    }

    Ok(Outcome::FirstFree(confirmed_free))
}
