//! Boundary search over a busy-prefix resource pool with a probe budget.
//!
//! ## Scope
//! This crate models a fixed-size pool whose resources are partitioned into a
//! busy prefix `[0, boundary)` and a free suffix `[boundary, size)`, and
//! locates the smallest free index using only the pool's single probe
//! primitive.
//!
//! ## Key invariants
//! - The partition is monotonic and fixed at construction: every index below
//!   the boundary answers busy, every index at or above it answers free.
//! - Busy answers are cheap and unbounded; free answers are expensive and
//!   capped at [`FREE_PROBE_BUDGET`] per pool lifetime. A third free answer
//!   is a hard failure, not a degraded result.
//! - The search sees classifications only. The hidden boundary and the probe
//!   counters are never consulted to steer the search.
//!
//! ## Search flow
//! 1) Exponential phase: probe 0, 1, 2, 4, 8, ... while answers are busy,
//!    clamping the final candidate to the last index.
//! 2) Bracketed refinement: binary-search `(confirmed_busy, confirmed_free]`,
//!    spending the second and last free-budget slot at most once.
//! 3) Terminate with the boundary, `NoFreeResource`, or a reported
//!    `ProbeBudgetExceeded` when the bracket cannot be resolved in budget.
//!
//! ## Notable entry points
//! - [`ResourcePool`]: the pool and its probe primitive.
//! - [`locate`] / [`Outcome`]: the budget-aware boundary search.
//! - [`run_trials`] / [`TrialReport`]: randomized measurement harness.

pub mod errors;
pub mod pool;
pub mod search;
pub mod trials;

pub use errors::{PoolInitError, QueryError, SearchError};
pub use pool::{Probe, ProbeStats, ResourcePool, FREE_PROBE_BUDGET};
pub use search::{locate, Outcome};
pub use trials::{run_trials, TrialConfig, TrialReport, TrialRng};
