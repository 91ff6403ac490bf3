//! Error types for pool construction, probing, and boundary search.
//!
//! Errors are stage-specific to keep diagnostics precise. All enums are
//! `#[non_exhaustive]` to allow adding variants without breaking callers;
//! consumers should include a fallback match arm.
//!
//! `NoFreeResource` and `PoolEmpty` are deliberately absent here: they are
//! legitimate terminal outcomes of a search, not failures, and live in
//! [`crate::search::Outcome`].

use std::fmt;

/// Errors from pool construction.
///
/// Sizes and boundaries arrive as signed integers from external callers and
/// are validated exactly once here; internals use `usize` afterwards.
#[derive(Debug)]
#[non_exhaustive]
pub enum PoolInitError {
    /// Requested pool size is negative.
    NegativeSize { size: i64 },
    /// Boundary falls outside `[0, size]`.
    BoundaryOutOfRange { boundary: i64, size: i64 },
}

impl fmt::Display for PoolInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSize { size } => write!(f, "negative pool size: {size}"),
            Self::BoundaryOutOfRange { boundary, size } => {
                write!(f, "boundary out of range: {boundary} (size: {size})")
            }
        }
    }
}

impl std::error::Error for PoolInitError {}

/// Errors from the pool's probe primitive.
#[derive(Debug)]
#[non_exhaustive]
pub enum QueryError {
    /// Probed index does not address a resource.
    IndexOutOfRange { index: usize, size: usize },
    /// A free answer was produced past the per-pool budget. The probe is
    /// still charged to the counters; only the answer is withheld.
    ProbeBudgetExceeded { budget: u32 },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index out of range: {index} (size: {size})")
            }
            Self::ProbeBudgetExceeded { budget } => {
                write!(f, "free-probe budget exceeded (budget: {budget})")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Errors from the boundary search.
#[derive(Debug)]
#[non_exhaustive]
pub enum SearchError {
    /// The bracket is still wider than one index after the final free
    /// observation; resolving it would require a third free answer.
    ProbeBudgetExceeded {
        confirmed_busy: usize,
        confirmed_free: usize,
    },
    /// Probe failure surfaced by the pool. Unreachable from a correct
    /// search; fatal if seen.
    Query(QueryError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProbeBudgetExceeded {
                confirmed_busy,
                confirmed_free,
            } => write!(
                f,
                "free-probe budget exceeded: bracket ({confirmed_busy}, {confirmed_free}] unresolved"
            ),
            Self::Query(err) => write!(f, "probe failed: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }
}

impl From<QueryError> for SearchError {
    fn from(err: QueryError) -> Self {
        Self::Query(err)
    }
}
