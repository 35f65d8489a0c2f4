//! The seam between validated requests and the searches that answer them.

use std::fmt;

use thiserror::Error;

use crate::{LoadPlan, ValidatedRequest};

/// A running total that can overflow while summing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Payout in cents.
    Payout,
    /// Weight in pounds.
    Weight,
    /// Volume in cubic feet.
    Volume,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Payout => "payout",
            Self::Weight => "weight",
            Self::Volume => "volume",
        })
    }
}

/// Errors returned by [`Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// More candidates survived filtering than the dense search supports.
    #[error("{count} candidate orders exceed the supported limit of {cap}")]
    CandidateCountExceeded {
        /// Candidates remaining after filtering.
        count: usize,
        /// Configured upper bound.
        cap: usize,
    },
    /// Summing the candidates overflowed a 64-bit total.
    #[error("{quantity} total overflowed")]
    ArithmeticOverflow {
        /// Which total overflowed.
        quantity: Quantity,
    },
    /// The caller stopped the search or its time limit elapsed.
    #[error("optimization was cancelled before completing")]
    Cancelled,
}

/// Alias for the optimizer error type.
pub type Error = OptimizeError;

/// Choose the most profitable feasible load for a validated request.
///
/// Implementations must be deterministic: the same request always yields
/// the same plan. Optimizers must be `Send + Sync` so a single instance can
/// serve concurrent callers.
pub trait Optimizer: Send + Sync {
    /// Optimize a request, producing a load plan or an error.
    fn optimize(&self, request: &ValidatedRequest) -> Result<LoadPlan, Error>;
}
