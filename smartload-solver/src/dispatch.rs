//! Routing candidate sets to the search suited to their size.

use smartload_core::{Capacity, OptimizeError, Strategy};

use crate::backtracking::solve_backtracking;
use crate::bitmask::solve_bitmask;
use crate::candidates::Candidate;
use crate::compat::CompatibilityMatrix;
use crate::config::OptimizerConfig;
use crate::interrupt::Interrupt;
use crate::solver::Best;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SolverDispatcher {
    exact_threshold: usize,
    bitmask_cap: usize,
}

impl SolverDispatcher {
    pub(crate) const fn new(config: &OptimizerConfig) -> Self {
        Self {
            exact_threshold: config.exact_threshold,
            bitmask_cap: config.bitmask_cap,
        }
    }

    /// Pick the search for `count` candidates.
    pub(crate) const fn choose(&self, count: usize) -> Result<Strategy, OptimizeError> {
        if count <= self.exact_threshold {
            Ok(Strategy::ExactBacktracking)
        } else if count <= self.bitmask_cap {
            Ok(Strategy::BitmaskEnumeration)
        } else {
            Err(OptimizeError::CandidateCountExceeded {
                count,
                cap: self.bitmask_cap,
            })
        }
    }

    pub(crate) fn run(
        strategy: Strategy,
        candidates: &[Candidate<'_>],
        matrix: &CompatibilityMatrix,
        capacity: Capacity,
        interrupt: &mut Interrupt<'_>,
    ) -> Result<Best, OptimizeError> {
        match strategy {
            Strategy::ExactBacktracking => {
                solve_backtracking(candidates, matrix, capacity, interrupt)
            }
            Strategy::BitmaskEnumeration => solve_bitmask(candidates, matrix, capacity, interrupt),
        }
    }
}
