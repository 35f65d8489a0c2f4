//! Depth-first branch-and-bound over ranked candidates.
//!
//! Each candidate is first included (when it fits and agrees with everything
//! already on the truck) and then excluded. A branch is abandoned once its
//! payout plus the payout of every undecided candidate cannot beat the best
//! load found so far, so among equal payouts the first load reached wins.

use smartload_core::{Capacity, OptimizeError};

use crate::candidates::Candidate;
use crate::compat::CompatibilityMatrix;
use crate::feasibility::{Load, bit, compatible_with};
use crate::interrupt::Interrupt;
use crate::solver::Best;

struct Search<'s, 'a, 'i> {
    candidates: &'s [Candidate<'a>],
    matrix: &'s CompatibilityMatrix,
    capacity: Capacity,
    /// `suffix[d]` is the payout of ranked candidates `d..`.
    suffix: Vec<u64>,
    best: Option<Best>,
    nodes: u64,
    interrupt: &'s mut Interrupt<'i>,
}

pub(crate) fn solve_backtracking(
    candidates: &[Candidate<'_>],
    matrix: &CompatibilityMatrix,
    capacity: Capacity,
    interrupt: &mut Interrupt<'_>,
) -> Result<Best, OptimizeError> {
    let mut search = Search {
        candidates,
        matrix,
        capacity,
        suffix: suffix_payouts(candidates),
        best: None,
        nodes: 0,
        interrupt,
    };
    search.descend(0, 0, Load::EMPTY)?;
    log::debug!(
        "branch-and-bound visited {} nodes over {} candidates",
        search.nodes,
        candidates.len()
    );
    Ok(search.best.unwrap_or_default())
}

fn suffix_payouts(candidates: &[Candidate<'_>]) -> Vec<u64> {
    let mut suffix = vec![0_u64; candidates.len() + 1];
    let mut running = 0_u64;
    for (slot, candidate) in suffix.iter_mut().zip(candidates).rev() {
        running = running.saturating_add(candidate.payout());
        *slot = running;
    }
    suffix
}

impl Search<'_, '_, '_> {
    fn bound(&self, depth: usize, load: Load) -> u64 {
        let remaining = self.suffix.get(depth).copied().unwrap_or(0);
        load.payout.saturating_add(remaining)
    }

    fn descend(&mut self, depth: usize, mask: u32, load: Load) -> Result<(), OptimizeError> {
        self.interrupt.tick()?;
        self.nodes = self.nodes.saturating_add(1);

        if let Some(best) = self.best
            && self.bound(depth, load) <= best.load.payout
        {
            return Ok(());
        }

        let Some(candidate) = self.candidates.get(depth) else {
            self.best = Some(Best { mask, load });
            return Ok(());
        };

        if compatible_with(self.matrix.row(depth), mask) {
            let included = load.with(candidate)?;
            if included.fits(self.capacity) {
                self.descend(depth + 1, mask | bit(depth), included)?;
            }
        }
        self.descend(depth + 1, mask, load)
    }
}
