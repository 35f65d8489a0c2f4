//! Dense enumeration of every subset of the ranked candidates.
//!
//! Masks are visited in increasing order. Each mask extends its predecessor
//! `mask & (mask - 1)` by the candidate at its lowest set bit, so validity
//! and totals follow from one table lookup plus one candidate.

use smartload_core::{Capacity, OptimizeError};

use crate::candidates::Candidate;
use crate::compat::CompatibilityMatrix;
use crate::feasibility::{Load, compatible_with, precedes};
use crate::interrupt::Interrupt;
use crate::solver::Best;

/// Per-mask state, sized once to `2^n` entries.
struct Tables {
    valid: Vec<bool>,
    loads: Vec<Load>,
}

impl Tables {
    fn new(len: usize) -> Self {
        let mut valid = vec![false; len];
        if let Some(empty) = valid.first_mut() {
            *empty = true;
        }
        Self {
            valid,
            loads: vec![Load::EMPTY; len],
        }
    }
}

#[expect(
    clippy::indexing_slicing,
    reason = "mask, predecessor and lowest-bit indices are bounded by the table length"
)]
pub(crate) fn solve_bitmask(
    candidates: &[Candidate<'_>],
    matrix: &CompatibilityMatrix,
    capacity: Capacity,
    interrupt: &mut Interrupt<'_>,
) -> Result<Best, OptimizeError> {
    let Some(end) = u32::try_from(candidates.len())
        .ok()
        .and_then(|n| 1_u32.checked_shl(n))
    else {
        return Err(OptimizeError::CandidateCountExceeded {
            count: candidates.len(),
            cap: crate::MAX_BITMASK_CAP,
        });
    };

    let mut tables = Tables::new(end as usize);
    let mut best = Best::default();
    let mut feasible = 0_u64;

    for mask in 1..end {
        interrupt.tick()?;
        let prev = mask & (mask - 1);
        let low = mask.trailing_zeros() as usize;
        let slot = mask as usize;
        let prev_slot = prev as usize;

        if !tables.valid[prev_slot] || !compatible_with(matrix.row(low), prev) {
            continue;
        }
        let load = tables.loads[prev_slot].with(&candidates[low])?;
        if !load.fits(capacity) {
            continue;
        }

        tables.valid[slot] = true;
        tables.loads[slot] = load;
        feasible += 1;

        if load.payout > best.load.payout
            || (load.payout == best.load.payout && precedes(mask, best.mask))
        {
            best = Best { mask, load };
        }
    }

    log::debug!(
        "enumerated {} subsets of {} candidates, {feasible} feasible",
        end,
        candidates.len()
    );
    Ok(best)
}
