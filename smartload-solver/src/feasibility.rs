//! Capacity and compatibility checks shared by both searches.
//!
//! Subsets are `u32` masks over the ranked candidate list: bit `i` set means
//! ranked candidate `i` is on the truck.

use smartload_core::{Capacity, OptimizeError, Quantity};

use crate::candidates::Candidate;
use crate::compat::CompatibilityMatrix;

/// Running totals of a partial or complete load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Load {
    pub(crate) payout: u64,
    pub(crate) weight: u64,
    pub(crate) volume: u64,
}

impl Load {
    pub(crate) const EMPTY: Self = Self {
        payout: 0,
        weight: 0,
        volume: 0,
    };

    /// The load with `candidate` added.
    pub(crate) fn with(self, candidate: &Candidate<'_>) -> Result<Self, OptimizeError> {
        Ok(Self {
            payout: checked_add(self.payout, candidate.payout(), Quantity::Payout)?,
            weight: checked_add(self.weight, candidate.weight(), Quantity::Weight)?,
            volume: checked_add(self.volume, candidate.volume(), Quantity::Volume)?,
        })
    }

    pub(crate) const fn fits(&self, capacity: Capacity) -> bool {
        capacity.admits(self.weight, self.volume)
    }
}

fn checked_add(lhs: u64, rhs: u64, quantity: Quantity) -> Result<u64, OptimizeError> {
    lhs.checked_add(rhs)
        .ok_or(OptimizeError::ArithmeticOverflow { quantity })
}

/// The single-bit mask for ranked position `index`, or 0 when out of range.
pub(crate) fn bit(index: usize) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|shift| 1_u32.checked_shl(shift))
        .unwrap_or(0)
}

/// Ranked positions present in `mask`, lowest first.
pub(crate) fn members(mask: u32) -> impl Iterator<Item = usize> {
    (0..u32::BITS)
        .filter(move |shift| mask & (1_u32 << shift) != 0)
        .map(|shift| shift as usize)
}

/// Total load of the candidates in `mask`.
pub(crate) fn load_of(candidates: &[Candidate<'_>], mask: u32) -> Result<Load, OptimizeError> {
    members(mask)
        .filter_map(|index| candidates.get(index))
        .try_fold(Load::EMPTY, |load, candidate| load.with(candidate))
}

/// Whether the candidates in `mask` fit the truck together.
pub(crate) fn fits_capacity(
    candidates: &[Candidate<'_>],
    mask: u32,
    capacity: Capacity,
) -> Result<bool, OptimizeError> {
    Ok(load_of(candidates, mask)?.fits(capacity))
}

/// Whether a candidate whose compatibility row is `row` may join `accepted`.
pub(crate) const fn compatible_with(row: u32, accepted: u32) -> bool {
    row & accepted == accepted
}

/// Whether every pair of candidates in `mask` is compatible.
pub(crate) fn all_pairwise_compatible(matrix: &CompatibilityMatrix, mask: u32) -> bool {
    members(mask).all(|index| compatible_with(matrix.row(index), mask))
}

/// Tie-break between two masks of equal payout.
///
/// `lhs` precedes `rhs` when, at the lowest ranked position where they
/// differ, `lhs` includes the candidate. That is the order in which an
/// include-first depth-first walk over the ranked candidates reaches them.
pub(crate) const fn precedes(lhs: u32, rhs: u32) -> bool {
    let diff = lhs ^ rhs;
    let lowest = diff & diff.wrapping_neg();
    lhs & lowest != 0
}
