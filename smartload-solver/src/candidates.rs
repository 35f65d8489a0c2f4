//! Candidate filtering and ranking.

use smartload_core::{Capacity, OptimizeError, Order, Quantity};

/// An order that fits the truck on its own, with its request position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub(crate) source: usize,
    pub(crate) order: &'a Order,
}

impl Candidate<'_> {
    pub(crate) const fn payout(&self) -> u64 {
        self.order.payout_cents
    }

    pub(crate) const fn weight(&self) -> u64 {
        self.order.weight_lbs
    }

    pub(crate) const fn volume(&self) -> u64 {
        self.order.volume_cuft
    }
}

/// Survivors of [`filter_candidates`], ranked by descending payout.
#[derive(Debug)]
pub(crate) struct CandidateSet<'a> {
    pub(crate) ranked: Vec<Candidate<'a>>,
    pub(crate) discarded: usize,
}

/// Drop orders that exceed capacity alone and rank the rest.
///
/// The payout, weight and volume of all survivors are summed with checked
/// arithmetic here, so any sum over a subset of them is representable.
/// Ranking is stable: equal payouts keep request order.
pub(crate) fn filter_candidates(
    capacity: Capacity,
    orders: &[Order],
) -> Result<CandidateSet<'_>, OptimizeError> {
    let mut ranked: Vec<Candidate<'_>> = orders
        .iter()
        .enumerate()
        .filter(|(_, order)| capacity.admits(order.weight_lbs, order.volume_cuft))
        .map(|(source, order)| Candidate { source, order })
        .collect();

    ensure_summable(&ranked, Candidate::payout, Quantity::Payout)?;
    ensure_summable(&ranked, Candidate::weight, Quantity::Weight)?;
    ensure_summable(&ranked, Candidate::volume, Quantity::Volume)?;

    ranked.sort_by(|lhs, rhs| rhs.payout().cmp(&lhs.payout()));
    let discarded = orders.len().saturating_sub(ranked.len());
    Ok(CandidateSet { ranked, discarded })
}

fn ensure_summable<'a>(
    candidates: &[Candidate<'a>],
    field: impl Fn(&Candidate<'a>) -> u64,
    quantity: Quantity,
) -> Result<(), OptimizeError> {
    candidates
        .iter()
        .try_fold(0_u64, |total, candidate| total.checked_add(field(candidate)))
        .map(|_| ())
        .ok_or(OptimizeError::ArithmeticOverflow { quantity })
}
