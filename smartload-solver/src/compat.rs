//! Pairwise compatibility as one bit-row per candidate.

use crate::candidates::Candidate;
use crate::feasibility::bit;

/// Row `i` has bit `j` set when candidates `i` and `j` may share the truck.
///
/// Every row includes its own bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompatibilityMatrix {
    rows: Vec<u32>,
}

impl CompatibilityMatrix {
    pub(crate) fn build(candidates: &[Candidate<'_>]) -> Self {
        let rows = candidates
            .iter()
            .enumerate()
            .map(|(i, lhs)| {
                candidates
                    .iter()
                    .enumerate()
                    .filter(|(j, rhs)| *j == i || lhs.order.is_compatible_with(rhs.order))
                    .fold(0_u32, |row, (j, _)| row | bit(j))
            })
            .collect();
        Self { rows }
    }

    pub(crate) fn row(&self, index: usize) -> u32 {
        self.rows.get(index).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}
