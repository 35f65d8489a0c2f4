//! The immutable result of an optimization call.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::{OrderId, TruckId};

/// Share of a capacity dimension in use, held in hundredths of a percent.
///
/// Stored as an integer so the value is exact and reproducible; it only
/// becomes a float when rendered for display or serialised.
///
/// # Examples
/// ```
/// use smartload_core::Utilization;
///
/// let weight = Utilization::from_ratio(30_000, 44_000);
/// assert_eq!(weight.hundredths(), 6_818);
/// assert_eq!(weight.to_string(), "68.18%");
/// assert_eq!(Utilization::from_ratio(5, 0), Utilization::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Utilization {
    hundredths: u64,
}

impl Utilization {
    /// Nothing in use.
    pub const ZERO: Self = Self { hundredths: 0 };

    /// `100 × used / available`, rounded half-up to two decimal places.
    ///
    /// A zero `available` yields [`Utilization::ZERO`].
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "rounded fixed-point percentage is computed in integers"
    )]
    pub fn from_ratio(used: u64, available: u64) -> Self {
        if available == 0 {
            return Self::ZERO;
        }
        let denominator = u128::from(available);
        let scaled = u128::from(used) * 10_000 + denominator / 2;
        let hundredths = u64::try_from(scaled / denominator).unwrap_or(u64::MAX);
        Self { hundredths }
    }

    /// The percentage in hundredths, so `6818` means 68.18%.
    #[must_use]
    pub const fn hundredths(self) -> u64 {
        self.hundredths
    }

    /// The percentage as a float for display layers.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "display conversion of an already-rounded fixed-point value"
    )]
    pub fn as_percent(self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

impl fmt::Display for Utilization {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splitting fixed-point hundredths into whole and fractional parts"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.hundredths / 100, self.hundredths % 100)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Utilization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_percent())
    }
}

/// Which search produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Depth-first branch-and-bound for small candidate sets.
    ExactBacktracking,
    /// Dense subset enumeration for larger candidate sets.
    BitmaskEnumeration,
}

impl Strategy {
    /// Lower-case name used in logs and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactBacktracking => "exact_backtracking",
            Self::BitmaskEnumeration => "bitmask_enumeration",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic facts about how a plan was produced.
///
/// Holds no timings, so identical requests serialise identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostics {
    /// The search that ran.
    pub strategy: Strategy,
    /// Orders that survived the individual capacity filter.
    pub candidates_considered: usize,
    /// Orders discarded because they exceed capacity on their own.
    pub candidates_filtered: usize,
}

/// The most profitable feasible load for a truck.
///
/// An empty selection with zero totals is a valid plan, meaning no order
/// could be carried.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LoadPlan {
    /// Identifier of the truck from the request.
    pub truck_id: TruckId,
    /// Selected orders by descending payout; equal payouts keep request order.
    pub selected_order_ids: Vec<OrderId>,
    /// Combined payout in cents.
    pub total_payout_cents: u64,
    /// Combined weight in pounds.
    pub total_weight_lbs: u64,
    /// Combined volume in cubic feet.
    pub total_volume_cuft: u64,
    /// Share of the weight limit used.
    pub utilization_weight_percent: Utilization,
    /// Share of the volume limit used.
    pub utilization_volume_percent: Utilization,
    /// How the plan was produced.
    pub diagnostics: Diagnostics,
}

impl LoadPlan {
    /// Whether no order was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_order_ids.is_empty()
    }
}
