//! Orders competing for space on a truck.
//!
//! Two orders may share a trailer only when they travel the same lane, agree
//! on hazardous-material status and have a moment where both can be on board.
//! That pairwise rule is not transitive, so a load is valid only when every
//! pair of its orders is compatible.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque, caller-supplied order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct OrderId(String);

impl OrderId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A lane endpoint such as `"Los Angeles, CA"`.
///
/// Names are trimmed and lower-cased on construction so that cosmetic
/// differences in caller input do not split an otherwise shared lane.
///
/// # Examples
/// ```
/// use smartload_core::Location;
///
/// assert_eq!(Location::new("  Dallas, TX "), Location::new("dallas, tx"));
/// assert_eq!(Location::new("Dallas, TX").as_str(), "dallas, tx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Location(String);

impl Location {
    /// Normalise and wrap a location name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    /// Borrow the normalised name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty after normalisation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A half-open interval `[start, end)` measured in caller-defined ticks.
///
/// Calendar dates map to whole-day windows through [`TimeWindow::day`].
///
/// # Examples
/// ```
/// use smartload_core::TimeWindow;
///
/// let window = TimeWindow::day(20_000);
/// assert_eq!(window.start(), 20_000);
/// assert_eq!(window.end(), 20_001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    /// Construct a window. Callers validate `start <= end` separately.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// The whole-day window `[day, day + 1)`.
    #[must_use]
    pub const fn day(day: i64) -> Self {
        Self::new(day, day.saturating_add(1))
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Whether `start <= end`.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

/// A shipment offered to the carrier.
///
/// Payout is in cents, weight in pounds and volume in cubic feet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier within one request.
    pub id: OrderId,
    /// Revenue to the carrier in cents.
    pub payout_cents: u64,
    /// Shipment weight in pounds.
    pub weight_lbs: u64,
    /// Shipment volume in cubic feet.
    pub volume_cuft: u64,
    /// Where the shipment is collected.
    pub origin: Location,
    /// Where the shipment is dropped.
    pub destination: Location,
    /// When the shipment may be collected.
    pub pickup: TimeWindow,
    /// When the shipment must be delivered.
    pub delivery: TimeWindow,
    /// Whether the shipment contains hazardous material.
    pub is_hazmat: bool,
}

impl Order {
    /// Whether both orders run origin to destination over the same lane.
    #[must_use]
    pub fn shares_lane_with(&self, other: &Self) -> bool {
        self.origin == other.origin && self.destination == other.destination
    }

    /// Whether the combined pickup-to-delivery spans of both orders overlap.
    ///
    /// The latest pickup start must fall strictly before the earliest
    /// delivery end.
    #[must_use]
    pub fn windows_overlap(&self, other: &Self) -> bool {
        let latest_pickup = self.pickup.start.max(other.pickup.start);
        let earliest_delivery_end = self.delivery.end.min(other.delivery.end);
        latest_pickup < earliest_delivery_end
    }

    /// Hazmat loads never mix with non-hazmat loads.
    #[must_use]
    pub const fn hazmat_matches(&self, other: &Self) -> bool {
        self.is_hazmat == other.is_hazmat
    }

    /// Whether the two orders may ever travel together.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.shares_lane_with(other) && self.hazmat_matches(other) && self.windows_overlap(other)
    }

    /// Replace the lane.
    #[must_use]
    pub fn with_lane(mut self, origin: impl AsRef<str>, destination: impl AsRef<str>) -> Self {
        self.origin = Location::new(origin);
        self.destination = Location::new(destination);
        self
    }

    /// Replace the pickup and delivery windows.
    #[must_use]
    pub const fn with_windows(mut self, pickup: TimeWindow, delivery: TimeWindow) -> Self {
        self.pickup = pickup;
        self.delivery = delivery;
        self
    }

    /// Mark the order as hazardous or not.
    #[must_use]
    pub const fn with_hazmat(mut self, is_hazmat: bool) -> Self {
        self.is_hazmat = is_hazmat;
        self
    }
}
