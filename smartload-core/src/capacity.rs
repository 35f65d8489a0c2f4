//! The vehicle being loaded and its weight/volume envelope.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight and volume limits of a truck.
///
/// # Examples
/// ```
/// use smartload_core::Capacity;
///
/// let capacity = Capacity::new(44_000, 3_000);
/// assert!(capacity.admits(18_000, 1_200));
/// assert!(!capacity.admits(50_000, 1_200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capacity {
    /// Maximum load weight in pounds.
    #[cfg_attr(feature = "serde", serde(rename = "max_weight_lbs"))]
    pub max_weight: u64,
    /// Maximum load volume in cubic feet.
    #[cfg_attr(feature = "serde", serde(rename = "max_volume_cuft"))]
    pub max_volume: u64,
}

impl Capacity {
    /// Construct a capacity envelope.
    #[must_use]
    pub const fn new(max_weight: u64, max_volume: u64) -> Self {
        Self {
            max_weight,
            max_volume,
        }
    }

    /// Whether a load of `weight` and `volume` fits inside the envelope.
    #[must_use]
    pub const fn admits(&self, weight: u64, volume: u64) -> bool {
        weight <= self.max_weight && volume <= self.max_volume
    }
}

/// Opaque truck identifier, copied into the load plan untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TruckId(String);

impl TruckId {
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
}

impl fmt::Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A truck offered for loading.
///
/// On the wire the capacity fields sit next to the identifier:
/// `{"id": "truck-123", "max_weight_lbs": 44000, "max_volume_cuft": 3000}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truck {
    /// Identifier echoed back in the load plan.
    pub id: TruckId,
    /// Physical limits of the trailer.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub capacity: Capacity,
}

impl Truck {
    /// Construct a truck from an identifier and its limits.
    #[must_use]
    pub fn new(id: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            id: TruckId::new(id),
            capacity,
        }
    }
}
