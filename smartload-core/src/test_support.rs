//! Test-only builders shared by unit, behaviour and property tests.
//!
//! Orders built here default to the Los Angeles to Dallas lane, a pickup on
//! day 0 and a delivery on day 4, and no hazardous material, so any two of
//! them are compatible until a test says otherwise.

use crate::{Capacity, LoadRequest, Location, Order, OrderId, TimeWindow, Truck};

/// Default origin for test orders.
pub const DEFAULT_ORIGIN: &str = "Los Angeles, CA";
/// Default destination for test orders.
pub const DEFAULT_DESTINATION: &str = "Dallas, TX";

/// Construct a non-hazmat order on the default lane and windows.
///
/// # Examples
/// ```rust
/// use smartload_core::test_support::order;
///
/// let order = order("ord-001", 250_000, 18_000, 1_200);
/// assert_eq!(order.payout_cents, 250_000);
/// assert!(!order.is_hazmat);
/// ```
#[must_use]
pub fn order(id: &str, payout_cents: u64, weight_lbs: u64, volume_cuft: u64) -> Order {
    Order {
        id: OrderId::new(id),
        payout_cents,
        weight_lbs,
        volume_cuft,
        origin: Location::new(DEFAULT_ORIGIN),
        destination: Location::new(DEFAULT_DESTINATION),
        pickup: TimeWindow::day(0),
        delivery: TimeWindow::day(4),
        is_hazmat: false,
    }
}

/// Construct a truck with the given limits.
#[must_use]
pub fn truck(id: &str, max_weight: u64, max_volume: u64) -> Truck {
    Truck::new(id, Capacity::new(max_weight, max_volume))
}

/// The 44 000 lb / 3 000 cuft truck used throughout the examples.
#[must_use]
pub fn standard_truck() -> Truck {
    truck("truck-123", 44_000, 3_000)
}

/// Bundle a truck and orders into an unvalidated request.
#[must_use]
pub fn request(truck: Truck, orders: Vec<Order>) -> LoadRequest {
    LoadRequest { truck, orders }
}
