//! JSON request format accepted by `smartload optimize`.
//!
//! Dates arrive as ISO calendar days and become whole-day windows counted
//! from the common era, so two orders overlap exactly when their
//! pickup-to-delivery day ranges share a day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use smartload_core::{Capacity, LoadRequest, Location, Order, OrderId, TimeWindow, Truck};

/// Top-level request document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct RequestRecord {
    pub(crate) truck: TruckRecord,
    pub(crate) orders: Vec<OrderRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct TruckRecord {
    pub(crate) id: String,
    pub(crate) max_weight_lbs: u64,
    pub(crate) max_volume_cuft: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct OrderRecord {
    pub(crate) id: String,
    pub(crate) payout_cents: u64,
    pub(crate) weight_lbs: u64,
    pub(crate) volume_cuft: u64,
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) pickup_date: NaiveDate,
    pub(crate) delivery_date: NaiveDate,
    #[serde(default)]
    pub(crate) is_hazmat: bool,
}

fn day_window(date: NaiveDate) -> TimeWindow {
    TimeWindow::day(i64::from(date.num_days_from_ce()))
}

impl From<TruckRecord> for Truck {
    fn from(record: TruckRecord) -> Self {
        Self::new(
            record.id,
            Capacity::new(record.max_weight_lbs, record.max_volume_cuft),
        )
    }
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: OrderId::new(record.id),
            payout_cents: record.payout_cents,
            weight_lbs: record.weight_lbs,
            volume_cuft: record.volume_cuft,
            origin: Location::new(record.origin),
            destination: Location::new(record.destination),
            pickup: day_window(record.pickup_date),
            delivery: day_window(record.delivery_date),
            is_hazmat: record.is_hazmat,
        }
    }
}

impl From<RequestRecord> for LoadRequest {
    fn from(record: RequestRecord) -> Self {
        Self {
            truck: record.truck.into(),
            orders: record.orders.into_iter().map(Order::from).collect(),
        }
    }
}
