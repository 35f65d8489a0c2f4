//! Core domain types for the SmartLoad engine.
//!
//! The crate describes a truck, the orders competing for space on it, the
//! validated request handed to an optimizer, and the immutable load plan that
//! comes back. Money, weight and volume are integers throughout; nothing in
//! the payout path uses floating point.
//!
//! Optimizer implementations live in separate crates and plug in through the
//! [`Optimizer`] trait.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod capacity;
pub mod optimizer;
pub mod order;
pub mod plan;
pub mod request;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use capacity::{Capacity, Truck, TruckId};
pub use optimizer::{OptimizeError, Optimizer, Quantity};
pub use order::{Location, Order, OrderId, TimeWindow};
pub use plan::{Diagnostics, LoadPlan, Strategy, Utilization};
pub use request::{LoadRequest, MAX_ORDERS, RequestValidationError, ValidatedRequest};
