//! Facade crate for the SmartLoad truck-load optimizer.
//!
//! This crate re-exports the core domain types and, behind the `solver`
//! feature, the exact optimizer that plans a load.

#![forbid(unsafe_code)]

pub use smartload_core::{
    Capacity, Diagnostics, LoadPlan, LoadRequest, Location, MAX_ORDERS, OptimizeError, Optimizer,
    Order, OrderId, Quantity, RequestValidationError, Strategy, TimeWindow, Truck, TruckId,
    Utilization, ValidatedRequest,
};

#[cfg(feature = "solver")]
pub use smartload_solver::{LoadOptimizer, OptimizerConfig, OptimizerConfigError, Selection};
