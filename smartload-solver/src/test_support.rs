//! Test-only utilities for `smartload-solver`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use smartload_core::test_support::{order, request, standard_truck};
use smartload_core::{Order, Strategy, ValidatedRequest};

use crate::{LoadOptimizer, MAX_BITMASK_CAP, OptimizerConfig};

/// Configuration that routes every admissible candidate count to `strategy`.
///
/// # Examples
/// ```rust
/// use smartload_core::Strategy;
/// use smartload_solver::test_support::forced_config;
///
/// let config = forced_config(Strategy::BitmaskEnumeration);
/// assert_eq!(config.exact_threshold, 0);
/// ```
#[must_use]
pub fn forced_config(strategy: Strategy) -> OptimizerConfig {
    let exact_threshold = match strategy {
        Strategy::ExactBacktracking => MAX_BITMASK_CAP,
        Strategy::BitmaskEnumeration => 0,
    };
    OptimizerConfig {
        exact_threshold,
        bitmask_cap: MAX_BITMASK_CAP,
        ..OptimizerConfig::default()
    }
}

/// An optimizer pinned to one search strategy.
///
/// # Panics
/// Never; [`forced_config`] always validates.
#[must_use]
#[expect(clippy::expect_used, reason = "forced configurations are always valid")]
pub fn forced_optimizer(strategy: Strategy) -> LoadOptimizer {
    LoadOptimizer::with_config(forced_config(strategy)).expect("forced config is valid")
}

/// The two compatible Los Angeles to Dallas orders used throughout the docs.
#[must_use]
pub fn scenario_a_orders() -> Vec<Order> {
    vec![
        order("ord-001", 250_000, 18_000, 1_200),
        order("ord-002", 180_000, 12_000, 900),
    ]
}

/// Scenario A validated against the standard truck.
///
/// # Panics
/// Never; the scenario orders are always valid.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixed scenario data is known to validate"
)]
pub fn scenario_a_request() -> ValidatedRequest {
    request(standard_truck(), scenario_a_orders())
        .validate()
        .expect("scenario A should validate")
}

/// `count` mutually compatible orders with distinct, varied payouts.
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "modulo spreads sizes deterministically"
)]
pub fn compatible_orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| {
            let step = u64::try_from(i).unwrap_or(u64::MAX);
            order(
                &format!("ord-{i:03}"),
                10_000 + (step * 7_919) % 50_000,
                1_000 + (step * 613) % 6_000,
                50 + (step * 97) % 400,
            )
        })
        .collect()
}
