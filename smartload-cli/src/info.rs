//! `smartload info`: the limits and search strategies this build uses.

use serde::Serialize;
use smartload_core::{MAX_ORDERS, Strategy};
use smartload_solver::{DEFAULT_BITMASK_CAP, DEFAULT_EXACT_THRESHOLD, MAX_BITMASK_CAP};
use std::io::Write;

use crate::{CliError, DEFAULT_MAX_REQUEST_BYTES, write_json};

/// Service metadata printed by `smartload info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ServiceInfo {
    pub(crate) service: &'static str,
    pub(crate) version: &'static str,
    pub(crate) description: &'static str,
    pub(crate) constraints: Constraints,
    pub(crate) thresholds: Thresholds,
    pub(crate) algorithm: [Strategy; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Constraints {
    pub(crate) max_orders: usize,
    pub(crate) max_payload_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Thresholds {
    pub(crate) exact_threshold: usize,
    pub(crate) bitmask_cap: usize,
    pub(crate) max_bitmask_cap: usize,
}

impl ServiceInfo {
    pub(crate) const fn current() -> Self {
        Self {
            service: "SmartLoad",
            version: env!("CARGO_PKG_VERSION"),
            description: "Optimal truck load planning for carrier logistics",
            constraints: Constraints {
                max_orders: MAX_ORDERS,
                max_payload_bytes: DEFAULT_MAX_REQUEST_BYTES,
            },
            thresholds: Thresholds {
                exact_threshold: DEFAULT_EXACT_THRESHOLD,
                bitmask_cap: DEFAULT_BITMASK_CAP,
                max_bitmask_cap: MAX_BITMASK_CAP,
            },
            algorithm: [Strategy::ExactBacktracking, Strategy::BitmaskEnumeration],
        }
    }
}

pub(super) fn run_info() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_info_with(&mut stdout)
}

pub(super) fn run_info_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &ServiceInfo::current())
}
