//! Tuning knobs for [`LoadOptimizer`](crate::LoadOptimizer).

use std::time::Duration;

use thiserror::Error;

/// Largest candidate count the dense enumeration will ever accept.
///
/// At this size the per-subset tables already hold sixteen million entries.
pub const MAX_BITMASK_CAP: usize = 24;

/// Default largest candidate count routed to branch-and-bound.
pub const DEFAULT_EXACT_THRESHOLD: usize = 15;

/// Default largest candidate count accepted at all.
pub const DEFAULT_BITMASK_CAP: usize = 22;

/// Default number of search steps between cancellation checks.
pub const DEFAULT_CANCEL_POLL_INTERVAL: u32 = 4096;

/// Configuration for [`LoadOptimizer`](crate::LoadOptimizer).
///
/// # Examples
/// ```rust
/// use smartload_solver::OptimizerConfig;
///
/// let config = OptimizerConfig {
///     exact_threshold: 10,
///     ..OptimizerConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Candidate counts up to this value use branch-and-bound.
    pub exact_threshold: usize,
    /// Candidate counts above the threshold and up to this value use dense
    /// enumeration; anything larger is rejected.
    pub bitmask_cap: usize,
    /// Search steps between checks of the stop flag and time limit.
    pub cancel_poll_interval: u32,
    /// Wall-clock budget for one call, unlimited when `None`.
    pub time_limit: Option<Duration>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            bitmask_cap: DEFAULT_BITMASK_CAP,
            cancel_poll_interval: DEFAULT_CANCEL_POLL_INTERVAL,
            time_limit: None,
        }
    }
}

/// Problems with an [`OptimizerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizerConfigError {
    /// The branch-and-bound threshold exceeds the overall cap.
    #[error("exact threshold {threshold} must not exceed bitmask cap {cap}")]
    ThresholdAboveCap {
        /// Configured threshold.
        threshold: usize,
        /// Configured cap.
        cap: usize,
    },
    /// The cap exceeds what the dense enumeration supports.
    #[error("bitmask cap {cap} exceeds the supported maximum of {max}")]
    CapTooLarge {
        /// Configured cap.
        cap: usize,
        /// Supported maximum.
        max: usize,
    },
    /// Cancellation would never be polled.
    #[error("cancel poll interval must be greater than zero")]
    ZeroPollInterval,
}

impl OptimizerConfig {
    /// Check the configuration is internally consistent.
    ///
    /// # Errors
    /// Returns the first [`OptimizerConfigError`] found.
    pub const fn validate(&self) -> Result<(), OptimizerConfigError> {
        if self.bitmask_cap > MAX_BITMASK_CAP {
            return Err(OptimizerConfigError::CapTooLarge {
                cap: self.bitmask_cap,
                max: MAX_BITMASK_CAP,
            });
        }
        if self.exact_threshold > self.bitmask_cap {
            return Err(OptimizerConfigError::ThresholdAboveCap {
                threshold: self.exact_threshold,
                cap: self.bitmask_cap,
            });
        }
        if self.cancel_poll_interval == 0 {
            return Err(OptimizerConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}
