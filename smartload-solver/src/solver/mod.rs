//! `LoadOptimizer` pipeline: filter, rank, match, search, assemble.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use smartload_core::{
    Capacity, LoadPlan, OptimizeError, Optimizer, Order, Strategy, ValidatedRequest,
};

use crate::assemble::assemble;
use crate::candidates::filter_candidates;
use crate::compat::CompatibilityMatrix;
use crate::config::{OptimizerConfig, OptimizerConfigError};
use crate::dispatch::SolverDispatcher;
use crate::feasibility::{Load, all_pairwise_compatible, fits_capacity, members};
use crate::interrupt::Interrupt;

/// Winning mask over the ranked candidates and its totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Best {
    pub(crate) mask: u32,
    pub(crate) load: Load,
}

/// The orders chosen for a truck, before they are turned into a plan.
///
/// Positions index the order slice passed to [`LoadOptimizer::select`] and
/// follow descending payout, equal payouts keeping input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    positions: Vec<usize>,
    load: Load,
    strategy: Strategy,
    candidates_considered: usize,
    candidates_filtered: usize,
}

impl Selection {
    /// Indices of the chosen orders in the input slice.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Combined payout in cents.
    #[must_use]
    pub const fn payout_cents(&self) -> u64 {
        self.load.payout
    }

    /// Combined weight in pounds.
    #[must_use]
    pub const fn weight_lbs(&self) -> u64 {
        self.load.weight
    }

    /// Combined volume in cubic feet.
    #[must_use]
    pub const fn volume_cuft(&self) -> u64 {
        self.load.volume
    }

    /// The search that produced the selection.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Orders that fit the truck on their own.
    #[must_use]
    pub const fn candidates_considered(&self) -> usize {
        self.candidates_considered
    }

    /// Orders discarded for exceeding capacity on their own.
    #[must_use]
    pub const fn candidates_filtered(&self) -> usize {
        self.candidates_filtered
    }
}

/// Exact optimizer choosing the most profitable feasible set of orders.
///
/// The optimizer holds only configuration, so one instance can serve any
/// number of concurrent calls.
///
/// # Examples
/// ```rust
/// use smartload_core::{Capacity, LoadRequest, Optimizer, Truck};
/// use smartload_solver::LoadOptimizer;
///
/// let request = LoadRequest {
///     truck: Truck::new("truck-123", Capacity::new(44_000, 3_000)),
///     orders: Vec::new(),
/// }
/// .validate()
/// .expect("valid request");
/// let plan = LoadOptimizer::new().optimize(&request).expect("plan");
/// assert!(plan.selected_order_ids.is_empty());
/// assert_eq!(plan.total_payout_cents, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadOptimizer {
    config: OptimizerConfig,
}

impl LoadOptimizer {
    /// Construct an optimizer using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an optimizer with explicit configuration.
    ///
    /// # Errors
    /// Returns [`OptimizerConfigError`] when the configuration is inconsistent.
    pub fn with_config(config: OptimizerConfig) -> Result<Self, OptimizerConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Choose orders for a truck of the given capacity.
    ///
    /// # Errors
    /// Returns [`OptimizeError::ArithmeticOverflow`] when candidate totals do
    /// not fit in `u64`, [`OptimizeError::CandidateCountExceeded`] when too
    /// many orders fit the truck individually, and
    /// [`OptimizeError::Cancelled`] when the configured time limit elapses.
    pub fn select(&self, capacity: Capacity, orders: &[Order]) -> Result<Selection, OptimizeError> {
        self.run(capacity, orders, None)
    }

    /// Optimize a request, aborting once `stop` is raised.
    ///
    /// The flag is polled every
    /// [`cancel_poll_interval`](OptimizerConfig::cancel_poll_interval) search
    /// steps, so another thread can abandon a long call.
    ///
    /// # Errors
    /// As [`Optimizer::optimize`], with [`OptimizeError::Cancelled`] when the
    /// flag is raised before the search completes.
    pub fn optimize_with_stop(
        &self,
        request: &ValidatedRequest,
        stop: &AtomicBool,
    ) -> Result<LoadPlan, OptimizeError> {
        let truck = request.truck();
        let selection = self.run(truck.capacity, request.orders(), Some(stop))?;
        Ok(assemble(truck, request.orders(), &selection))
    }

    fn run(
        &self,
        capacity: Capacity,
        orders: &[Order],
        stop: Option<&AtomicBool>,
    ) -> Result<Selection, OptimizeError> {
        let started = Instant::now();
        let mut interrupt = Interrupt::new(
            stop,
            self.config.time_limit,
            self.config.cancel_poll_interval,
        );
        let set = filter_candidates(capacity, orders)?;
        let count = set.ranked.len();
        log::debug!(
            "{count} of {} orders fit the truck individually; {} filtered",
            orders.len(),
            set.discarded
        );

        let strategy = SolverDispatcher::new(&self.config).choose(count)?;
        log::debug!("dispatching {count} candidates to {strategy}");

        let matrix = CompatibilityMatrix::build(&set.ranked);
        let outcome = interrupt.check().and_then(|()| {
            SolverDispatcher::run(strategy, &set.ranked, &matrix, capacity, &mut interrupt)
        });
        let best = outcome.inspect_err(|err| {
            if matches!(err, OptimizeError::Cancelled) {
                log::warn!("optimization cancelled while searching {count} candidates");
            }
        })?;

        debug_assert!(all_pairwise_compatible(&matrix, best.mask));
        debug_assert!(fits_capacity(&set.ranked, best.mask, capacity).unwrap_or(false));
        log::debug!(
            "selected {} orders paying {} cents in {}ms",
            best.mask.count_ones(),
            best.load.payout,
            started.elapsed().as_millis()
        );

        let positions: Vec<usize> = members(best.mask)
            .filter_map(|index| set.ranked.get(index))
            .map(|candidate| candidate.source)
            .collect();

        Ok(Selection {
            positions,
            load: best.load,
            strategy,
            candidates_considered: count,
            candidates_filtered: set.discarded,
        })
    }
}

impl Optimizer for LoadOptimizer {
    fn optimize(&self, request: &ValidatedRequest) -> Result<LoadPlan, OptimizeError> {
        let truck = request.truck();
        let selection = self.select(truck.capacity, request.orders())?;
        Ok(assemble(truck, request.orders(), &selection))
    }
}
