//! Exact load optimizer for SmartLoad.
//!
//! This crate provides [`LoadOptimizer`], the default implementation of the
//! [`Optimizer`](smartload_core::Optimizer) trait. It picks the subset of
//! orders with the highest total payout that fits the truck and whose orders
//! are pairwise compatible.
//!
//! Every call runs the same pipeline: orders that cannot fit on their own are
//! filtered out, the survivors are ranked by payout, a compatibility matrix is
//! built, and a dispatcher hands the candidates to one of two exact searches.
//! Small candidate sets go to a depth-first branch-and-bound; larger ones go
//! to a dense enumeration of every subset. Both searches return the same
//! selection for the same input, so the choice affects only running time.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assemble;
mod backtracking;
mod bitmask;
mod candidates;
mod compat;
mod config;
mod dispatch;
mod feasibility;
mod interrupt;
mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{
    DEFAULT_BITMASK_CAP, DEFAULT_CANCEL_POLL_INTERVAL, DEFAULT_EXACT_THRESHOLD, MAX_BITMASK_CAP,
    OptimizerConfig, OptimizerConfigError,
};
pub use solver::{LoadOptimizer, Selection};
