//! Optimize command implementation for the SmartLoad CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use smartload_core::{LoadPlan, LoadRequest, Optimizer};
use smartload_solver::{LoadOptimizer, OptimizerConfig};
use std::io::{BufReader, ErrorKind, Read, Write};
use std::time::Duration;

use crate::fs::{metadata, open_utf8_file};
use crate::wire::RequestRecord;
use crate::{
    ARG_BITMASK_CAP, ARG_EXACT_THRESHOLD, ARG_MAX_REQUEST_BYTES, ARG_OPTIMIZE_REQUEST,
    ARG_TIME_LIMIT_MS, CliError, DEFAULT_MAX_REQUEST_BYTES, ENV_OPTIMIZE_REQUEST, write_json,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Choose the most profitable set of orders that fits one \
                 truck. The request is a JSON document holding the truck \
                 limits and the candidate orders; the plan is printed as \
                 JSON on stdout.",
    about = "Optimize a truck load"
)]
#[ortho_config(prefix = "SMARTLOAD")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing the truck and its candidate orders.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Largest candidate count searched by branch-and-bound.
    #[arg(long = ARG_EXACT_THRESHOLD, value_name = "count")]
    #[serde(default)]
    pub(crate) exact_threshold: Option<usize>,
    /// Largest candidate count accepted at all.
    #[arg(long = ARG_BITMASK_CAP, value_name = "count")]
    #[serde(default)]
    pub(crate) bitmask_cap: Option<usize>,
    /// Abandon the search after this many milliseconds.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
    /// Reject request files larger than this many bytes.
    #[arg(long = ARG_MAX_REQUEST_BYTES, value_name = "bytes")]
    #[serde(default)]
    pub(crate) max_request_bytes: Option<u64>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Solver settings after layering.
    pub(crate) optimizer: OptimizerConfig,
    /// Payload limit for the request file.
    pub(crate) max_request_bytes: u64,
}

impl OptimizeConfig {
    /// Check the request file exists, is a file and is within the limit.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        let meta = match metadata(path) {
            Ok(meta) => meta,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                return Err(CliError::MissingSourceFile {
                    field: ARG_OPTIMIZE_REQUEST,
                    path: path.clone(),
                });
            }
            Err(source) => {
                return Err(CliError::InspectSourcePath {
                    field: ARG_OPTIMIZE_REQUEST,
                    path: path.clone(),
                    source,
                });
            }
        };
        if !meta.is_file() {
            return Err(CliError::SourcePathNotFile {
                field: ARG_OPTIMIZE_REQUEST,
                path: path.clone(),
            });
        }
        if meta.len() > self.max_request_bytes {
            return Err(CliError::RequestTooLarge {
                path: path.clone(),
                size: meta.len(),
                limit: self.max_request_bytes,
            });
        }
        Ok(())
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMIZE_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;

        let defaults = OptimizerConfig::default();
        let optimizer = OptimizerConfig {
            exact_threshold: args.exact_threshold.unwrap_or(defaults.exact_threshold),
            bitmask_cap: args.bitmask_cap.unwrap_or(defaults.bitmask_cap),
            time_limit: args.time_limit_ms.map(Duration::from_millis),
            ..defaults
        };
        optimizer.validate()?;

        Ok(Self {
            request_path,
            optimizer,
            max_request_bytes: args.max_request_bytes.unwrap_or(DEFAULT_MAX_REQUEST_BYTES),
        })
    }
}

/// Builds an optimizer for the current invocation.
pub(super) trait OptimizerBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn Optimizer>, CliError>;
}

pub(super) struct DefaultOptimizerBuilder;

impl OptimizerBuilder for DefaultOptimizerBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn Optimizer>, CliError> {
        let optimizer = LoadOptimizer::with_config(config.optimizer.clone())?;
        Ok(Box::new(optimizer))
    }
}

pub(super) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &DefaultOptimizerBuilder, &mut stdout)
}

pub(super) fn run_optimize_with(
    args: OptimizeArgs,
    builder: &dyn OptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let plan = execute_optimize(args, builder)?;
    write_json(writer, &plan)
}

fn execute_optimize(
    args: OptimizeArgs,
    builder: &dyn OptimizerBuilder,
) -> Result<LoadPlan, CliError> {
    let config = resolve_optimize_config(args)?;
    let request = load_optimize_request(&config.request_path, config.max_request_bytes)?;
    let validated = request
        .validate()
        .map_err(|source| CliError::InvalidOptimizeRequest {
            path: config.request_path.clone(),
            source,
        })?;
    log::info!(
        "optimizing {} orders for truck {}",
        validated.orders().len(),
        validated.truck().id
    );

    let optimizer = builder.build(&config)?;
    let plan = optimizer
        .optimize(&validated)
        .map_err(|source| CliError::Optimize { source })?;
    log::info!(
        "selected {} orders paying {} cents via {}",
        plan.selected_order_ids.len(),
        plan.total_payout_cents,
        plan.diagnostics.strategy
    );
    Ok(plan)
}

fn resolve_optimize_config(args: OptimizeArgs) -> Result<OptimizeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded request from disk, reading at most `limit` bytes.
pub(super) fn load_optimize_request(
    path: &Utf8Path,
    limit: u64,
) -> Result<LoadRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOptimizeRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file.take(limit));
    let record: RequestRecord =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseOptimizeRequest {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(record.into())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
