//! Error types emitted by the SmartLoad CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use smartload_core::{OptimizeError, RequestValidationError};
use smartload_solver::OptimizerConfigError;
use thiserror::Error;

/// Errors emitted by the SmartLoad CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The merged optimizer settings are inconsistent.
    #[error("invalid optimizer settings: {0}")]
    InvalidOptimizerConfig(#[from] OptimizerConfigError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The request file is larger than the payload limit.
    #[error("request {path:?} is {size} bytes; at most {limit} are accepted")]
    RequestTooLarge {
        /// Path to the request.
        path: Utf8PathBuf,
        /// Size on disk.
        size: u64,
        /// Configured limit.
        limit: u64,
    },
    /// Opening the optimize request file failed.
    #[error("failed to open optimize request at {path:?}: {source}")]
    OpenOptimizeRequest {
        /// Path to the request.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Optimize request JSON could not be decoded.
    #[error("failed to parse optimize request JSON at {path:?}: {source}")]
    ParseOptimizeRequest {
        /// Path to the request.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The optimize request payload failed validation.
    #[error("optimize request in {path:?} failed validation: {source}")]
    InvalidOptimizeRequest {
        /// Path to the request.
        path: Utf8PathBuf,
        /// First problem found.
        #[source]
        source: RequestValidationError,
    },
    /// The optimizer rejected the request.
    #[error("optimizer failed: {source}")]
    Optimize {
        /// Optimizer failure.
        source: OptimizeError,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
