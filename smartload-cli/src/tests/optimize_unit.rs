//! Focused unit tests covering optimize CLI configuration and request loading.

use super::helpers::{
    order_record, request_record, scenario_a_record, temp_workspace, write_request, write_utf8,
};
use super::*;
use crate::optimize::{
    DefaultOptimizerBuilder, OptimizeArgs, OptimizeConfig, config_from_layers_for_test,
    load_optimize_request, run_optimize_with,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use smartload_core::{OptimizeError, RequestValidationError};
use smartload_solver::{OptimizerConfig, OptimizerConfigError};
use std::time::Duration;

fn config_for(request_path: Utf8PathBuf) -> OptimizeConfig {
    OptimizeConfig {
        request_path,
        optimizer: OptimizerConfig::default(),
        max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
    }
}

fn args_for(request_path: &Utf8PathBuf) -> OptimizeArgs {
    OptimizeArgs {
        request_path: Some(request_path.clone()),
        ..OptimizeArgs::default()
    }
}

#[rstest]
fn converting_optimize_without_request_errors() {
    let err = OptimizeConfig::try_from(OptimizeArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_OPTIMIZE_REQUEST);
            assert_eq!(env, ENV_OPTIMIZE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn optimize_config_applies_defaults() {
    let path = Utf8PathBuf::from("request.json");
    let config = OptimizeConfig::try_from(args_for(&path)).expect("config should build");
    assert_eq!(config, config_for(path));
}

#[rstest]
fn optimize_config_applies_overrides() {
    let args = OptimizeArgs {
        exact_threshold: Some(10),
        bitmask_cap: Some(20),
        time_limit_ms: Some(250),
        max_request_bytes: Some(4_096),
        ..args_for(&Utf8PathBuf::from("request.json"))
    };
    let config = OptimizeConfig::try_from(args).expect("config should build");
    assert_eq!(config.optimizer.exact_threshold, 10);
    assert_eq!(config.optimizer.bitmask_cap, 20);
    assert_eq!(config.optimizer.time_limit, Some(Duration::from_millis(250)));
    assert_eq!(config.max_request_bytes, 4_096);
}

#[rstest]
#[case::threshold_above_cap(Some(20), Some(18), OptimizerConfigError::ThresholdAboveCap { threshold: 20, cap: 18 })]
#[case::cap_too_large(None, Some(30), OptimizerConfigError::CapTooLarge { cap: 30, max: 24 })]
fn optimize_config_rejects_inconsistent_thresholds(
    #[case] exact_threshold: Option<usize>,
    #[case] bitmask_cap: Option<usize>,
    #[case] expected: OptimizerConfigError,
) {
    let args = OptimizeArgs {
        exact_threshold,
        bitmask_cap,
        ..args_for(&Utf8PathBuf::from("request.json"))
    };
    let err = OptimizeConfig::try_from(args).expect_err("thresholds should be rejected");
    match err {
        CliError::InvalidOptimizerConfig(source) => assert_eq!(source, expected),
        other => panic!("expected InvalidOptimizerConfig, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = temp_workspace();
    let err = config_for(root.join("absent.json"))
        .validate_sources()
        .expect_err("missing file should fail");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_OPTIMIZE_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");

    let err = config_for(request_path.clone())
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_OPTIMIZE_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_enforces_payload_limit() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    write_utf8(&request_path, &[b' '; 64]);

    let config = OptimizeConfig {
        max_request_bytes: 63,
        ..config_for(request_path)
    };
    let err = config.validate_sources().expect_err("oversized request");
    match err {
        CliError::RequestTooLarge { size, limit, .. } => {
            assert_eq!(size, 64);
            assert_eq!(limit, 63);
        }
        other => panic!("expected RequestTooLarge, found {other:?}"),
    }
}

#[rstest]
fn load_optimize_request_decodes_json() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    write_request(&request_path, &scenario_a_record());

    let request = load_optimize_request(&request_path, DEFAULT_MAX_REQUEST_BYTES)
        .expect("request should decode");
    assert_eq!(request.truck.id.as_str(), "truck-123");
    assert_eq!(request.orders.len(), 2);
}

#[rstest]
fn load_optimize_request_rejects_invalid_json() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"{ not valid json");

    let err = load_optimize_request(&request_path, DEFAULT_MAX_REQUEST_BYTES)
        .expect_err("invalid json should error");
    match err {
        CliError::ParseOptimizeRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_optimize_request_io_error_returns_open_error() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");

    let err = load_optimize_request(&request_path, DEFAULT_MAX_REQUEST_BYTES)
        .expect_err("missing request should error");
    match err {
        CliError::OpenOptimizeRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenOptimizeRequest, found {other:?}"),
    }
}

#[rstest]
fn run_optimize_prints_scenario_a_plan() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    write_request(&request_path, &scenario_a_record());

    let mut stdout = Vec::new();
    run_optimize_with(args_for(&request_path), &DefaultOptimizerBuilder, &mut stdout)
        .expect("optimize should succeed");

    let plan: serde_json::Value = serde_json::from_slice(&stdout).expect("json output");
    assert_eq!(plan["truck_id"], "truck-123");
    assert_eq!(
        plan["selected_order_ids"],
        serde_json::json!(["ord-001", "ord-002"])
    );
    assert_eq!(plan["total_payout_cents"], 430_000);
    assert_eq!(plan["total_weight_lbs"], 30_000);
    assert_eq!(plan["total_volume_cuft"], 2_100);
    assert_eq!(plan["utilization_weight_percent"], 68.18);
    assert_eq!(plan["utilization_volume_percent"], 70.0);
    assert_eq!(plan["diagnostics"]["strategy"], "exact_backtracking");
}

#[rstest]
fn run_optimize_surfaces_validation_errors() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    write_request(
        &request_path,
        &request_record(vec![
            order_record("dup", 1, 1, 1),
            order_record("dup", 2, 2, 2),
        ]),
    );

    let mut stdout = Vec::new();
    let err = run_optimize_with(args_for(&request_path), &DefaultOptimizerBuilder, &mut stdout)
        .expect_err("duplicate ids should be rejected");
    match err {
        CliError::InvalidOptimizeRequest { source, .. } => {
            assert!(matches!(source, RequestValidationError::DuplicateOrderId { .. }));
        }
        other => panic!("expected InvalidOptimizeRequest, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn run_optimize_surfaces_candidate_cap() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("request.json");
    let orders = (0..23)
        .map(|i| order_record(&format!("ord-{i:03}"), 1_000 + i, 100, 10))
        .collect();
    write_request(&request_path, &request_record(orders));

    let mut stdout = Vec::new();
    let err = run_optimize_with(args_for(&request_path), &DefaultOptimizerBuilder, &mut stdout)
        .expect_err("too many candidates");
    match err {
        CliError::Optimize { source } => assert_eq!(
            source,
            OptimizeError::CandidateCountExceeded { count: 23, cap: 22 }
        ),
        other => panic!("expected Optimize, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = temp_workspace();
    let env_request = root.join("from-env-request.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "exact_threshold": 8,
            "bitmask_cap": 18,
            "max_request_bytes": 2_048,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "bitmask_cap": 20,
    }));
    composer.push_cli(json!({
        "exact_threshold": 12,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.optimizer.exact_threshold, 12);
    assert_eq!(config.optimizer.bitmask_cap, 20);
    assert_eq!(config.max_request_bytes, 2_048);
    assert_eq!(config.optimizer.time_limit, None);
}
