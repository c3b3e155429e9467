//! Cross-field validation tests

use super::error::{ConfigError, ValidationReport};
use super::validator::check_config;
use crate::config::schema::{Ndim, WorkflowConfig, WorkflowKind};

fn run(cfg: &WorkflowConfig) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_config(cfg, &mut report);
    report
}

fn base_config() -> WorkflowConfig {
    let mut cfg = WorkflowConfig::default();
    cfg.problem.kind = WorkflowKind::Denoising;
    cfg
}

#[test]
fn default_config_is_valid() {
    assert!(run(&base_config()).is_empty());
}

#[test]
fn patch_dimensionality_mismatch_names_both_fields() {
    let mut cfg = base_config();
    cfg.problem.ndim = Ndim::ThreeD;
    // leave the 2D defaults in DATA
    let report = run(&cfg);
    let error = report
        .errors()
        .iter()
        .find(|e| matches!(e, ConfigError::PatchDimensionality { .. }))
        .expect("patch dimensionality violation expected");
    let text = error.to_string();
    assert!(text.contains("DATA.PATCH_SIZE"));
    assert!(text.contains("PROBLEM.NDIM"));
}

#[test]
fn matching_patch_and_ndim_passes() {
    let mut cfg = base_config();
    cfg.problem.ndim = Ndim::ThreeD;
    cfg.data = crate::config::schema::DataConfig::default_for(Ndim::ThreeD);
    cfg.test.full_img = false;
    assert!(run(&cfg).is_empty());
}

#[test]
fn feature_map_dropout_length_mismatch() {
    let mut cfg = base_config();
    cfg.model.feature_maps = vec![32, 64];
    cfg.model.dropout_values = vec![0.1, 0.1, 0.1];
    let report = run(&cfg);
    assert!(report.errors().iter().any(|e| matches!(
        e,
        ConfigError::LengthMismatch { len_a: 2, len_b: 3, .. }
    )));
}

#[test]
fn split_train_out_of_range() {
    let mut cfg = base_config();
    cfg.data.val.split_train = 1.5;
    let report = run(&cfg);
    assert!(report.mentions("DATA.VAL.SPLIT_TRAIN"));
}

#[test]
fn unknown_optimizer_rejected() {
    let mut cfg = base_config();
    cfg.train.optimizer = "RMSPROP".to_string();
    let report = run(&cfg);
    assert!(report.errors().iter().any(|e| matches!(
        e,
        ConfigError::InvalidChoice { key, .. } if key == "TRAIN.OPTIMIZER"
    )));
}

#[test]
fn learning_rate_bounds() {
    for bad in [0.0, -0.1, 1.5] {
        let mut cfg = base_config();
        cfg.train.lr = bad;
        assert!(run(&cfg).mentions("TRAIN.LR"), "lr {bad} should fail");
    }
    let mut cfg = base_config();
    cfg.train.lr = 1.0;
    assert!(run(&cfg).is_empty());
}

#[test]
fn patience_minus_one_disables_early_stopping() {
    let mut cfg = base_config();
    cfg.train.patience = -1;
    assert!(run(&cfg).is_empty());
    cfg.train.patience = -2;
    assert!(run(&cfg).mentions("TRAIN.PATIENCE"));
}

#[test]
fn enabled_training_requires_train_path() {
    let mut cfg = base_config();
    cfg.train.enable = true;
    let report = run(&cfg);
    assert!(report.errors().iter().any(|e| matches!(
        e,
        ConfigError::EmptyRequiredField { key } if key.contains("DATA.TRAIN.PATH")
    )));

    cfg.data.train.path = "/data/train/x".to_string();
    assert!(run(&cfg).is_empty());
}

#[test]
fn enabled_testing_requires_test_path() {
    let mut cfg = base_config();
    cfg.test.enable = true;
    assert!(run(&cfg).mentions("DATA.TEST.PATH"));
}

#[test]
fn external_validation_set_requires_path() {
    let mut cfg = base_config();
    cfg.data.val.from_train = false;
    assert!(run(&cfg).mentions("DATA.VAL.PATH"));
}

#[test]
fn full_image_inference_rejected_for_3d() {
    let mut cfg = base_config();
    cfg.problem.ndim = Ndim::ThreeD;
    cfg.data = crate::config::schema::DataConfig::default_for(Ndim::ThreeD);
    cfg.data.test.path = "/data/test/x".to_string();
    cfg.test.enable = true;
    cfg.test.full_img = true;
    let report = run(&cfg);
    assert!(report.errors().iter().any(|e| matches!(
        e,
        ConfigError::Incompatible { key_a, .. } if *key_a == "TEST.FULL_IMG"
    )));
}

#[test]
fn overlap_entries_must_be_fractions() {
    let mut cfg = base_config();
    cfg.data.train.overlap = vec![0.5, 1.0];
    assert!(run(&cfg).mentions("DATA.TRAIN.OVERLAP"));
}

#[test]
fn padding_arity_must_match_dimensionality() {
    let mut cfg = base_config();
    cfg.data.train.padding = vec![0, 0, 0];
    let report = run(&cfg);
    assert!(report.errors().iter().any(|e| matches!(
        e,
        ConfigError::ArityMismatch { key, expected: 2, found: 3 } if key == "DATA.TRAIN.PADDING"
    )));
}

#[test]
fn invalid_manipulator_rejected() {
    let mut cfg = base_config();
    cfg.problem.denoising.n2v_manipulator = "median".to_string();
    assert!(run(&cfg).mentions("N2V_MANIPULATOR"));
}

#[test]
fn invalid_channel_mode_rejected() {
    let mut cfg = base_config();
    cfg.problem.kind = WorkflowKind::InstanceSeg;
    cfg.problem.instance_seg.data_channels = "XY".to_string();
    assert!(run(&cfg).mentions("DATA_CHANNELS"));
}

#[test]
fn violations_accumulate() {
    let mut cfg = base_config();
    cfg.train.lr = 0.0;
    cfg.train.batch_size = 0;
    cfg.model.dropout_values = vec![1.2; 5];
    let report = run(&cfg);
    assert!(report.len() >= 7);
}
