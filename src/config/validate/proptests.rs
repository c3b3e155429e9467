//! Property-based tests for configuration validation

use super::error::{ConfigError, ValidationReport};
use super::validator::check_config;
use crate::config::schema::{WorkflowConfig, WorkflowKind};
use proptest::prelude::*;

fn run(cfg: &WorkflowConfig) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_config(cfg, &mut report);
    report
}

fn arb_valid_config() -> impl Strategy<Value = WorkflowConfig> {
    (
        1i64..512,           // batch_size
        1e-6f64..1.0,        // lr
        1i64..500,           // epochs
        0.0f64..=1.0,        // split_train
        proptest::sample::select(WorkflowKind::CHOICES.to_vec()),
    )
        .prop_map(|(batch_size, lr, epochs, split_train, kind)| {
            let mut cfg = WorkflowConfig::default();
            cfg.problem.kind = WorkflowKind::parse(kind).expect("choice parses");
            cfg.train.batch_size = batch_size;
            cfg.train.lr = lr;
            cfg.train.epochs = epochs;
            cfg.data.val.split_train = split_train;
            cfg
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(cfg in arb_valid_config()) {
        prop_assert!(run(&cfg).is_empty());
    }

    #[test]
    fn prop_zero_batch_size_fails(cfg in arb_valid_config()) {
        let mut cfg = cfg;
        cfg.train.batch_size = 0;
        prop_assert!(run(&cfg).mentions("TRAIN.BATCH_SIZE"));
    }

    #[test]
    fn prop_lr_outside_unit_interval_fails(
        cfg in arb_valid_config(),
        bad_lr in prop_oneof![-10.0f64..0.0, 1.0001f64..10.0]
    ) {
        let mut cfg = cfg;
        cfg.train.lr = bad_lr;
        prop_assert!(run(&cfg).mentions("TRAIN.LR"));
    }

    #[test]
    fn prop_stage_count_mismatch_fails(cfg in arb_valid_config(), extra in 1usize..4) {
        let mut cfg = cfg;
        for _ in 0..extra {
            cfg.model.feature_maps.push(16);
        }
        let report = run(&cfg);
        let has_length_mismatch = report.errors().iter().any(|e| matches!(
            e,
            ConfigError::LengthMismatch { .. }
        ));
        prop_assert!(has_length_mismatch);
    }

    #[test]
    fn prop_patch_arity_mismatch_fails(cfg in arb_valid_config(), extra in 1usize..3) {
        let mut cfg = cfg;
        for _ in 0..extra {
            cfg.data.patch_size.push(1);
        }
        let report = run(&cfg);
        let has_patch_dimensionality = report.errors().iter().any(|e| matches!(
            e,
            ConfigError::PatchDimensionality { .. }
        ));
        prop_assert!(has_patch_dimensionality);
    }

    #[test]
    fn prop_dropout_outside_range_fails(
        cfg in arb_valid_config(),
        bad in prop_oneof![-1.0f64..0.0, 1.0f64..2.0]
    ) {
        let mut cfg = cfg;
        let stages = cfg.model.dropout_values.len();
        cfg.model.dropout_values = vec![bad; stages];
        prop_assert!(run(&cfg).mentions("MODEL.DROPOUT_VALUES"));
    }
}
