//! Domain and cross-field validation
//!
//! Runs over the typed configuration after resolution. Everything found is
//! appended to the caller's report; nothing aborts early.

use super::error::{ConfigError, ValidationReport};
use crate::config::schema::{Ndim, WorkflowConfig};

/// Valid MODEL.ARCHITECTURE names
const ARCHITECTURES: &[&str] = &[
    "unet",
    "resunet",
    "seunet",
    "attention_unet",
    "multiresunet",
    "unetr",
    "edsr",
];

/// Valid TRAIN.OPTIMIZER names
const OPTIMIZERS: &[&str] = &["SGD", "ADAM", "ADAMW"];

/// Valid DATA.NORMALIZATION modes
const NORMALIZATIONS: &[&str] = &["div", "custom"];

/// Valid PROBLEM.DENOISING.N2V_MANIPULATOR strategies
const N2V_MANIPULATORS: &[&str] = &[
    "uniform_withCP",
    "uniform_withoutCP",
    "normal_withoutCP",
    "normal_additive",
    "normal_fitted",
    "identity",
];

/// Valid PROBLEM.INSTANCE_SEG.DATA_CHANNELS representations
const CHANNEL_MODES: &[&str] = &["BC", "BCM", "BCD", "BCDv2", "BDv2", "Dv2"];

/// Validate domains and cross-field constraints of a resolved configuration
pub fn check_config(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    check_system(cfg, report);
    check_problem(cfg, report);
    check_data(cfg, report);
    check_augmentor(cfg, report);
    check_model(cfg, report);
    check_train(cfg, report);
    check_stage_requirements(cfg, report);
}

fn check_system(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    check_int_min(report, "SYSTEM.NUM_CPUS", cfg.system.num_cpus, -1, ">= -1");
    check_int_min(report, "SYSTEM.NUM_GPUS", cfg.system.num_gpus, 0, ">= 0");
    check_int_min(report, "SYSTEM.SEED", cfg.system.seed, 0, ">= 0");
}

fn check_problem(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    let den = &cfg.problem.denoising;
    check_pos_fraction(
        report,
        "PROBLEM.DENOISING.N2V_PERC_PIX",
        den.n2v_perc_pix,
    );
    check_choice(
        report,
        "PROBLEM.DENOISING.N2V_MANIPULATOR",
        &den.n2v_manipulator,
        N2V_MANIPULATORS,
    );
    check_int_min(
        report,
        "PROBLEM.DENOISING.N2V_NEIGHBORHOOD_RADIUS",
        den.n2v_neighborhood_radius,
        1,
        ">= 1",
    );

    let inst = &cfg.problem.instance_seg;
    check_choice(
        report,
        "PROBLEM.INSTANCE_SEG.DATA_CHANNELS",
        &inst.data_channels,
        CHANNEL_MODES,
    );
    check_closed_fraction(report, "PROBLEM.INSTANCE_SEG.DATA_MW_TH1", inst.data_mw_th1);
    check_closed_fraction(report, "PROBLEM.INSTANCE_SEG.DATA_MW_TH2", inst.data_mw_th2);
    check_closed_fraction(report, "PROBLEM.INSTANCE_SEG.DATA_MW_TH3", inst.data_mw_th3);
    check_int_min(
        report,
        "PROBLEM.INSTANCE_SEG.DATA_REMOVE_SMALL_OBJ",
        inst.data_remove_small_obj,
        0,
        ">= 0",
    );

    check_int_min(
        report,
        "PROBLEM.DETECTION.CENTRAL_POINT_DILATION",
        cfg.problem.detection.central_point_dilation,
        0,
        ">= 0",
    );
}

fn check_data(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    let ndim = cfg.problem.ndim;
    let expected = ndim.axes() + 1;
    if cfg.data.patch_size.len() != expected {
        report.push(ConfigError::PatchDimensionality {
            patch_len: cfg.data.patch_size.len(),
            ndim: ndim.as_str(),
            expected: ndim.axes(),
        });
    }
    for entry in &cfg.data.patch_size {
        check_int_min(report, "DATA.PATCH_SIZE", *entry, 1, ">= 1");
    }
    check_choice(
        report,
        "DATA.NORMALIZATION",
        &cfg.data.normalization,
        NORMALIZATIONS,
    );

    check_axis_tuple_i64(report, "DATA.TRAIN.PADDING", &cfg.data.train.padding, ndim);
    check_axis_tuple_f64(report, "DATA.TRAIN.OVERLAP", &cfg.data.train.overlap, ndim);
    check_axis_tuple_i64(report, "DATA.TEST.PADDING", &cfg.data.test.padding, ndim);
    check_axis_tuple_f64(report, "DATA.TEST.OVERLAP", &cfg.data.test.overlap, ndim);

    check_closed_fraction(report, "DATA.VAL.SPLIT_TRAIN", cfg.data.val.split_train);
}

fn check_augmentor(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    check_closed_fraction(report, "AUGMENTOR.DA_PROB", cfg.augmentor.da_prob);
}

fn check_model(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    check_choice(
        report,
        "MODEL.ARCHITECTURE",
        &cfg.model.architecture,
        ARCHITECTURES,
    );
    for fm in &cfg.model.feature_maps {
        check_int_min(report, "MODEL.FEATURE_MAPS", *fm, 1, ">= 1");
    }
    for dropout in &cfg.model.dropout_values {
        check_dropout(report, "MODEL.DROPOUT_VALUES", *dropout);
    }
    if cfg.model.feature_maps.len() != cfg.model.dropout_values.len() {
        report.push(ConfigError::LengthMismatch {
            key_a: "MODEL.FEATURE_MAPS",
            len_a: cfg.model.feature_maps.len(),
            key_b: "MODEL.DROPOUT_VALUES",
            len_b: cfg.model.dropout_values.len(),
        });
    }
    check_int_min(report, "MODEL.N_CLASSES", cfg.model.n_classes, 1, ">= 1");
}

fn check_train(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    check_choice(report, "TRAIN.OPTIMIZER", &cfg.train.optimizer, OPTIMIZERS);
    check_pos_fraction(report, "TRAIN.LR", cfg.train.lr);
    check_int_min(report, "TRAIN.BATCH_SIZE", cfg.train.batch_size, 1, ">= 1");
    check_int_min(report, "TRAIN.EPOCHS", cfg.train.epochs, 1, ">= 1");
    check_int_min(report, "TRAIN.PATIENCE", cfg.train.patience, -1, ">= -1");
}

/// Constraints tying enabled stages to the data they need
fn check_stage_requirements(cfg: &WorkflowConfig, report: &mut ValidationReport) {
    if cfg.train.enable && cfg.data.train.path.is_empty() {
        report.push(ConfigError::EmptyRequiredField {
            key: "DATA.TRAIN.PATH (required when TRAIN.ENABLE is True)".to_string(),
        });
    }
    if cfg.test.enable && cfg.data.test.path.is_empty() {
        report.push(ConfigError::EmptyRequiredField {
            key: "DATA.TEST.PATH (required when TEST.ENABLE is True)".to_string(),
        });
    }
    if !cfg.data.val.from_train && cfg.data.val.path.is_empty() {
        report.push(ConfigError::EmptyRequiredField {
            key: "DATA.VAL.PATH (required when DATA.VAL.FROM_TRAIN is False)".to_string(),
        });
    }
    if cfg.test.enable && cfg.test.full_img && cfg.problem.ndim == Ndim::ThreeD {
        report.push(ConfigError::Incompatible {
            key_a: "TEST.FULL_IMG",
            key_b: "PROBLEM.NDIM",
            reason: "full-image inference is not available for 3D workflows".to_string(),
        });
    }
}

// ---------------------------------------------------------------------------
// Shared range-check helpers
// ---------------------------------------------------------------------------

fn check_choice(
    report: &mut ValidationReport,
    key: &str,
    value: &str,
    choices: &'static [&'static str],
) {
    if !choices.contains(&value) {
        report.push(ConfigError::InvalidChoice {
            key: key.to_string(),
            value: value.to_string(),
            choices,
        });
    }
}

fn check_int_min(
    report: &mut ValidationReport,
    key: &str,
    value: i64,
    min: i64,
    constraint: &'static str,
) {
    if value < min {
        report.push(ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            constraint,
        });
    }
}

/// Value must lie in the closed interval [0, 1]
fn check_closed_fraction(report: &mut ValidationReport, key: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        report.push(ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            constraint: "in [0, 1]",
        });
    }
}

/// Value must lie in the half-open interval [0, 1)
fn check_dropout(report: &mut ValidationReport, key: &str, value: f64) {
    if !(0.0..1.0).contains(&value) {
        report.push(ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            constraint: "in [0, 1)",
        });
    }
}

/// Value must lie in the half-open interval (0, 1]
fn check_pos_fraction(report: &mut ValidationReport, key: &str, value: f64) {
    if value <= 0.0 || value > 1.0 {
        report.push(ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            constraint: "in (0, 1]",
        });
    }
}

/// Per-axis integer tuple: arity must match the dimensionality, entries >= 0
fn check_axis_tuple_i64(report: &mut ValidationReport, key: &str, values: &[i64], ndim: Ndim) {
    if values.len() != ndim.axes() {
        report.push(ConfigError::ArityMismatch {
            key: key.to_string(),
            expected: ndim.axes(),
            found: values.len(),
        });
    }
    for value in values {
        check_int_min(report, key, *value, 0, ">= 0");
    }
}

/// Per-axis overlap tuple: arity must match the dimensionality, entries in [0, 1)
fn check_axis_tuple_f64(report: &mut ValidationReport, key: &str, values: &[f64], ndim: Ndim) {
    if values.len() != ndim.axes() {
        report.push(ConfigError::ArityMismatch {
            key: key.to_string(),
            expected: ndim.axes(),
            found: values.len(),
        });
    }
    for value in values {
        check_dropout(report, key, *value);
    }
}
