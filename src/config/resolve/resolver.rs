//! Section-by-section document resolution
//!
//! Every failed field keeps its default so resolution always produces a
//! complete configuration alongside the report; callers decide whether the
//! collected violations are fatal.

use crate::config::document::{Document, Scalar, Value};
use crate::config::schema::{
    AugmentorConfig, DataConfig, DenoisingConfig, DetectionConfig, InstanceSegConfig, ModelConfig,
    Ndim, ProblemConfig, SystemConfig, TestConfig, TestDataConfig, TrainConfig, TrainDataConfig,
    ValDataConfig, WorkflowConfig, WorkflowKind,
};
use crate::config::validate::{ConfigError, ValidationReport};
use std::collections::BTreeMap;

/// Recognized top-level sections
const SECTIONS: &[&str] = &[
    "SYSTEM",
    "PROBLEM",
    "DATA",
    "AUGMENTOR",
    "MODEL",
    "TRAIN",
    "TEST",
];

/// Resolve a document into a fully-defaulted configuration
///
/// Fails with the full report when the document contains unknown keys, type
/// mismatches or misses a required key.
pub fn resolve_defaults(doc: &Document) -> Result<WorkflowConfig, ValidationReport> {
    let (config, report) = resolve_with_report(doc);
    report.into_result().map(|()| config)
}

/// Resolve a document, always returning both the configuration and every
/// violation found along the way
pub(crate) fn resolve_with_report(doc: &Document) -> (WorkflowConfig, ValidationReport) {
    let mut report = ValidationReport::new();

    for name in doc.section_names() {
        if !SECTIONS.contains(&name) {
            report.push(ConfigError::UnknownKey {
                section: "(top level)".to_string(),
                key: name.to_string(),
            });
        }
    }

    // PROBLEM goes first: DATA defaults depend on the dimensionality.
    let problem = match section(doc, "PROBLEM", &mut report) {
        Some(map) => resolve_problem(map, &mut report),
        None => {
            report.push(ConfigError::MissingRequiredKey {
                key: "PROBLEM.TYPE".to_string(),
            });
            ProblemConfig::default()
        }
    };
    let ndim = problem.ndim;

    let system = section(doc, "SYSTEM", &mut report)
        .map(|map| resolve_system(map, &mut report))
        .unwrap_or_default();
    let data = section(doc, "DATA", &mut report)
        .map(|map| resolve_data(map, ndim, &mut report))
        .unwrap_or_else(|| DataConfig::default_for(ndim));
    let augmentor = section(doc, "AUGMENTOR", &mut report)
        .map(|map| resolve_augmentor(map, &mut report))
        .unwrap_or_default();
    let model = section(doc, "MODEL", &mut report)
        .map(|map| resolve_model(map, &mut report))
        .unwrap_or_default();
    let train = section(doc, "TRAIN", &mut report)
        .map(|map| resolve_train(map, &mut report))
        .unwrap_or_default();
    let test = section(doc, "TEST", &mut report)
        .map(|map| resolve_test(map, &mut report))
        .unwrap_or_default();

    let config = WorkflowConfig {
        system,
        problem,
        data,
        augmentor,
        model,
        train,
        test,
    };
    (config, report)
}

type Section = BTreeMap<String, Value>;

fn section<'a>(
    doc: &'a Document,
    name: &str,
    report: &mut ValidationReport,
) -> Option<&'a Section> {
    match doc.get(name) {
        Some(Value::Section(map)) => Some(map),
        Some(other) => {
            report.push(ConfigError::TypeMismatch {
                key: name.to_string(),
                expected: "section",
                found: other.describe(),
            });
            None
        }
        None => None,
    }
}

fn sub_section<'a>(
    key: &str,
    value: &'a Value,
    report: &mut ValidationReport,
) -> Option<&'a Section> {
    match value {
        Value::Section(map) => Some(map),
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "section",
                found: other.describe(),
            });
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Typed field getters. Each pushes a TypeMismatch and returns None on failure
// so the caller keeps the default.
// ---------------------------------------------------------------------------

fn get_bool(key: &str, value: &Value, report: &mut ValidationReport) -> Option<bool> {
    match value {
        Value::Scalar(Scalar::Bool(b)) => Some(*b),
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "boolean (True or False)",
                found: other.describe(),
            });
            None
        }
    }
}

fn get_int(key: &str, value: &Value, report: &mut ValidationReport) -> Option<i64> {
    match value {
        Value::Scalar(Scalar::Int(i)) => Some(*i),
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "integer",
                found: other.describe(),
            });
            None
        }
    }
}

fn get_float(key: &str, value: &Value, report: &mut ValidationReport) -> Option<f64> {
    match value {
        Value::Scalar(Scalar::Float(f)) => Some(*f),
        // Integers widen to float where a float is expected.
        Value::Scalar(Scalar::Int(i)) => Some(*i as f64),
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "float",
                found: other.describe(),
            });
            None
        }
    }
}

fn get_str(key: &str, value: &Value, report: &mut ValidationReport) -> Option<String> {
    match value {
        Value::Scalar(Scalar::Str(s)) => Some(s.clone()),
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "string",
                found: other.describe(),
            });
            None
        }
    }
}

/// Tuple or list of integers. Arity is checked by the cross-field validator,
/// not here.
fn get_int_seq(
    key: &str,
    value: &Value,
    expected: &'static str,
    report: &mut ValidationReport,
) -> Option<Vec<i64>> {
    let items = match value {
        Value::Tuple(items) | Value::List(items) => items,
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected,
                found: other.describe(),
            });
            return None;
        }
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Scalar::Int(i) => out.push(*i),
            other => {
                report.push(ConfigError::TypeMismatch {
                    key: key.to_string(),
                    expected,
                    found: Value::Scalar(other.clone()).describe(),
                });
                return None;
            }
        }
    }
    Some(out)
}

/// Tuple or list of floats, integer entries widening
fn get_float_seq(
    key: &str,
    value: &Value,
    expected: &'static str,
    report: &mut ValidationReport,
) -> Option<Vec<f64>> {
    let items = match value {
        Value::Tuple(items) | Value::List(items) => items,
        other => {
            report.push(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected,
                found: other.describe(),
            });
            return None;
        }
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Scalar::Float(f) => out.push(*f),
            Scalar::Int(i) => out.push(*i as f64),
            other => {
                report.push(ConfigError::TypeMismatch {
                    key: key.to_string(),
                    expected,
                    found: Value::Scalar(other.clone()).describe(),
                });
                return None;
            }
        }
    }
    Some(out)
}

// ---------------------------------------------------------------------------
// Per-section resolution
// ---------------------------------------------------------------------------

fn resolve_system(map: &Section, report: &mut ValidationReport) -> SystemConfig {
    let mut cfg = SystemConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "NUM_CPUS" => {
                if let Some(v) = get_int("SYSTEM.NUM_CPUS", value, report) {
                    cfg.num_cpus = v;
                }
            }
            "NUM_GPUS" => {
                if let Some(v) = get_int("SYSTEM.NUM_GPUS", value, report) {
                    cfg.num_gpus = v;
                }
            }
            "SEED" => {
                if let Some(v) = get_int("SYSTEM.SEED", value, report) {
                    cfg.seed = v;
                }
            }
            _ => unknown(report, "SYSTEM", key),
        }
    }
    cfg
}

fn resolve_problem(map: &Section, report: &mut ValidationReport) -> ProblemConfig {
    let mut cfg = ProblemConfig::default();
    let mut saw_type = false;
    for (key, value) in map {
        match key.as_str() {
            "TYPE" => {
                saw_type = true;
                if let Some(text) = get_str("PROBLEM.TYPE", value, report) {
                    match WorkflowKind::parse(&text) {
                        Some(parsed) => cfg.kind = parsed,
                        None => report.push(ConfigError::InvalidChoice {
                            key: "PROBLEM.TYPE".to_string(),
                            value: text,
                            choices: WorkflowKind::CHOICES,
                        }),
                    }
                }
            }
            "NDIM" => {
                if let Some(text) = get_str("PROBLEM.NDIM", value, report) {
                    match Ndim::parse(&text) {
                        Some(parsed) => cfg.ndim = parsed,
                        None => report.push(ConfigError::InvalidChoice {
                            key: "PROBLEM.NDIM".to_string(),
                            value: text,
                            choices: Ndim::CHOICES,
                        }),
                    }
                }
            }
            "DENOISING" => {
                if let Some(sub) = sub_section("PROBLEM.DENOISING", value, report) {
                    cfg.denoising = resolve_denoising(sub, report);
                }
            }
            "INSTANCE_SEG" => {
                if let Some(sub) = sub_section("PROBLEM.INSTANCE_SEG", value, report) {
                    cfg.instance_seg = resolve_instance_seg(sub, report);
                }
            }
            "DETECTION" => {
                if let Some(sub) = sub_section("PROBLEM.DETECTION", value, report) {
                    cfg.detection = resolve_detection(sub, report);
                }
            }
            _ => unknown(report, "PROBLEM", key),
        }
    }
    if !saw_type {
        report.push(ConfigError::MissingRequiredKey {
            key: "PROBLEM.TYPE".to_string(),
        });
    }
    cfg
}

fn resolve_denoising(map: &Section, report: &mut ValidationReport) -> DenoisingConfig {
    let mut cfg = DenoisingConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "N2V_PERC_PIX" => {
                if let Some(v) = get_float("PROBLEM.DENOISING.N2V_PERC_PIX", value, report) {
                    cfg.n2v_perc_pix = v;
                }
            }
            "N2V_MANIPULATOR" => {
                if let Some(v) = get_str("PROBLEM.DENOISING.N2V_MANIPULATOR", value, report) {
                    cfg.n2v_manipulator = v;
                }
            }
            "N2V_NEIGHBORHOOD_RADIUS" => {
                if let Some(v) =
                    get_int("PROBLEM.DENOISING.N2V_NEIGHBORHOOD_RADIUS", value, report)
                {
                    cfg.n2v_neighborhood_radius = v;
                }
            }
            "N2V_STRUCTMASK" => {
                if let Some(v) = get_bool("PROBLEM.DENOISING.N2V_STRUCTMASK", value, report) {
                    cfg.n2v_structmask = v;
                }
            }
            _ => unknown(report, "PROBLEM.DENOISING", key),
        }
    }
    cfg
}

fn resolve_instance_seg(map: &Section, report: &mut ValidationReport) -> InstanceSegConfig {
    let mut cfg = InstanceSegConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "DATA_CHANNELS" => {
                if let Some(v) = get_str("PROBLEM.INSTANCE_SEG.DATA_CHANNELS", value, report) {
                    cfg.data_channels = v;
                }
            }
            "DATA_MW_TH1" => {
                if let Some(v) = get_float("PROBLEM.INSTANCE_SEG.DATA_MW_TH1", value, report) {
                    cfg.data_mw_th1 = v;
                }
            }
            "DATA_MW_TH2" => {
                if let Some(v) = get_float("PROBLEM.INSTANCE_SEG.DATA_MW_TH2", value, report) {
                    cfg.data_mw_th2 = v;
                }
            }
            "DATA_MW_TH3" => {
                if let Some(v) = get_float("PROBLEM.INSTANCE_SEG.DATA_MW_TH3", value, report) {
                    cfg.data_mw_th3 = v;
                }
            }
            "DATA_REMOVE_SMALL_OBJ" => {
                if let Some(v) =
                    get_int("PROBLEM.INSTANCE_SEG.DATA_REMOVE_SMALL_OBJ", value, report)
                {
                    cfg.data_remove_small_obj = v;
                }
            }
            _ => unknown(report, "PROBLEM.INSTANCE_SEG", key),
        }
    }
    cfg
}

fn resolve_detection(map: &Section, report: &mut ValidationReport) -> DetectionConfig {
    let mut cfg = DetectionConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "CENTRAL_POINT_DILATION" => {
                if let Some(v) = get_int("PROBLEM.DETECTION.CENTRAL_POINT_DILATION", value, report)
                {
                    cfg.central_point_dilation = v;
                }
            }
            "CHECK_POINTS_CREATED" => {
                if let Some(v) = get_bool("PROBLEM.DETECTION.CHECK_POINTS_CREATED", value, report) {
                    cfg.check_points_created = v;
                }
            }
            _ => unknown(report, "PROBLEM.DETECTION", key),
        }
    }
    cfg
}

fn resolve_data(map: &Section, ndim: Ndim, report: &mut ValidationReport) -> DataConfig {
    let mut cfg = DataConfig::default_for(ndim);
    for (key, value) in map {
        match key.as_str() {
            "PATCH_SIZE" => {
                if let Some(v) =
                    get_int_seq("DATA.PATCH_SIZE", value, "tuple of integers", report)
                {
                    cfg.patch_size = v;
                }
            }
            "NORMALIZATION" => {
                if let Some(v) = get_str("DATA.NORMALIZATION", value, report) {
                    cfg.normalization = v;
                }
            }
            "TRAIN" => {
                if let Some(sub) = sub_section("DATA.TRAIN", value, report) {
                    cfg.train = resolve_train_data(sub, ndim, report);
                }
            }
            "VAL" => {
                if let Some(sub) = sub_section("DATA.VAL", value, report) {
                    cfg.val = resolve_val_data(sub, report);
                }
            }
            "TEST" => {
                if let Some(sub) = sub_section("DATA.TEST", value, report) {
                    cfg.test = resolve_test_data(sub, ndim, report);
                }
            }
            _ => unknown(report, "DATA", key),
        }
    }
    cfg
}

fn resolve_train_data(map: &Section, ndim: Ndim, report: &mut ValidationReport) -> TrainDataConfig {
    let mut cfg = TrainDataConfig::default_for(ndim);
    for (key, value) in map {
        match key.as_str() {
            "PATH" => {
                if let Some(v) = get_str("DATA.TRAIN.PATH", value, report) {
                    cfg.path = v;
                }
            }
            "GT_PATH" => {
                if let Some(v) = get_str("DATA.TRAIN.GT_PATH", value, report) {
                    cfg.gt_path = v;
                }
            }
            "IN_MEMORY" => {
                if let Some(v) = get_bool("DATA.TRAIN.IN_MEMORY", value, report) {
                    cfg.in_memory = v;
                }
            }
            "PADDING" => {
                if let Some(v) =
                    get_int_seq("DATA.TRAIN.PADDING", value, "tuple of integers", report)
                {
                    cfg.padding = v;
                }
            }
            "OVERLAP" => {
                if let Some(v) =
                    get_float_seq("DATA.TRAIN.OVERLAP", value, "tuple of floats", report)
                {
                    cfg.overlap = v;
                }
            }
            _ => unknown(report, "DATA.TRAIN", key),
        }
    }
    cfg
}

fn resolve_val_data(map: &Section, report: &mut ValidationReport) -> ValDataConfig {
    let mut cfg = ValDataConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "FROM_TRAIN" => {
                if let Some(v) = get_bool("DATA.VAL.FROM_TRAIN", value, report) {
                    cfg.from_train = v;
                }
            }
            "SPLIT_TRAIN" => {
                if let Some(v) = get_float("DATA.VAL.SPLIT_TRAIN", value, report) {
                    cfg.split_train = v;
                }
            }
            "PATH" => {
                if let Some(v) = get_str("DATA.VAL.PATH", value, report) {
                    cfg.path = v;
                }
            }
            "GT_PATH" => {
                if let Some(v) = get_str("DATA.VAL.GT_PATH", value, report) {
                    cfg.gt_path = v;
                }
            }
            "IN_MEMORY" => {
                if let Some(v) = get_bool("DATA.VAL.IN_MEMORY", value, report) {
                    cfg.in_memory = v;
                }
            }
            _ => unknown(report, "DATA.VAL", key),
        }
    }
    cfg
}

fn resolve_test_data(map: &Section, ndim: Ndim, report: &mut ValidationReport) -> TestDataConfig {
    let mut cfg = TestDataConfig::default_for(ndim);
    for (key, value) in map {
        match key.as_str() {
            "PATH" => {
                if let Some(v) = get_str("DATA.TEST.PATH", value, report) {
                    cfg.path = v;
                }
            }
            "GT_PATH" => {
                if let Some(v) = get_str("DATA.TEST.GT_PATH", value, report) {
                    cfg.gt_path = v;
                }
            }
            "IN_MEMORY" => {
                if let Some(v) = get_bool("DATA.TEST.IN_MEMORY", value, report) {
                    cfg.in_memory = v;
                }
            }
            "PADDING" => {
                if let Some(v) =
                    get_int_seq("DATA.TEST.PADDING", value, "tuple of integers", report)
                {
                    cfg.padding = v;
                }
            }
            "OVERLAP" => {
                if let Some(v) =
                    get_float_seq("DATA.TEST.OVERLAP", value, "tuple of floats", report)
                {
                    cfg.overlap = v;
                }
            }
            _ => unknown(report, "DATA.TEST", key),
        }
    }
    cfg
}

fn resolve_augmentor(map: &Section, report: &mut ValidationReport) -> AugmentorConfig {
    let mut cfg = AugmentorConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "ENABLE" => {
                if let Some(v) = get_bool("AUGMENTOR.ENABLE", value, report) {
                    cfg.enable = v;
                }
            }
            "DA_PROB" => {
                if let Some(v) = get_float("AUGMENTOR.DA_PROB", value, report) {
                    cfg.da_prob = v;
                }
            }
            "VFLIP" => {
                if let Some(v) = get_bool("AUGMENTOR.VFLIP", value, report) {
                    cfg.vflip = v;
                }
            }
            "HFLIP" => {
                if let Some(v) = get_bool("AUGMENTOR.HFLIP", value, report) {
                    cfg.hflip = v;
                }
            }
            "ROT90" => {
                if let Some(v) = get_bool("AUGMENTOR.ROT90", value, report) {
                    cfg.rot90 = v;
                }
            }
            "RANDOM_ROT" => {
                if let Some(v) = get_bool("AUGMENTOR.RANDOM_ROT", value, report) {
                    cfg.random_rot = v;
                }
            }
            _ => unknown(report, "AUGMENTOR", key),
        }
    }
    cfg
}

fn resolve_model(map: &Section, report: &mut ValidationReport) -> ModelConfig {
    let mut cfg = ModelConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "ARCHITECTURE" => {
                if let Some(v) = get_str("MODEL.ARCHITECTURE", value, report) {
                    cfg.architecture = v;
                }
            }
            "FEATURE_MAPS" => {
                if let Some(v) =
                    get_int_seq("MODEL.FEATURE_MAPS", value, "list of integers", report)
                {
                    cfg.feature_maps = v;
                }
            }
            "DROPOUT_VALUES" => {
                if let Some(v) =
                    get_float_seq("MODEL.DROPOUT_VALUES", value, "list of floats", report)
                {
                    cfg.dropout_values = v;
                }
            }
            "BATCH_NORMALIZATION" => {
                if let Some(v) = get_bool("MODEL.BATCH_NORMALIZATION", value, report) {
                    cfg.batch_normalization = v;
                }
            }
            "KERNEL_INIT" => {
                if let Some(v) = get_str("MODEL.KERNEL_INIT", value, report) {
                    cfg.kernel_init = v;
                }
            }
            "ACTIVATION" => {
                if let Some(v) = get_str("MODEL.ACTIVATION", value, report) {
                    cfg.activation = v;
                }
            }
            "N_CLASSES" => {
                if let Some(v) = get_int("MODEL.N_CLASSES", value, report) {
                    cfg.n_classes = v;
                }
            }
            _ => unknown(report, "MODEL", key),
        }
    }
    cfg
}

fn resolve_train(map: &Section, report: &mut ValidationReport) -> TrainConfig {
    let mut cfg = TrainConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "ENABLE" => {
                if let Some(v) = get_bool("TRAIN.ENABLE", value, report) {
                    cfg.enable = v;
                }
            }
            "OPTIMIZER" => {
                if let Some(v) = get_str("TRAIN.OPTIMIZER", value, report) {
                    cfg.optimizer = v;
                }
            }
            "LR" => {
                if let Some(v) = get_float("TRAIN.LR", value, report) {
                    cfg.lr = v;
                }
            }
            "BATCH_SIZE" => {
                if let Some(v) = get_int("TRAIN.BATCH_SIZE", value, report) {
                    cfg.batch_size = v;
                }
            }
            "EPOCHS" => {
                if let Some(v) = get_int("TRAIN.EPOCHS", value, report) {
                    cfg.epochs = v;
                }
            }
            "PATIENCE" => {
                if let Some(v) = get_int("TRAIN.PATIENCE", value, report) {
                    cfg.patience = v;
                }
            }
            _ => unknown(report, "TRAIN", key),
        }
    }
    cfg
}

fn resolve_test(map: &Section, report: &mut ValidationReport) -> TestConfig {
    let mut cfg = TestConfig::default();
    for (key, value) in map {
        match key.as_str() {
            "ENABLE" => {
                if let Some(v) = get_bool("TEST.ENABLE", value, report) {
                    cfg.enable = v;
                }
            }
            "AUGMENTATION" => {
                if let Some(v) = get_bool("TEST.AUGMENTATION", value, report) {
                    cfg.augmentation = v;
                }
            }
            "FULL_IMG" => {
                if let Some(v) = get_bool("TEST.FULL_IMG", value, report) {
                    cfg.full_img = v;
                }
            }
            _ => unknown(report, "TEST", key),
        }
    }
    cfg
}

fn unknown(report: &mut ValidationReport, section: &str, key: &str) {
    report.push(ConfigError::UnknownKey {
        section: section.to_string(),
        key: key.to_string(),
    });
}
