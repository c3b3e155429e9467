//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::config::schema::WorkflowConfig;
use crate::config::load_config;

/// Format problem description as a string
pub fn format_problem_info(cfg: &WorkflowConfig) -> String {
    format!(
        "  Workflow: {}\n  Dimensionality: {}",
        cfg.problem.kind.as_str(),
        cfg.problem.ndim.as_str()
    )
}

/// Format data configuration as a string
pub fn format_data_info(cfg: &WorkflowConfig) -> String {
    let mut lines = vec![
        format!("  Patch size: {:?}", cfg.data.patch_size),
        format!("  Normalization: {}", cfg.data.normalization),
    ];
    if !cfg.data.train.path.is_empty() {
        lines.push(format!("  Training data: {}", cfg.data.train.path));
    }
    if cfg.data.val.from_train {
        lines.push(format!(
            "  Validation: {:.0}% split from training data",
            cfg.data.val.split_train * 100.0
        ));
    } else if !cfg.data.val.path.is_empty() {
        lines.push(format!("  Validation data: {}", cfg.data.val.path));
    }
    if !cfg.data.test.path.is_empty() {
        lines.push(format!("  Test data: {}", cfg.data.test.path));
    }
    lines.join("\n")
}

/// Format model configuration as a string
pub fn format_model_info(cfg: &WorkflowConfig) -> String {
    let mut lines = vec![
        format!("  Architecture: {}", cfg.model.architecture),
        format!("  Feature maps: {:?}", cfg.model.feature_maps),
        format!("  Activation: {}", cfg.model.activation),
    ];
    if cfg.model.batch_normalization {
        lines.push("  Batch normalization: enabled".to_string());
    }
    lines.join("\n")
}

/// Format training configuration as a string
pub fn format_train_info(cfg: &WorkflowConfig) -> Option<String> {
    if !cfg.train.enable {
        return None;
    }
    let mut lines = vec![
        "  Training:".to_string(),
        format!("    Optimizer: {} (lr={})", cfg.train.optimizer, cfg.train.lr),
        format!("    Batch size: {}", cfg.train.batch_size),
        format!("    Epochs: {}", cfg.train.epochs),
    ];
    if cfg.train.patience >= 0 {
        lines.push(format!("    Early stopping patience: {}", cfg.train.patience));
    }
    lines.join("\n").into()
}

/// Format inference configuration as a string
pub fn format_test_info(cfg: &WorkflowConfig) -> Option<String> {
    if !cfg.test.enable {
        return None;
    }
    let mut lines = vec!["  Inference:".to_string()];
    if cfg.test.full_img {
        lines.push("    Full-image reconstruction".to_string());
    } else {
        lines.push("    Patch-wise prediction".to_string());
    }
    if cfg.test.augmentation {
        lines.push("    Test-time augmentation".to_string());
    }
    lines.join("\n").into()
}

/// Print detailed configuration summary
pub fn print_detailed_summary(cfg: &WorkflowConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_problem_info(cfg));
    println!();
    println!("{}", format_data_info(cfg));
    println!();
    println!("{}", format_model_info(cfg));

    if let Some(train_info) = format_train_info(cfg) {
        println!();
        println!("{train_info}");
    }

    if let Some(test_info) = format_test_info(cfg) {
        println!();
        println!("{test_info}");
    }
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let frozen = load_config(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(frozen.get());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Ndim, WorkflowKind};

    fn make_test_config() -> WorkflowConfig {
        let mut cfg = WorkflowConfig::default();
        cfg.problem.kind = WorkflowKind::Denoising;
        cfg.data.train.path = "/data/train/x".to_string();
        cfg.train.enable = true;
        cfg.train.optimizer = "ADAM".to_string();
        cfg.train.lr = 4e-4;
        cfg.train.batch_size = 128;
        cfg
    }

    #[test]
    fn problem_info_names_workflow_and_ndim() {
        let text = format_problem_info(&make_test_config());
        assert!(text.contains("DENOISING"));
        assert!(text.contains("2D"));
    }

    #[test]
    fn data_info_reports_split_validation() {
        let text = format_data_info(&make_test_config());
        assert!(text.contains("10% split"));
        assert!(text.contains("/data/train/x"));
    }

    #[test]
    fn data_info_reports_external_validation() {
        let mut cfg = make_test_config();
        cfg.data.val.from_train = false;
        cfg.data.val.path = "/data/val/x".to_string();
        let text = format_data_info(&cfg);
        assert!(text.contains("/data/val/x"));
        assert!(!text.contains("split"));
    }

    #[test]
    fn train_info_absent_when_disabled() {
        let mut cfg = make_test_config();
        cfg.train.enable = false;
        assert!(format_train_info(&cfg).is_none());
    }

    #[test]
    fn train_info_includes_optimizer_and_lr() {
        let text = format_train_info(&make_test_config()).unwrap();
        assert!(text.contains("ADAM"));
        assert!(text.contains("0.0004"));
        assert!(text.contains("128"));
    }

    #[test]
    fn test_info_reports_prediction_mode() {
        let mut cfg = make_test_config();
        cfg.test.enable = true;
        cfg.test.full_img = false;
        cfg.test.augmentation = true;
        let text = format_test_info(&cfg).unwrap();
        assert!(text.contains("Patch-wise"));
        assert!(text.contains("augmentation"));
    }

    #[test]
    fn model_info_mentions_batch_norm_only_when_enabled() {
        let mut cfg = make_test_config();
        assert!(!format_model_info(&cfg).contains("Batch normalization"));
        cfg.model.batch_normalization = true;
        assert!(format_model_info(&cfg).contains("Batch normalization"));
    }
}
