//! Info command implementation

use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::config::{resolve_defaults, Document};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let doc = Document::from_path(&args.config).map_err(|e| format!("Config error: {e}"))?;
    let cfg = resolve_defaults(&doc).map_err(|report| report.to_string())?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Workflow: {}", cfg.problem.kind.as_str());
            println!("Dimensionality: {}", cfg.problem.ndim.as_str());
            println!("Architecture: {}", cfg.model.architecture);
            println!("Patch size: {:?}", cfg.data.patch_size);
            println!(
                "Optimizer: {} (lr={})",
                cfg.train.optimizer, cfg.train.lr
            );
            println!("Epochs: {}", cfg.train.epochs);
            println!("Batch size: {}", cfg.train.batch_size);

            if cfg.augmentor.enable {
                println!("Augmentation: enabled");
            }
            if cfg.test.augmentation {
                println!("Test-time augmentation: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&cfg)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
