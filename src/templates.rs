//! Starter document generation
//!
//! Generates ready-to-edit workflow documents for the `init` command. Every
//! template round-trips through the resolver, so a freshly generated file
//! validates as-is.

use crate::config::schema::{DataConfig, Ndim, WorkflowConfig, WorkflowKind};

/// Build a starter configuration for the given workflow
pub fn starter_config(kind: WorkflowKind, ndim: Ndim) -> WorkflowConfig {
    let mut cfg = WorkflowConfig::default();
    cfg.problem.kind = kind;
    cfg.problem.ndim = ndim;
    cfg.data = DataConfig::default_for(ndim);
    cfg.data.train.path = "/path/to/train/x".to_string();
    cfg.data.train.gt_path = "/path/to/train/y".to_string();
    cfg.data.test.path = "/path/to/test/x".to_string();
    cfg.data.test.gt_path = "/path/to/test/y".to_string();
    cfg.train.enable = true;
    cfg.test.enable = true;
    // Full-image inference only exists for 2D workflows.
    cfg.test.full_img = ndim == Ndim::TwoD;

    match kind {
        WorkflowKind::Denoising => {
            // Noise2Void trains without ground truth.
            cfg.data.train.gt_path = String::new();
            cfg.data.test.gt_path = String::new();
            if ndim == Ndim::TwoD {
                cfg.data.patch_size = vec![64, 64, 1];
            }
            cfg.augmentor.enable = true;
            cfg.augmentor.vflip = true;
            cfg.augmentor.hflip = true;
            cfg.augmentor.rot90 = true;
            cfg.model.feature_maps = vec![32, 64, 96];
            cfg.model.dropout_values = vec![0.1, 0.1, 0.1];
            cfg.model.batch_normalization = true;
            cfg.train.optimizer = "ADAM".to_string();
            cfg.train.lr = 4e-4;
            cfg.train.batch_size = 128;
            cfg.train.epochs = 200;
            cfg.train.patience = 100;
        }
        WorkflowKind::SuperResolution => {
            cfg.model.architecture = "edsr".to_string();
        }
        WorkflowKind::InstanceSeg => {
            cfg.train.optimizer = "ADAM".to_string();
            cfg.train.lr = 1e-4;
        }
        _ => {}
    }
    cfg
}

/// Render a starter configuration as YAML
pub fn starter_yaml(kind: WorkflowKind, ndim: Ndim) -> String {
    let cfg = starter_config(kind, ndim);
    serde_yaml::to_string(&cfg).unwrap_or_else(|_| "# template generation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, Document};

    #[test]
    fn every_template_round_trips_through_the_resolver() {
        for choice in WorkflowKind::CHOICES {
            let kind = WorkflowKind::parse(choice).unwrap();
            for ndim in [Ndim::TwoD, Ndim::ThreeD] {
                let yaml = starter_yaml(kind, ndim);
                let doc = Document::from_str(&yaml)
                    .unwrap_or_else(|e| panic!("{choice} {} template parses: {e}", ndim.as_str()));
                if let Err(report) = config::validate(&doc) {
                    panic!("{choice} {} template validates:\n{report}", ndim.as_str());
                }
                let cfg = config::resolve_defaults(&doc).unwrap();
                assert_eq!(cfg.problem.kind, kind);
                assert_eq!(cfg.problem.ndim, ndim);
            }
        }
    }

    #[test]
    fn denoising_template_matches_reference_settings() {
        let cfg = starter_config(WorkflowKind::Denoising, Ndim::TwoD);
        assert_eq!(cfg.data.patch_size, vec![64, 64, 1]);
        assert_eq!(cfg.model.feature_maps, vec![32, 64, 96]);
        assert_eq!(cfg.train.batch_size, 128);
        assert!((cfg.train.lr - 4e-4).abs() < 1e-12);
    }
}
