//! MODEL section - architecture selection and hyperparameters

use serde::{Deserialize, Serialize};

/// Network architecture and per-stage hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct ModelConfig {
    /// Architecture name, e.g. `unet`
    pub architecture: String,

    /// Feature maps per network stage
    pub feature_maps: Vec<i64>,

    /// Dropout per network stage, one entry per FEATURE_MAPS entry
    pub dropout_values: Vec<f64>,

    pub batch_normalization: bool,

    /// Weight initializer name
    pub kernel_init: String,

    /// Activation function name
    pub activation: String,

    /// Output classes
    pub n_classes: i64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            architecture: "unet".to_string(),
            feature_maps: vec![16, 32, 64, 128, 256],
            dropout_values: vec![0.0; 5],
            batch_normalization: false,
            kernel_init: "he_normal".to_string(),
            activation: "elu".to_string(),
            n_classes: 1,
        }
    }
}
