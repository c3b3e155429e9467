//! TRAIN section - optimizer and training schedule

use serde::{Deserialize, Serialize};

/// Training schedule and optimizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct TrainConfig {
    /// Run the training stage
    pub enable: bool,

    /// Optimizer name: SGD, ADAM or ADAMW
    pub optimizer: String,

    /// Learning rate, in (0, 1]
    pub lr: f64,

    pub batch_size: i64,

    pub epochs: i64,

    /// Early-stopping patience in epochs, -1 disables it
    pub patience: i64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            enable: false,
            optimizer: "SGD".to_string(),
            lr: 1e-4,
            batch_size: 2,
            epochs: 360,
            patience: -1,
        }
    }
}
