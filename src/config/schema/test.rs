//! TEST section - inference flags

use serde::{Deserialize, Serialize};

/// Inference stage flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct TestConfig {
    /// Run the inference stage
    pub enable: bool,

    /// Apply test-time augmentation
    pub augmentation: bool,

    /// Predict on full images instead of reconstructing from patches.
    /// Only available for 2D workflows.
    pub full_img: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            enable: false,
            augmentation: false,
            full_img: true,
        }
    }
}
