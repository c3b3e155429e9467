//! AUGMENTOR section - data augmentation flags

use serde::{Deserialize, Serialize};

/// Augmentation pipeline flags, all off by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct AugmentorConfig {
    /// Master switch for the augmentation pipeline
    pub enable: bool,

    /// Probability of applying each enabled transform, in [0, 1]
    pub da_prob: f64,

    pub vflip: bool,

    pub hflip: bool,

    /// Random rotation by multiples of 90 degrees
    pub rot90: bool,

    /// Random rotation by an arbitrary angle
    pub random_rot: bool,
}

impl Default for AugmentorConfig {
    fn default() -> Self {
        Self {
            enable: false,
            da_prob: 0.5,
            vflip: false,
            hflip: false,
            rot90: false,
            random_rot: false,
        }
    }
}
