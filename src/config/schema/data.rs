//! DATA section - paths, patch geometry and split settings

use super::problem::Ndim;
use serde::{Deserialize, Serialize};

/// Data configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct DataConfig {
    /// Patch shape: one entry per spatial axis plus a trailing channel count
    pub patch_size: Vec<i64>,

    /// Normalization mode applied before feeding patches to the network
    pub normalization: String,

    pub train: TrainDataConfig,

    pub val: ValDataConfig,

    pub test: TestDataConfig,
}

impl DataConfig {
    /// Defaults sized for the given dimensionality
    pub fn default_for(ndim: Ndim) -> Self {
        let patch_size = match ndim {
            Ndim::TwoD => vec![256, 256, 1],
            Ndim::ThreeD => vec![40, 128, 128, 1],
        };
        Self {
            patch_size,
            normalization: "div".to_string(),
            train: TrainDataConfig::default_for(ndim),
            val: ValDataConfig::default(),
            test: TestDataConfig::default_for(ndim),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::default_for(Ndim::TwoD)
    }
}

/// DATA.TRAIN sub-block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct TrainDataConfig {
    /// Directory with training images
    pub path: String,

    /// Directory with training ground truth
    pub gt_path: String,

    /// Keep the full training set resident in memory
    pub in_memory: bool,

    /// Per-axis padding applied when extracting patches
    pub padding: Vec<i64>,

    /// Per-axis patch overlap fraction, each in [0, 1)
    pub overlap: Vec<f64>,
}

impl TrainDataConfig {
    pub fn default_for(ndim: Ndim) -> Self {
        Self {
            path: String::new(),
            gt_path: String::new(),
            in_memory: true,
            padding: vec![0; ndim.axes()],
            overlap: vec![0.0; ndim.axes()],
        }
    }
}

impl Default for TrainDataConfig {
    fn default() -> Self {
        Self::default_for(Ndim::TwoD)
    }
}

/// DATA.VAL sub-block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct ValDataConfig {
    /// Carve the validation set out of the training data
    pub from_train: bool,

    /// Fraction of the training set used for validation, in [0, 1]
    pub split_train: f64,

    /// Directory with validation images (when FROM_TRAIN is False)
    pub path: String,

    /// Directory with validation ground truth
    pub gt_path: String,

    pub in_memory: bool,
}

impl Default for ValDataConfig {
    fn default() -> Self {
        Self {
            from_train: true,
            split_train: 0.1,
            path: String::new(),
            gt_path: String::new(),
            in_memory: true,
        }
    }
}

/// DATA.TEST sub-block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct TestDataConfig {
    /// Directory with test images
    pub path: String,

    /// Directory with test ground truth, empty when unavailable
    pub gt_path: String,

    pub in_memory: bool,

    pub padding: Vec<i64>,

    pub overlap: Vec<f64>,
}

impl TestDataConfig {
    pub fn default_for(ndim: Ndim) -> Self {
        Self {
            path: String::new(),
            gt_path: String::new(),
            in_memory: false,
            padding: vec![0; ndim.axes()],
            overlap: vec![0.0; ndim.axes()],
        }
    }
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self::default_for(Ndim::TwoD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_dimensionality() {
        let d2 = DataConfig::default_for(Ndim::TwoD);
        assert_eq!(d2.patch_size, vec![256, 256, 1]);
        assert_eq!(d2.train.padding.len(), 2);

        let d3 = DataConfig::default_for(Ndim::ThreeD);
        assert_eq!(d3.patch_size, vec![40, 128, 128, 1]);
        assert_eq!(d3.train.overlap.len(), 3);
    }
}
