//! SYSTEM section - resource hints for the workflow engine

use serde::{Deserialize, Serialize};

/// Resource hints passed through to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct SystemConfig {
    /// CPU count, -1 means all available cores
    pub num_cpus: i64,

    /// Number of GPUs to use
    pub num_gpus: i64,

    /// Global random seed
    pub seed: i64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            num_cpus: -1,
            num_gpus: 1,
            seed: 0,
        }
    }
}
