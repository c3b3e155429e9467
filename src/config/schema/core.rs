//! Root workflow configuration

use super::augmentor::AugmentorConfig;
use super::data::DataConfig;
use super::model::ModelConfig;
use super::problem::ProblemConfig;
use super::system::SystemConfig;
use super::test::TestConfig;
use super::train::TrainConfig;
use crate::config::freeze::FrozenConfig;
use serde::{Deserialize, Serialize};

/// Fully-resolved workflow configuration
///
/// Produced once at startup by the resolver and treated as read-only by every
/// downstream stage. Call [`WorkflowConfig::freeze`] to obtain the shareable
/// snapshot handed to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct WorkflowConfig {
    pub system: SystemConfig,

    pub problem: ProblemConfig,

    pub data: DataConfig,

    pub augmentor: AugmentorConfig,

    pub model: ModelConfig,

    pub train: TrainConfig,

    pub test: TestConfig,
}

impl WorkflowConfig {
    /// Convert into an immutable, cheaply shareable snapshot
    pub fn freeze(self) -> FrozenConfig {
        FrozenConfig::new(self)
    }
}
