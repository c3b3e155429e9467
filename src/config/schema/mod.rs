//! Typed workflow configuration schema
//!
//! One submodule per top-level document section:
//! - `system` - resource hints
//! - `problem` - workflow kind, dimensionality, task-specific sub-blocks
//! - `data` - paths, patch geometry, split settings
//! - `augmentor` - augmentation flags
//! - `model` - architecture and hyperparameters
//! - `train` - optimizer and training schedule
//! - `test` - inference flags
//! - `core` - the `WorkflowConfig` root

pub mod augmentor;
pub mod core;
pub mod data;
pub mod model;
pub mod problem;
pub mod system;
pub mod test;
pub mod train;

pub use augmentor::AugmentorConfig;
pub use core::WorkflowConfig;
pub use data::{DataConfig, TestDataConfig, TrainDataConfig, ValDataConfig};
pub use model::ModelConfig;
pub use problem::{
    DenoisingConfig, DetectionConfig, InstanceSegConfig, Ndim, ProblemConfig, WorkflowKind,
};
pub use system::SystemConfig;
pub use test::TestConfig;
pub use train::TrainConfig;
