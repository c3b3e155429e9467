//! Immutable configuration snapshot

use crate::config::schema::WorkflowConfig;
use std::ops::Deref;
use std::sync::Arc;

/// A frozen, read-only workflow configuration
///
/// Cloning is cheap (an `Arc` bump) so the snapshot can be handed to any
/// number of worker threads without locking.
#[derive(Debug, Clone)]
pub struct FrozenConfig {
    inner: Arc<WorkflowConfig>,
}

impl FrozenConfig {
    pub(crate) fn new(config: WorkflowConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    /// Freezing an already-frozen configuration is a no-op returning an
    /// equivalent snapshot.
    pub fn freeze(&self) -> Self {
        self.clone()
    }

    /// Borrow the underlying configuration
    pub fn get(&self) -> &WorkflowConfig {
        &self.inner
    }
}

impl Deref for FrozenConfig {
    type Target = WorkflowConfig;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PartialEq for FrozenConfig {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freeze_is_idempotent() {
        let frozen = WorkflowConfig::default().freeze();
        let again = frozen.freeze();
        assert_eq!(frozen, again);
        assert!(Arc::ptr_eq(&frozen.inner, &again.inner));
    }

    #[test]
    fn deref_exposes_sections() {
        let frozen = WorkflowConfig::default().freeze();
        assert_eq!(frozen.system.num_cpus, -1);
        assert_eq!(frozen.get().train.batch_size, 2);
    }
}
