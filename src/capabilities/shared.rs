//! Shared handle for callers that need one configuration across tasks.
//!
//! Each operation takes the lock once, so a category cascade is never seen
//! half-applied by another holder.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::{CapabilityConfiguration, EnabledCount};
use super::snapshot::ConfigurationSnapshot;
use crate::error::CapabilityError;

#[derive(Debug, Clone)]
pub struct SharedConfiguration {
    inner: Arc<RwLock<CapabilityConfiguration>>,
}

impl SharedConfiguration {
    pub fn new(model: CapabilityConfiguration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    pub async fn toggle_tool(&self, tool_id: &str) -> Result<bool, CapabilityError> {
        self.inner.write().await.toggle_tool(tool_id)
    }

    pub async fn toggle_category(&self, category_id: &str) -> Result<bool, CapabilityError> {
        self.inner.write().await.toggle_category(category_id)
    }

    pub async fn reset(&self) {
        self.inner.write().await.reset();
    }

    pub async fn enabled_count(&self) -> EnabledCount {
        self.inner.read().await.enabled_count()
    }

    pub async fn enabled_count_for_category(
        &self,
        category_id: &str,
    ) -> Result<EnabledCount, CapabilityError> {
        self.inner.read().await.enabled_count_for_category(category_id)
    }

    /// Owned copies of the enabled tool ids.
    pub async fn enabled_tool_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .await
            .enabled_tool_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub async fn snapshot(&self) -> ConfigurationSnapshot {
        self.inner.read().await.snapshot()
    }
}
