//! Serializable view of a configuration, for presentation or for handing to
//! whatever layer enforces tool availability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{CapabilityConfiguration, EnabledCount};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryState {
    pub id: String,
    pub name: String,
    /// Group switch as last set by a category toggle.
    pub switch: bool,
    pub enabled_count: EnabledCount,
    pub tools: Vec<ToolState>,
}

/// Point-in-time copy of a [`CapabilityConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    pub session_id: Uuid,
    pub taken_at: DateTime<Utc>,
    pub enabled_count: EnabledCount,
    pub categories: Vec<CategoryState>,
}

impl CapabilityConfiguration {
    /// Capture the current state in catalog order.
    pub fn snapshot(&self) -> ConfigurationSnapshot {
        // Every catalog id is a key in both maps, so indexing cannot miss.
        let categories = self
            .catalog()
            .categories()
            .iter()
            .map(|category| {
                let tools: Vec<ToolState> = category
                    .tools
                    .iter()
                    .map(|tool| ToolState {
                        id: tool.id.clone(),
                        name: tool.name.clone(),
                        enabled: self.tool_enabled[&tool.id],
                    })
                    .collect();
                CategoryState {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    switch: self.category_switch[&category.id],
                    enabled_count: EnabledCount {
                        enabled: tools.iter().filter(|t| t.enabled).count(),
                        total: tools.len(),
                    },
                    tools,
                }
            })
            .collect();

        ConfigurationSnapshot {
            session_id: self.session_id(),
            taken_at: Utc::now(),
            enabled_count: self.enabled_count(),
            categories,
        }
    }
}
