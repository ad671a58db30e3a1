//! Run-time capability configuration: per-tool enabled flags and per-category
//! group switches.
//!
//! A category switch is its own flag. It is set to `true` for every category on
//! initialization and only changes through [`CapabilityConfiguration::toggle_category`].
//! Toggling a single tool never touches it, so the switch can read "on" while
//! every tool in the category is off. Counts are always computed from the
//! per-tool flags on demand.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::CapabilityCatalog;
use crate::error::CapabilityError;

/// Enabled/total tool counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledCount {
    pub enabled: usize,
    pub total: usize,
}

/// Mutable configuration state for one session.
#[derive(Debug, Clone)]
pub struct CapabilityConfiguration {
    session_id: Uuid,
    catalog: Arc<CapabilityCatalog>,
    // Keyed by every tool/category id in `catalog` once `reset` has run.
    pub(super) tool_enabled: HashMap<String, bool>,
    pub(super) category_switch: HashMap<String, bool>,
}

impl CapabilityConfiguration {
    /// Build a fresh model from catalog defaults.
    pub fn initialize(catalog: impl Into<Arc<CapabilityCatalog>>) -> Self {
        let mut model = Self {
            session_id: Uuid::new_v4(),
            catalog: catalog.into(),
            tool_enabled: HashMap::new(),
            category_switch: HashMap::new(),
        };
        model.reset();
        tracing::info!(
            session = %model.session_id,
            tools = model.tool_enabled.len(),
            categories = model.category_switch.len(),
            "Initialized capability configuration"
        );
        model
    }

    /// Discard every change and go back to catalog defaults.
    pub fn reset(&mut self) {
        self.tool_enabled.clear();
        self.category_switch.clear();

        for category in self.catalog.categories() {
            if self.category_switch.insert(category.id.clone(), true).is_some() {
                tracing::warn!(category = %category.id, "Duplicate category id in catalog");
            }
            for tool in &category.tools {
                // Last writer wins on a colliding id.
                if self
                    .tool_enabled
                    .insert(tool.id.clone(), tool.default_enabled)
                    .is_some()
                {
                    tracing::warn!(tool = %tool.id, "Duplicate tool id in catalog");
                }
            }
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// Flip a single tool. Leaves every other tool and every switch alone.
    pub fn toggle_tool(&mut self, tool_id: &str) -> Result<bool, CapabilityError> {
        let enabled = self
            .tool_enabled
            .get_mut(tool_id)
            .ok_or_else(|| CapabilityError::unknown_tool(tool_id))?;
        *enabled = !*enabled;
        tracing::debug!(tool = %tool_id, enabled = *enabled, "Toggled tool");
        Ok(*enabled)
    }

    /// Flip a category switch and force every tool in the category to the new
    /// value, overwriting individual choices. Returns the new switch value.
    pub fn toggle_category(&mut self, category_id: &str) -> Result<bool, CapabilityError> {
        let category = self
            .catalog
            .category(category_id)
            .ok_or_else(|| CapabilityError::unknown_category(category_id))?;
        let switch = self
            .category_switch
            .get_mut(category_id)
            .ok_or_else(|| CapabilityError::unknown_category(category_id))?;

        *switch = !*switch;
        let value = *switch;
        for tool in &category.tools {
            self.tool_enabled.insert(tool.id.clone(), value);
        }

        tracing::debug!(
            category = %category_id,
            enabled = value,
            tools = category.tools.len(),
            "Toggled category"
        );
        Ok(value)
    }

    pub fn is_tool_enabled(&self, tool_id: &str) -> Result<bool, CapabilityError> {
        self.tool_enabled
            .get(tool_id)
            .copied()
            .ok_or_else(|| CapabilityError::unknown_tool(tool_id))
    }

    /// The group switch for a category. Not derived from its tools.
    pub fn category_switch(&self, category_id: &str) -> Result<bool, CapabilityError> {
        self.category_switch
            .get(category_id)
            .copied()
            .ok_or_else(|| CapabilityError::unknown_category(category_id))
    }

    /// Counts over every tool in the model.
    pub fn enabled_count(&self) -> EnabledCount {
        EnabledCount {
            enabled: self.tool_enabled.values().filter(|e| **e).count(),
            total: self.tool_enabled.len(),
        }
    }

    /// Counts restricted to the tools of one category.
    pub fn enabled_count_for_category(
        &self,
        category_id: &str,
    ) -> Result<EnabledCount, CapabilityError> {
        let category = self
            .catalog
            .category(category_id)
            .ok_or_else(|| CapabilityError::unknown_category(category_id))?;
        let enabled = category
            .tools
            .iter()
            .filter(|t| self.tool_enabled.get(&t.id).copied().unwrap_or(false))
            .count();
        Ok(EnabledCount {
            enabled,
            total: category.tools.len(),
        })
    }

    /// Ids of enabled tools, in catalog order.
    pub fn enabled_tool_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.catalog
            .tools()
            .filter(|t| self.tool_enabled.get(&t.id).copied().unwrap_or(false))
            .filter(|t| seen.insert(t.id.as_str()))
            .map(|t| t.id.as_str())
            .collect()
    }
}
