//! Static catalog of tool categories and tools.
//!
//! The catalog is built once by a loader (see [`crate::config::CatalogConfig`])
//! and only ever read afterwards. Id uniqueness is the loader's job;
//! [`CapabilityCatalog::validate`] is there for loaders that want to check it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single togglable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Stable id, unique across the whole catalog.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Initial enabled state when a model is (re)initialized.
    #[serde(default = "default_enabled")]
    pub default_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ToolDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        default_enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            default_enabled,
        }
    }
}

/// A named, ordered group of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display order.
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
}

impl ToolCategory {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tools: Vec::new(),
        }
    }

    /// Append a tool (builder style).
    pub fn with_tool(mut self, tool: ToolDefinition) -> Self {
        self.tools.push(tool);
        self
    }

    /// Whether a tool with this id belongs to the category.
    pub fn contains(&self, tool_id: &str) -> bool {
        self.tools.iter().any(|t| t.id == tool_id)
    }
}

/// Ordered sequence of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityCatalog {
    #[serde(default)]
    categories: Vec<ToolCategory>,
}

impl CapabilityCatalog {
    pub fn new(categories: Vec<ToolCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[ToolCategory] {
        &self.categories
    }

    /// Look up a category by id. With duplicate ids the first one wins.
    pub fn category(&self, id: &str) -> Option<&ToolCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a tool by id across every category.
    pub fn tool(&self, id: &str) -> Option<&ToolDefinition> {
        self.tools().find(|t| t.id == id)
    }

    /// The category that owns a tool.
    pub fn category_of(&self, tool_id: &str) -> Option<&ToolCategory> {
        self.categories.iter().find(|c| c.contains(tool_id))
    }

    /// Every tool, in category order then display order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.categories.iter().flat_map(|c| c.tools.iter())
    }

    /// Number of tool entries (duplicates counted separately).
    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Check that every tool id and every category id appears exactly once.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId {
                    id: category.id.clone(),
                });
            }
        }

        let mut tool_ids = HashSet::new();
        for tool in self.tools() {
            if !tool_ids.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateToolId {
                    id: tool.id.clone(),
                });
            }
        }
        Ok(())
    }
}
