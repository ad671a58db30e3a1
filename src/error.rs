//! Error types for agent capabilities.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),
}

/// Configuration-related errors (catalog loading).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Catalog uniqueness violations, reported by `CapabilityCatalog::validate`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate tool id in catalog: {id}")]
    DuplicateToolId { id: String },

    #[error("Duplicate category id in catalog: {id}")]
    DuplicateCategoryId { id: String },
}

/// Errors from the configuration model. Both mean the caller passed an id
/// that was not part of the catalog the model was initialized from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("Unknown tool: {id}")]
    UnknownTool { id: String },

    #[error("Unknown category: {id}")]
    UnknownCategory { id: String },
}

impl CapabilityError {
    pub(crate) fn unknown_tool(id: &str) -> Self {
        Self::UnknownTool { id: id.to_string() }
    }

    pub(crate) fn unknown_category(id: &str) -> Self {
        Self::UnknownCategory { id: id.to_string() }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
