//! Agent capability configuration: the tool catalog and the per-session
//! enable/disable state derived from it.

pub mod builtin;
pub mod catalog;
pub mod model;
pub mod shared;
pub mod snapshot;

pub use builtin::builtin_catalog;
pub use catalog::{CapabilityCatalog, ToolCategory, ToolDefinition};
pub use model::{CapabilityConfiguration, EnabledCount};
pub use shared::SharedConfiguration;
pub use snapshot::{CategoryState, ConfigurationSnapshot, ToolState};
