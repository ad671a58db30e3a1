//! Built-in catalog of the assistant's tools.

use super::catalog::{CapabilityCatalog, ToolCategory, ToolDefinition};

/// The catalog the assistant ships with.
pub fn builtin_catalog() -> CapabilityCatalog {
    CapabilityCatalog::new(vec![
        ToolCategory::new("files", "Files", "Read and modify files in the workspace")
            .with_tool(ToolDefinition::new(
                "file_get",
                "Read file",
                "Read the contents of a file",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "file_put",
                "Write file",
                "Create or overwrite a file",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "file_delete",
                "Delete file",
                "Remove a file from the workspace",
                false,
            )),
        ToolCategory::new("shell", "Shell", "Run code and change the project tree")
            .with_tool(ToolDefinition::new(
                "shell",
                "Shell",
                "Run a shell command on the host",
                false,
            ))
            .with_tool(ToolDefinition::new(
                "python_exec",
                "Python sandbox",
                "Run a Python snippet in the remote sandbox",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "apply_patch",
                "Apply patch",
                "Apply a unified diff to workspace files",
                false,
            )),
        ToolCategory::new("memory", "Memory", "Long-term notes the agent keeps")
            .with_tool(ToolDefinition::new(
                "memory_search",
                "Search memory",
                "Search stored notes",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "memory_read",
                "Read memory",
                "Read a stored note",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "memory_write",
                "Write memory",
                "Store or update a note",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "memory_tree",
                "Memory tree",
                "Show the layout of stored notes",
                false,
            )),
        ToolCategory::new("web", "Web", "Reach the network")
            .with_tool(ToolDefinition::new(
                "http",
                "HTTP request",
                "Make an HTTP request",
                false,
            ))
            .with_tool(ToolDefinition::new(
                "web_search",
                "Web search",
                "Search the web",
                true,
            )),
        ToolCategory::new("utilities", "Utilities", "Small helpers")
            .with_tool(ToolDefinition::new(
                "list_dir",
                "List directory",
                "List entries under a directory",
                true,
            ))
            .with_tool(ToolDefinition::new("echo", "Echo", "Echo input back", true))
            .with_tool(ToolDefinition::new(
                "time",
                "Time",
                "Current date and time",
                true,
            ))
            .with_tool(ToolDefinition::new(
                "json",
                "JSON",
                "Parse and query JSON",
                true,
            )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn builtin_category_ids() {
        let catalog = builtin_catalog();
        let ids: Vec<_> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["files", "shell", "memory", "web", "utilities"]);
    }

    #[test]
    fn files_category_defaults() {
        let catalog = builtin_catalog();
        let files = catalog.category("files").unwrap();
        let defaults: Vec<_> = files
            .tools
            .iter()
            .map(|t| (t.id.as_str(), t.default_enabled))
            .collect();
        assert_eq!(
            defaults,
            [("file_get", true), ("file_put", true), ("file_delete", false)]
        );
    }
}
