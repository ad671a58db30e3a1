//! Catalog loading configuration.

use std::path::PathBuf;

use crate::capabilities::{CapabilityCatalog, builtin_catalog};
use crate::error::ConfigError;

/// Env var naming a JSON catalog file.
pub const CATALOG_PATH_VAR: &str = "AGENT_CAPS_CATALOG";
/// Env var enabling id uniqueness checks on load.
pub const STRICT_VAR: &str = "AGENT_CAPS_STRICT";

/// Where the catalog comes from and how carefully it is checked.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file. `None` means the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Reject catalogs with duplicate tool or category ids.
    pub strict: bool,
}

impl CatalogConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let strict = match lookup(STRICT_VAR) {
            None => false,
            Some(raw) => parse_bool(STRICT_VAR, &raw)?,
        };

        Ok(Self {
            catalog_path,
            strict,
        })
    }

    /// Load the catalog this config points at.
    pub fn load_catalog(&self) -> crate::error::Result<CapabilityCatalog> {
        let catalog = match &self.catalog_path {
            None => builtin_catalog(),
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
                let catalog: CapabilityCatalog = serde_json::from_str(&raw).map_err(|e| {
                    ConfigError::ParseError(format!("{}: {}", path.display(), e))
                })?;
                tracing::info!(
                    path = %path.display(),
                    categories = catalog.categories().len(),
                    tools = catalog.tool_count(),
                    "Loaded catalog file"
                );
                catalog
            }
        };

        if self.strict {
            catalog.validate()?;
        }
        Ok(catalog)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    use crate::error::{CatalogError, Error};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_vars() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.catalog_path.is_none());
        assert!(!config.strict);
        assert_eq!(config.load_catalog().unwrap(), builtin_catalog());
    }

    #[test]
    fn reads_path_and_strict() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (CATALOG_PATH_VAR, "/tmp/catalog.json"),
            (STRICT_VAR, "Yes"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert!(config.strict);
    }

    #[test]
    fn rejects_bad_strict_value() {
        let err = CatalogConfig::from_lookup(lookup(&[(STRICT_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == STRICT_VAR));
    }

    #[test]
    fn rejects_blank_strict_value() {
        for raw in ["", "   "] {
            let err = CatalogConfig::from_lookup(lookup(&[(STRICT_VAR, raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "{raw:?}");
        }
    }

    #[test]
    fn loads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories":[{{"id":"files","name":"Files","tools":[
                {{"id":"file_get","name":"Read","default_enabled":true}},
                {{"id":"file_delete","name":"Delete","default_enabled":false}}
            ]}}]}}"#
        )
        .unwrap();

        let config = CatalogConfig {
            catalog_path: Some(file.path().to_path_buf()),
            strict: true,
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.tool_count(), 2);
        assert!(!catalog.tool("file_delete").unwrap().default_enabled);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig {
            catalog_path: Some(dir.path().join("absent.json")),
            strict: false,
        };
        assert!(matches!(
            config.load_catalog(),
            Err(Error::Config(ConfigError::Io(_)))
        ));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let config = CatalogConfig {
            catalog_path: Some(file.path().to_path_buf()),
            strict: false,
        };
        assert!(matches!(
            config.load_catalog(),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn strict_rejects_duplicates_lenient_accepts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories":[
                {{"id":"a","name":"A","tools":[{{"id":"x","name":"X"}}]}},
                {{"id":"b","name":"B","tools":[{{"id":"x","name":"X"}}]}}
            ]}}"#
        )
        .unwrap();

        let mut config = CatalogConfig {
            catalog_path: Some(file.path().to_path_buf()),
            strict: true,
        };
        assert!(matches!(
            config.load_catalog(),
            Err(Error::Catalog(CatalogError::DuplicateToolId { ref id })) if id == "x"
        ));

        config.strict = false;
        assert_eq!(config.load_catalog().unwrap().tool_count(), 2);
    }
}
