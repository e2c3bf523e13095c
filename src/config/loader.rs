//! Configuration file discovery and loading.
//!
//! Configuration lives next to the application's other config files:
//! 1. Base config (`config/twigbridge.yml`)
//! 2. Local overrides (`config/twigbridge.local.yml`), merged on top

use crate::config::merger::merge_configs;
use crate::config::schema::TwigBridgeConfig;
use crate::error::{Result, TwigBridgeError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "twigbridge.yml";
const LOCAL_CONFIG_FILE: &str = "twigbridge.local.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base config: config/twigbridge.yml
    pub base: Option<PathBuf>,

    /// Local overrides: config/twigbridge.local.yml
    pub local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            base: existing(Self::base_path(project_root)),
            local: existing(project_root.join(CONFIG_DIR).join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Where the base config is expected for `project_root`.
    pub fn base_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.base.iter().chain(self.local.iter()).collect()
    }

    /// Check if the base config exists.
    pub fn has_base_config(&self) -> bool {
        self.base.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TwigBridgeConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a config, using `source_path` for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<TwigBridgeConfig> {
    serde_yaml::from_str(content).map_err(|e| TwigBridgeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| TwigBridgeError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses as null; treat it as an empty mapping.
    if value.is_null() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    Ok(value)
}

/// Load the base config and merge local overrides on top.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the base config does not exist.
/// Returns `ConfigParseError` if any file, or the merged result, is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<TwigBridgeConfig> {
    let paths = ConfigPaths::discover(project_root);
    let base_path = ConfigPaths::base_path(project_root);

    if !paths.has_base_config() {
        return Err(TwigBridgeError::ConfigNotFound { path: base_path });
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading config layer {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| TwigBridgeError::ConfigParseError {
        path: base_path,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<TwigBridgeConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TwigBridgeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TwigBridgeError::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, file: &str, content: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn discover_finds_base_and_local() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), CONFIG_FILE, "paths: [views]");
        write_config(temp.path(), LOCAL_CONFIG_FILE, "");

        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.has_base_config());
        assert!(paths.local.is_some());
        assert_eq!(paths.all_existing().len(), 2);
        assert!(paths.all_existing()[0].ends_with(CONFIG_FILE));
    }

    #[test]
    fn discover_returns_none_for_missing_configs() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(!paths.has_base_config());
        assert!(paths.local.is_none());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn load_config_file_parses_valid_yaml() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), CONFIG_FILE, "paths: [resources/views]");

        let config = load_config_file(&ConfigPaths::base_path(temp.path())).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("resources/views")]);
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, TwigBridgeError::ConfigNotFound { .. }));
    }

    #[test]
    fn parse_config_reports_path_on_error() {
        let err = parse_config("paths: {{", Path::new("/cfg/twigbridge.yml")).unwrap_err();
        match err {
            TwigBridgeError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("/cfg/twigbridge.yml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_merged_config_requires_base() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), LOCAL_CONFIG_FILE, "paths: [views]");

        let err = load_merged_config(temp.path()).unwrap_err();
        assert!(matches!(err, TwigBridgeError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_merged_config_applies_local_overrides() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            CONFIG_FILE,
            "paths: [resources/views]\nnamespaces:\n  admin: resources/admin\n",
        );
        write_config(
            temp.path(),
            LOCAL_CONFIG_FILE,
            "namespaces:\n  debug: local/debug\n",
        );

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("resources/views")]);
        assert!(config.namespaces.contains_key("admin"));
        assert!(config.namespaces.contains_key("debug"));
    }

    #[test]
    fn load_merged_config_tolerates_empty_local_file() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), CONFIG_FILE, "paths: [views]");
        write_config(temp.path(), LOCAL_CONFIG_FILE, "");

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("views")]);
    }

    #[test]
    fn load_config_with_override_skips_merging() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), CONFIG_FILE, "paths: [views]");
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "paths: [other]").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("other")]);

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("views")]);
    }
}
