//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `twigbridge.yml` configuration file format.

use crate::finder::Hints;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root configuration structure for twigbridge.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwigBridgeConfig {
    /// View search directories, highest priority first
    pub paths: Vec<PathBuf>,

    /// Replaces the default extension list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Twig file extensions, each registered with top priority in order
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,

    /// Namespace name to hint directories
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub namespaces: BTreeMap<String, HintPaths>,

    /// Named locations usable as `@alias/view`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locations: BTreeMap<String, PathBuf>,

    /// Inline templates served before any file lookup
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<String, String>,
}

impl Default for TwigBridgeConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            extensions: None,
            file_extensions: default_file_extensions(),
            namespaces: BTreeMap::new(),
            locations: BTreeMap::new(),
            templates: BTreeMap::new(),
        }
    }
}

fn default_file_extensions() -> Vec<String> {
    vec!["twig".to_string()]
}

/// Hint directories for a namespace: one path or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HintPaths {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl HintPaths {
    /// The directories in order.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            HintPaths::One(path) => vec![path.as_path()],
            HintPaths::Many(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }
}

impl From<HintPaths> for Hints {
    fn from(paths: HintPaths) -> Self {
        match paths {
            HintPaths::One(path) => Hints::from(path),
            HintPaths::Many(paths) => Hints::from(paths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: TwigBridgeConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, TwigBridgeConfig::default());
        assert_eq!(config.file_extensions, vec!["twig"]);
        assert!(config.extensions.is_none());
    }

    #[test]
    fn parses_full_document() {
        let yaml = r#"
paths:
  - resources/views
extensions: [blade.php, php]
file_extensions: [twig, html.twig]
namespaces:
  admin: resources/admin
  mail:
    - resources/mail
    - vendor/mail
locations:
  shared: resources/shared
templates:
  greeting: "Hello {{ name }}"
"#;
        let config: TwigBridgeConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.paths, vec![PathBuf::from("resources/views")]);
        assert_eq!(
            config.extensions,
            Some(vec!["blade.php".to_string(), "php".to_string()])
        );
        assert_eq!(config.file_extensions, vec!["twig", "html.twig"]);
        assert_eq!(
            config.namespaces["admin"],
            HintPaths::One(PathBuf::from("resources/admin"))
        );
        assert_eq!(
            config.namespaces["mail"].paths(),
            vec![Path::new("resources/mail"), Path::new("vendor/mail")]
        );
        assert_eq!(
            config.locations["shared"],
            PathBuf::from("resources/shared")
        );
        assert_eq!(config.templates["greeting"], "Hello {{ name }}");
    }

    #[test]
    fn hint_paths_convert_to_hints() {
        let one: Hints = HintPaths::One(PathBuf::from("/a")).into();
        let many: Hints = HintPaths::Many(vec![PathBuf::from("/a"), PathBuf::from("/b")]).into();
        assert_eq!(one.len(), 1);
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn serializes_without_empty_sections() {
        let config = TwigBridgeConfig {
            paths: vec![PathBuf::from("views")],
            ..Default::default()
        };
        insta::assert_yaml_snapshot!(config, @r###"
        paths:
          - views
        file_extensions:
          - twig
        "###);
    }
}
