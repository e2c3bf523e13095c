//! Configuration loading, parsing, and validation.
//!
//! This module handles the YAML configuration that sets up a view finder:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering of local overrides in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use twigbridge::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join("config");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("twigbridge.yml"), "paths: [resources/views]").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.paths.len(), 1);
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is discovered and merged in this order:
//! 1. Base config (`config/twigbridge.yml`)
//! 2. Local overrides (`config/twigbridge.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{HintPaths, TwigBridgeConfig};
pub use validator::{validate, validate_config, ValidationError};
