//! Configuration validation rules.
//!
//! This module catches configuration that would load fine but could never
//! resolve a view:
//! - Search paths and hint directories must not be empty strings
//! - Extensions must be non-empty and must not start with a dot
//! - Namespace names must be addressable by both hint syntaxes
//! - Location aliases must be usable after an `@`

use crate::config::schema::TwigBridgeConfig;
use crate::error::{Result, TwigBridgeError};
use crate::finder::{HINT_PATH_DELIMITER, HINT_PATH_TWIG_DELIMITER};
use std::path::Path;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Namespace name if the error is namespace-specific
    pub namespace: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            namespace: None,
        }
    }

    fn for_namespace(rule: &str, namespace: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            namespace: Some(namespace.to_string()),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// All errors are collected rather than stopping at the first one.
pub fn validate_config(config: &TwigBridgeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_paths(config));
    errors.extend(validate_extensions(config));
    errors.extend(validate_namespaces(config));
    errors.extend(validate_locations(config));

    errors
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

fn validate_paths(config: &TwigBridgeConfig) -> Vec<ValidationError> {
    config
        .paths
        .iter()
        .enumerate()
        .filter(|(_, path)| is_blank(path))
        .map(|(index, _)| {
            ValidationError::new("empty-path", format!("View path #{} is empty", index + 1))
        })
        .collect()
}

fn validate_extensions(config: &TwigBridgeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let listed = config.extensions.iter().flatten();

    for ext in listed.chain(config.file_extensions.iter()) {
        if ext.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-extension",
                "Extensions must not be empty".to_string(),
            ));
        } else if ext.starts_with('.') {
            errors.push(ValidationError::new(
                "extension-leading-dot",
                format!(
                    "Extension '{}' must be written without a leading dot ('{}')",
                    ext,
                    ext.trim_start_matches('.')
                ),
            ));
        }
    }

    errors
}

fn validate_namespaces(config: &TwigBridgeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, hints) in &config.namespaces {
        if name.is_empty()
            || name.contains(HINT_PATH_DELIMITER)
            || name.contains('/')
            || name.starts_with(HINT_PATH_TWIG_DELIMITER)
        {
            errors.push(ValidationError::for_namespace(
                "invalid-namespace",
                name,
                format!(
                    "Namespace '{}' cannot be referenced as '{}::view' or '@{}/view'",
                    name, name, name
                ),
            ));
        }

        let paths = hints.paths();
        if paths.is_empty() {
            errors.push(ValidationError::for_namespace(
                "namespace-without-hints",
                name,
                format!("Namespace '{}' has no hint directories", name),
            ));
        } else if paths.iter().any(|p| is_blank(p)) {
            errors.push(ValidationError::for_namespace(
                "empty-path",
                name,
                format!("Namespace '{}' has an empty hint directory", name),
            ));
        }
    }

    errors
}

fn validate_locations(config: &TwigBridgeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (alias, path) in &config.locations {
        if alias.is_empty() || alias.contains('/') || alias.starts_with(HINT_PATH_TWIG_DELIMITER) {
            errors.push(ValidationError::new(
                "invalid-location-alias",
                format!("Location alias '{}' cannot be used as '@alias/view'", alias),
            ));
        }
        if is_blank(path) {
            errors.push(ValidationError::new(
                "empty-path",
                format!("Location '{}' has an empty directory", alias),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &TwigBridgeConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(TwigBridgeError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
