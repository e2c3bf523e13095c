//! Error types for view resolution and configuration.
//!
//! This module defines [`TwigBridgeError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolver failures are split three ways so callers can tell a missing
//!   view ([`TwigBridgeError::ViewNotFound`]) from a broken name or namespace
//!   setup ([`TwigBridgeError::InvalidName`], [`TwigBridgeError::UnknownNamespace`])
//! - Configuration loading has its own variants carrying the offending path
//! - Use `anyhow::Error` (via `TwigBridgeError::Other`) in custom loaders

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for twigbridge operations.
#[derive(Debug, Error)]
pub enum TwigBridgeError {
    /// A hinted view name is malformed (missing `/` or wrong `::` count).
    #[error("View [{name}] has an invalid name.")]
    InvalidName { name: String },

    /// The view name references a namespace with no registered hint paths.
    #[error("No hint path defined for [{namespace}].")]
    UnknownNamespace { namespace: String },

    /// No candidate file exists in any searched directory.
    #[error("View [{name}] not found.")]
    ViewNotFound { name: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TwigBridgeError {
    /// True when the view simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ViewNotFound { .. })
    }

    /// True when the failure points at a naming or configuration mistake
    /// rather than a missing file.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidName { .. }
                | Self::UnknownNamespace { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for twigbridge operations.
pub type Result<T> = std::result::Result<T, TwigBridgeError>;
