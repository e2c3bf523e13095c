//! twigbridge - View-name resolution for Twig templates.
//!
//! Maps logical view names such as `emails.welcome`, `admin::users.index`
//! or `@admin/users/index.twig` to template files on disk, searching an
//! ordered list of directories and candidate file names, and caching every
//! successful lookup.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`filesystem`] - Filesystem access used for lookups and reads
//! - [`finder`] - View name parsing, candidate generation, and resolution
//! - [`loader`] - Template loaders for the template engine
//! - [`provider`] - Building a configured finder and loader chain
//!
//! # Example
//!
//! ```
//! use twigbridge::filesystem::MemoryFilesystem;
//! use twigbridge::finder::ViewFinder;
//! use std::path::PathBuf;
//!
//! let fs = MemoryFilesystem::new().with_file("/views/users/index.blade.php", "");
//! let mut finder = ViewFinder::new(fs, ["/views"]);
//!
//! let path = finder.find("users.index").unwrap();
//! assert_eq!(path, PathBuf::from("/views/users/index.blade.php"));
//! ```
//!
//! For configuration-driven setup, see [`provider`] and the integration tests.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod finder;
pub mod loader;
pub mod provider;

pub use error::{Result, TwigBridgeError};
pub use finder::ViewFinder;
