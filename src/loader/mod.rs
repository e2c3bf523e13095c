//! Template loaders handed to the template engine.
//!
//! The engine asks a [`TemplateLoader`] for template source by logical name.
//! Three loaders are provided:
//! - [`ArrayLoader`] - in-memory templates keyed by name
//! - [`ViewLoader`] - resolves names with a [`ViewFinder`](crate::finder::ViewFinder)
//!   and reads the file it finds
//! - [`ChainLoader`] - tries several loaders in order
//!
//! # Resolution Order
//!
//! The default chain built by [`crate::provider::loader_from_config`] is
//! (first match wins):
//! 1. Inline templates from configuration
//! 2. Files found by the view finder
//!
//! # Example
//!
//! ```
//! use twigbridge::loader::{ArrayLoader, ChainLoader, TemplateLoader};
//!
//! let mut chain = ChainLoader::new()
//!     .with_loader(ArrayLoader::new([("greeting", "Hello {{ name }}")]));
//!
//! let source = chain.source("greeting").unwrap();
//! assert_eq!(source.text(), Some("Hello {{ name }}"));
//! assert!(!chain.exists("missing"));
//! ```

pub mod array;
pub mod chain;
pub mod view;

pub use array::ArrayLoader;
pub use chain::ChainLoader;
pub use view::ViewLoader;

use crate::error::Result;
use std::path::PathBuf;
use std::time::SystemTime;

/// Trait for anything the engine can load templates from.
///
/// Every method takes `&mut self` because file-backed loaders cache view
/// resolutions as they go.
pub trait TemplateLoader {
    /// Load the source of a template.
    ///
    /// Returns `ViewNotFound` when this loader does not have the template.
    fn source(&mut self, name: &str) -> Result<Source>;

    /// Check whether this loader has the template.
    fn exists(&mut self, name: &str) -> bool;

    /// A key identifying the template for compiled-template caching.
    fn cache_key(&mut self, name: &str) -> Result<String>;

    /// Whether the template is unchanged since `time`.
    fn is_fresh(&mut self, name: &str, time: SystemTime) -> Result<bool>;
}

/// Template source returned by a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Logical name the template was requested by.
    pub name: String,
    /// File the source was read from, if any.
    pub path: Option<PathBuf>,
    /// Raw template bytes.
    pub code: Vec<u8>,
}

impl Source {
    /// The template as text, when it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.code).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_text_for_utf8() {
        let source = Source {
            name: "page".to_string(),
            path: None,
            code: b"{{ title }}".to_vec(),
        };
        assert_eq!(source.text(), Some("{{ title }}"));
    }

    #[test]
    fn source_text_for_invalid_utf8() {
        let source = Source {
            name: "blob".to_string(),
            path: Some(PathBuf::from("/v/blob.twig")),
            code: vec![0xff, 0xfe],
        };
        assert_eq!(source.text(), None);
    }
}
