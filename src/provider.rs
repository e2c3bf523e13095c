//! Building a configured finder and loader chain.
//!
//! Mirrors the boot order of the framework integration:
//! 1. Validate the configuration
//! 2. Create the finder over `paths`, with `extensions` or the defaults
//! 3. Register each Twig file extension with top priority
//! 4. Register named locations, then namespaces
//!
//! The loader chain serves inline `templates` first and falls back to files
//! found by the finder.
//!
//! # Example
//!
//! ```
//! use twigbridge::config::parse_config;
//! use twigbridge::filesystem::MemoryFilesystem;
//! use twigbridge::loader::TemplateLoader;
//! use twigbridge::provider::{finder_from_config, loader_from_config};
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "paths: [views]\ntemplates:\n  banner: '** {{ text }} **'\n",
//!     Path::new("twigbridge.yml"),
//! )
//! .unwrap();
//! let fs = MemoryFilesystem::new().with_file("/app/views/home.twig", "Home");
//!
//! let finder = finder_from_config(&config, Path::new("/app"), fs).unwrap();
//! let mut loader = loader_from_config(&config, finder);
//!
//! assert_eq!(loader.source("home").unwrap().text(), Some("Home"));
//! assert_eq!(loader.source("banner").unwrap().text(), Some("** {{ text }} **"));
//! ```

use crate::config::{validate, TwigBridgeConfig};
use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::finder::{Hints, ViewFinder, DEFAULT_EXTENSIONS};
use crate::loader::{ArrayLoader, ChainLoader, ViewLoader};
use std::path::Path;
use tracing::debug;

/// Build a [`ViewFinder`] from configuration.
///
/// Relative directories are resolved against `project_root`.
///
/// # Errors
///
/// Returns `ConfigValidationError` if the configuration fails validation.
pub fn finder_from_config<F: Filesystem>(
    config: &TwigBridgeConfig,
    project_root: &Path,
    files: F,
) -> Result<ViewFinder<F>> {
    validate(config)?;

    let paths = config.paths.iter().map(|p| project_root.join(p));
    let mut finder = match &config.extensions {
        Some(extensions) => ViewFinder::with_extensions(files, paths, extensions.iter().cloned()),
        None => ViewFinder::with_extensions(files, paths, DEFAULT_EXTENSIONS),
    };

    for extension in &config.file_extensions {
        finder.add_extension(extension.as_str());
    }

    for (alias, location) in &config.locations {
        finder.add_named_location(alias.as_str(), project_root.join(location));
    }

    for (namespace, hints) in &config.namespaces {
        let hints: Hints = hints.clone().into();
        let dirs: Hints = hints.into_iter().map(|p| project_root.join(p)).collect();
        finder.add_namespace(namespace.as_str(), dirs);
    }

    debug!(
        "Configured view finder: {} path(s), {} namespace(s), extensions {:?}",
        finder.paths().len(),
        finder.hints().len(),
        finder.extensions()
    );

    Ok(finder)
}

/// Build the loader chain: inline templates, then the view finder.
pub fn loader_from_config<F: Filesystem + 'static>(
    config: &TwigBridgeConfig,
    finder: ViewFinder<F>,
) -> ChainLoader {
    ChainLoader::new()
        .with_loader(ArrayLoader::new(config.templates.clone()))
        .with_loader(ViewLoader::new(finder))
}
