//! View name to file path resolution.
//!
//! [`ViewFinder`] maps a logical view name to a template file on disk. It
//! searches an ordered list of directories, tries several candidate file
//! names per directory, and remembers every successful lookup until
//! [`ViewFinder::flush`] is called.
//!
//! Resolution order (first match wins):
//! 1. Each search directory, in list order
//! 2. Within a directory, each candidate from [`possible_view_files`]
//!
//! Namespaced names (`admin::users.index` or `@admin/users/index`) search the
//! namespace's hint directories instead of the global list.
//!
//! # Example
//!
//! ```
//! use twigbridge::filesystem::MemoryFilesystem;
//! use twigbridge::finder::ViewFinder;
//! use std::path::PathBuf;
//!
//! let fs = MemoryFilesystem::new()
//!     .with_file("/app/views/emails/welcome.twig", "Hi")
//!     .with_file("/admin/views/dashboard.php", "");
//!
//! let mut finder = ViewFinder::new(fs, ["/app/views"]);
//! finder.add_extension("twig");
//! finder.add_namespace("admin", "/admin/views");
//!
//! assert_eq!(
//!     finder.find("emails.welcome").unwrap(),
//!     PathBuf::from("/app/views/emails/welcome.twig")
//! );
//! assert_eq!(
//!     finder.find("@admin/dashboard").unwrap(),
//!     PathBuf::from("/admin/views/dashboard.php")
//! );
//! ```

pub mod candidates;
pub mod hints;
pub mod name;

pub use candidates::possible_view_files;
pub use hints::Hints;
pub use name::{
    has_hint_information, parse_namespace_segments, NamespaceForm, NamespacedView,
    HINT_PATH_DELIMITER, HINT_PATH_TWIG_DELIMITER,
};

use crate::error::{Result, TwigBridgeError};
use crate::filesystem::{Filesystem, LocalFilesystem};
use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace, warn};

/// Extensions searched when none are given at construction.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["blade.php", "php", "css"];

/// Characters stripped from both ends of a view name. Unicode whitespace such
/// as a non-breaking space is kept.
const TRIMMED_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Resolves view names to files and caches the results.
#[derive(Debug)]
pub struct ViewFinder<F = LocalFilesystem> {
    files: F,
    paths: Vec<PathBuf>,
    hints: BTreeMap<String, Vec<PathBuf>>,
    extensions: Vec<String>,
    locations: BTreeMap<String, PathBuf>,
    views: HashMap<String, PathBuf>,
}

impl<F: Filesystem> ViewFinder<F> {
    /// Create a finder over `paths` with the default extension list.
    pub fn new<I, P>(files: F, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_extensions(files, paths, DEFAULT_EXTENSIONS)
    }

    /// Create a finder over `paths` with an explicit extension list.
    pub fn with_extensions<I, P, E, S>(files: F, paths: I, extensions: E) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
        E: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files,
            paths: paths.into_iter().map(Into::into).collect(),
            hints: BTreeMap::new(),
            extensions: extensions.into_iter().map(Into::into).collect(),
            locations: BTreeMap::new(),
            views: HashMap::new(),
        }
    }

    /// Get the fully qualified location of a view.
    ///
    /// Cached lookups return without touching the filesystem. Failed lookups
    /// are not cached.
    ///
    /// # Errors
    ///
    /// - `InvalidName` for a malformed hinted name or an empty name
    /// - `UnknownNamespace` when the namespace has no hint paths
    /// - `ViewNotFound` when no candidate file exists
    pub fn find(&mut self, name: &str) -> Result<PathBuf> {
        if let Some(path) = self.views.get(name) {
            trace!("View cache hit for '{}'", name);
            return Ok(path.clone());
        }

        let name = name.trim_matches(TRIMMED_CHARS);
        if name.is_empty() {
            return Err(TwigBridgeError::InvalidName {
                name: name.to_string(),
            });
        }

        let path = if has_hint_information(name) {
            self.find_namespaced_view(name)?
        } else {
            self.find_in_paths(name, &self.paths)?
        };

        debug!("Resolved view '{}' to {}", name, path.display());
        self.views.insert(name.to_string(), path.clone());
        Ok(path)
    }

    /// Returns whether the view name carries namespace hint information.
    pub fn has_hint_information(name: &str) -> bool {
        has_hint_information(name)
    }

    /// Register an extension with highest priority.
    ///
    /// An existing identical entry is moved to the front rather than
    /// duplicated.
    pub fn add_extension(&mut self, extension: impl Into<String>) {
        let extension = extension.into();
        self.extensions.retain(|e| *e != extension);
        self.extensions.insert(0, extension);
    }

    /// Append a directory to the search paths.
    pub fn add_location(&mut self, location: impl Into<PathBuf>) {
        self.paths.push(location.into());
    }

    /// Insert a directory at the front of the search paths.
    pub fn prepend_location(&mut self, location: impl Into<PathBuf>) {
        self.paths.insert(0, location.into());
    }

    /// Register a directory under an alias usable as `@alias/view` inside a
    /// search. The directory is also appended to the search paths.
    pub fn add_named_location(&mut self, alias: impl Into<String>, location: impl Into<PathBuf>) {
        let location = location.into();
        self.locations.insert(alias.into(), location.clone());
        self.paths.push(location);
    }

    /// Add hint directories after any the namespace already has.
    pub fn add_namespace(&mut self, namespace: impl Into<String>, hints: impl Into<Hints>) {
        let hints: Hints = hints.into();
        self.hints
            .entry(namespace.into())
            .or_default()
            .extend(hints);
    }

    /// Add hint directories before any the namespace already has.
    pub fn prepend_namespace(&mut self, namespace: impl Into<String>, hints: impl Into<Hints>) {
        let hints: Hints = hints.into();
        let entry = self.hints.entry(namespace.into()).or_default();
        let mut merged = hints.into_vec();
        merged.append(entry);
        *entry = merged;
    }

    /// Replace the namespace's hint directories.
    pub fn replace_namespace(&mut self, namespace: impl Into<String>, hints: impl Into<Hints>) {
        let hints: Hints = hints.into();
        self.hints.insert(namespace.into(), hints.into_vec());
    }

    /// Forget every cached lookup.
    pub fn flush(&mut self) {
        debug!("Flushing {} cached view(s)", self.views.len());
        self.views.clear();
    }

    /// Whether `name` currently has a cached resolution.
    pub fn is_cached(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Registered extensions in priority order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Search paths in priority order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Namespace hint directories.
    pub fn hints(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.hints
    }

    /// Aliased directories registered with [`ViewFinder::add_named_location`].
    pub fn named_locations(&self) -> &BTreeMap<String, PathBuf> {
        &self.locations
    }

    pub fn filesystem(&self) -> &F {
        &self.files
    }

    pub fn filesystem_mut(&mut self) -> &mut F {
        &mut self.files
    }

    fn find_namespaced_view(&self, name: &str) -> Result<PathBuf> {
        let parsed = parse_namespace_segments(name)?;
        let hints = self.hints.get(parsed.namespace).ok_or_else(|| {
            TwigBridgeError::UnknownNamespace {
                namespace: parsed.namespace.to_string(),
            }
        })?;

        debug!(
            "Searching namespace '{}' ({:?} form) for '{}'",
            parsed.namespace, parsed.form, parsed.view
        );
        self.find_in_paths(parsed.view, hints)
    }

    fn find_in_paths(&self, name: &str, paths: &[PathBuf]) -> Result<PathBuf> {
        let mut search: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
        let mut view = name;

        if let Some(aliased) = name.strip_prefix(HINT_PATH_TWIG_DELIMITER) {
            let (alias, rest) =
                aliased
                    .split_once('/')
                    .ok_or_else(|| TwigBridgeError::InvalidName {
                        name: name.to_string(),
                    })?;

            match self.locations.get(alias) {
                Some(location) => search.push(location.as_path()),
                None => warn!("No named location '{}' for view '{}'", alias, name),
            }
            view = rest;
        }

        let candidates = possible_view_files(view, &self.extensions);
        for dir in search {
            for file in &candidates {
                let view_path = join_candidate(dir, file);
                trace!("Checking {}", view_path.display());
                if self.files.exists(&view_path) {
                    return Ok(view_path);
                }
            }
        }

        Err(TwigBridgeError::ViewNotFound {
            name: view.to_string(),
        })
    }
}

/// Place a candidate inside `dir`. Root and drive prefixes are dropped so a
/// rooted candidate is taken relative to `dir` instead of replacing it.
fn join_candidate(dir: &Path, file: &str) -> PathBuf {
    let relative: PathBuf = Path::new(file)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    dir.join(relative)
}
