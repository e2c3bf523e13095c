//! Filesystem access used by the view finder and loaders.
//!
//! The finder only ever asks whether a path exists. Loaders additionally
//! read template bytes and modification times. Both go through the
//! [`Filesystem`] trait so tests can observe (or forbid) every check.
//!
//! # Example
//!
//! ```
//! use twigbridge::filesystem::{Filesystem, MemoryFilesystem};
//! use std::path::Path;
//!
//! let fs = MemoryFilesystem::new().with_file("/views/home.twig", "Hi");
//! assert!(fs.exists(Path::new("/views/home.twig")));
//! assert_eq!(fs.checks(), vec![Path::new("/views/home.twig").to_path_buf()]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Trait for the filesystem operations template lookup depends on.
pub trait Filesystem {
    /// Check whether a regular file exists at `path`. Directories do not count.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Last modification time of the file at `path`.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

/// Filesystem backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }
}

/// In-memory filesystem for testing.
///
/// Records every existence check so tests can assert on check order and
/// count. After [`MemoryFilesystem::forbid_checks`] any further existence
/// check panics, which proves a code path performs no filesystem I/O.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: HashMap<PathBuf, MemoryFile>,
    checks: RefCell<Vec<PathBuf>>,
    forbidden: Cell<bool>,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    contents: Vec<u8>,
    modified: SystemTime,
}

impl MemoryFilesystem {
    /// Create an empty in-memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryFilesystem::insert`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or overwrite a file, stamped with the current time.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.insert_modified(path, contents, SystemTime::now());
    }

    /// Add or overwrite a file with an explicit modification time.
    pub fn insert_modified(
        &mut self,
        path: impl Into<PathBuf>,
        contents: impl Into<Vec<u8>>,
        modified: SystemTime,
    ) {
        self.files.insert(
            path.into(),
            MemoryFile {
                contents: contents.into(),
                modified,
            },
        );
    }

    /// Remove a file. Returns whether it was present.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> bool {
        self.files.remove(path.as_ref()).is_some()
    }

    /// Every path passed to [`Filesystem::exists`], in call order.
    pub fn checks(&self) -> Vec<PathBuf> {
        self.checks.borrow().clone()
    }

    /// Number of existence checks performed so far.
    pub fn check_count(&self) -> usize {
        self.checks.borrow().len()
    }

    /// Forget recorded checks.
    pub fn clear_checks(&self) {
        self.checks.borrow_mut().clear();
    }

    /// Make every subsequent existence check panic.
    pub fn forbid_checks(&self) {
        self.forbidden.set(true);
    }

    /// Allow existence checks again.
    pub fn allow_checks(&self) {
        self.forbidden.set(false);
    }

    fn entry(&self, path: &Path) -> io::Result<&MemoryFile> {
        self.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        if self.forbidden.get() {
            panic!("unexpected filesystem check for {}", path.display());
        }
        self.checks.borrow_mut().push(path.to_path_buf());
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.entry(path).map(|f| f.contents.clone())
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.entry(path).map(|f| f.modified)
    }
}
