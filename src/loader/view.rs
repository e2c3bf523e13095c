//! Loading templates from files located by the view finder.

use crate::error::Result;
use crate::filesystem::{Filesystem, LocalFilesystem};
use crate::finder::ViewFinder;
use crate::loader::{Source, TemplateLoader};
use std::time::SystemTime;
use tracing::warn;

/// Loader that resolves names with a [`ViewFinder`] and reads the file.
#[derive(Debug)]
pub struct ViewLoader<F = LocalFilesystem> {
    finder: ViewFinder<F>,
}

impl<F: Filesystem> ViewLoader<F> {
    pub fn new(finder: ViewFinder<F>) -> Self {
        Self { finder }
    }

    pub fn finder(&self) -> &ViewFinder<F> {
        &self.finder
    }

    pub fn finder_mut(&mut self) -> &mut ViewFinder<F> {
        &mut self.finder
    }

    pub fn into_finder(self) -> ViewFinder<F> {
        self.finder
    }
}

impl<F: Filesystem> TemplateLoader for ViewLoader<F> {
    fn source(&mut self, name: &str) -> Result<Source> {
        let path = self.finder.find(name)?;
        let code = self.finder.filesystem().read(&path)?;

        Ok(Source {
            name: name.to_string(),
            path: Some(path),
            code,
        })
    }

    fn exists(&mut self, name: &str) -> bool {
        match self.finder.find(name) {
            Ok(_) => true,
            Err(e) if e.is_not_found() => false,
            Err(e) => {
                warn!("Treating view '{}' as missing: {}", name, e);
                false
            }
        }
    }

    fn cache_key(&mut self, name: &str) -> Result<String> {
        let path = self.finder.find(name)?;
        Ok(path.to_string_lossy().into_owned())
    }

    fn is_fresh(&mut self, name: &str, time: SystemTime) -> Result<bool> {
        let path = self.finder.find(name)?;
        let modified = self.finder.filesystem().modified(&path)?;
        Ok(modified <= time)
    }
}
