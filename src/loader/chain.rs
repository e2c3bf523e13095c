//! Trying several loaders in order.

use crate::error::{Result, TwigBridgeError};
use crate::loader::{Source, TemplateLoader};
use std::time::SystemTime;

/// Loader that delegates to other loaders in order (first match wins).
///
/// A `ViewNotFound` from one loader moves on to the next. Any other error
/// stops the chain, so a misconfigured namespace is reported as such
/// instead of turning into "not found".
#[derive(Default)]
pub struct ChainLoader {
    loaders: Vec<Box<dyn TemplateLoader>>,
}

impl ChainLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a loader with lowest priority.
    pub fn add_loader(&mut self, loader: impl TemplateLoader + 'static) {
        self.loaders.push(Box::new(loader));
    }

    /// Builder form of [`ChainLoader::add_loader`].
    pub fn with_loader(mut self, loader: impl TemplateLoader + 'static) -> Self {
        self.add_loader(loader);
        self
    }

    /// Number of loaders in the chain.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    fn first_found<T>(
        &mut self,
        name: &str,
        mut op: impl FnMut(&mut dyn TemplateLoader) -> Result<T>,
    ) -> Result<T> {
        for loader in &mut self.loaders {
            match op(loader.as_mut()) {
                Err(e) if e.is_not_found() => continue,
                result => return result,
            }
        }

        Err(TwigBridgeError::ViewNotFound {
            name: name.to_string(),
        })
    }
}

impl std::fmt::Debug for ChainLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainLoader")
            .field("loaders", &self.loaders.len())
            .finish()
    }
}

impl TemplateLoader for ChainLoader {
    fn source(&mut self, name: &str) -> Result<Source> {
        self.first_found(name, |loader| loader.source(name))
    }

    fn exists(&mut self, name: &str) -> bool {
        self.loaders.iter_mut().any(|loader| loader.exists(name))
    }

    fn cache_key(&mut self, name: &str) -> Result<String> {
        self.first_found(name, |loader| loader.cache_key(name))
    }

    fn is_fresh(&mut self, name: &str, time: SystemTime) -> Result<bool> {
        self.first_found(name, |loader| loader.is_fresh(name, time))
    }
}
