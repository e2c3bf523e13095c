//! In-memory templates.

use crate::error::{Result, TwigBridgeError};
use crate::loader::{Source, TemplateLoader};
use std::collections::HashMap;
use std::time::SystemTime;

/// Loader for templates held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ArrayLoader {
    templates: HashMap<String, String>,
}

impl ArrayLoader {
    /// Create a loader from `(name, template)` pairs.
    pub fn new<I, K, V>(templates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add or replace a template.
    pub fn set_template(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(name.into(), template.into());
    }

    /// Get all template names.
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }

    fn get(&self, name: &str) -> Result<&String> {
        self.templates
            .get(name)
            .ok_or_else(|| TwigBridgeError::ViewNotFound {
                name: name.to_string(),
            })
    }
}

impl TemplateLoader for ArrayLoader {
    fn source(&mut self, name: &str) -> Result<Source> {
        let code = self.get(name)?;
        Ok(Source {
            name: name.to_string(),
            path: None,
            code: code.as_bytes().to_vec(),
        })
    }

    fn exists(&mut self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn cache_key(&mut self, name: &str) -> Result<String> {
        self.get(name).map(|_| name.to_string())
    }

    fn is_fresh(&mut self, name: &str, _time: SystemTime) -> Result<bool> {
        self.get(name).map(|_| true)
    }
}
