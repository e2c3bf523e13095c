//! Namespace hint directories.

use std::path::{Path, PathBuf};

/// An ordered list of hint directories for one namespace.
///
/// Namespace registration accepts either a single directory or a list; both
/// convert into `Hints` so callers can pass whichever they have.
///
/// ```
/// use twigbridge::finder::Hints;
///
/// let one: Hints = "resources/admin".into();
/// let many: Hints = vec!["a", "b"].into();
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints(Vec<PathBuf>);

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0
    }
}

impl From<&str> for Hints {
    fn from(path: &str) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<String> for Hints {
    fn from(path: String) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<&Path> for Hints {
    fn from(path: &Path) -> Self {
        Self(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for Hints {
    fn from(path: PathBuf) -> Self {
        Self(vec![path])
    }
}

impl<T: Into<PathBuf>> From<Vec<T>> for Hints {
    fn from(paths: Vec<T>) -> Self {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PathBuf>, const N: usize> From<[T; N]> for Hints {
    fn from(paths: [T; N]) -> Self {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PathBuf>> FromIterator<T> for Hints {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Hints {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
