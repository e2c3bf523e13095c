//! View name parsing.
//!
//! Two hint syntaxes address a namespace:
//! - Twig style: `@namespace/path/to/view`
//! - Blade style: `namespace::path.to.view`

use crate::error::{Result, TwigBridgeError};

/// Blade-style hint delimiter.
pub const HINT_PATH_DELIMITER: &str = "::";

/// Twig-style hint prefix.
pub const HINT_PATH_TWIG_DELIMITER: char = '@';

/// Which delimiter a namespaced view name used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceForm {
    /// `@namespace/view`
    At,
    /// `namespace::view`
    DoubleColon,
}

/// A view name split into its namespace and the view inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespacedView<'a> {
    pub form: NamespaceForm,
    pub namespace: &'a str,
    pub view: &'a str,
}

/// Returns whether the view name carries namespace hint information.
///
/// A `::` at position 0 does not count.
pub fn has_hint_information(name: &str) -> bool {
    name.find(HINT_PATH_DELIMITER).is_some_and(|pos| pos > 0)
        || name.starts_with(HINT_PATH_TWIG_DELIMITER)
}

/// Split a hinted view name into namespace and view.
///
/// The `@` prefix is not part of the namespace, so `@admin/users` and
/// `admin::users` name the same registration.
///
/// # Errors
///
/// Returns `InvalidName` when an `@` name has no `/`, or a `::` name does not
/// split into exactly two segments.
pub fn parse_namespace_segments(name: &str) -> Result<NamespacedView<'_>> {
    let invalid = || TwigBridgeError::InvalidName {
        name: name.to_string(),
    };

    if let Some(rest) = name.strip_prefix(HINT_PATH_TWIG_DELIMITER) {
        let (namespace, view) = rest.split_once('/').ok_or_else(invalid)?;
        return Ok(NamespacedView {
            form: NamespaceForm::At,
            namespace,
            view,
        });
    }

    let segments: Vec<&str> = name.split(HINT_PATH_DELIMITER).collect();
    match *segments.as_slice() {
        [namespace, view] => Ok(NamespacedView {
            form: NamespaceForm::DoubleColon,
            namespace,
            view,
        }),
        _ => Err(invalid()),
    }
}
