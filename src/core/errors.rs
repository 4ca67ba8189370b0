//! Error handling
//!
//! This module provides error handling using anyhow.
//! Editing a document only fails when an operation names an item or zone
//! that does not exist; parsing never fails (see `data::serialization`).

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};

/// Result type alias for convenience throughout the crate
pub type EditorResult<T> = Result<T>;

/// Helper functions for creating common error contexts
pub trait EditorContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> EditorResult<T>;

    /// Add zone operation context to an error
    fn with_zone_context(self, operation: &str, zone_id: &str)
        -> EditorResult<T>;
}

impl<T, E> EditorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> EditorResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }

    fn with_zone_context(
        self,
        operation: &str,
        zone_id: &str,
    ) -> EditorResult<T> {
        self.with_context(|| format!("Failed to {operation} zone '{zone_id}'"))
    }
}

/// Helper macros for common error patterns
#[macro_export]
macro_rules! zone_not_found {
    ($id:expr, $count:expr) => {
        anyhow::anyhow!(
            "Zone '{}' not found in document ({} zones)",
            $id,
            $count
        )
    };
}

#[macro_export]
macro_rules! item_not_found {
    ($id:expr, $count:expr) => {
        anyhow::anyhow!(
            "Item '{}' not found in document ({} items)",
            $id,
            $count
        )
    };
}

/// Parse a `name:value` pair used by command arguments
pub fn split_pair<'a>(
    arg: &'a str,
    what: &str,
) -> EditorResult<(&'a str, &'a str)> {
    let (left, right) = arg.split_once(':').ok_or_else(|| {
        anyhow!("Expected '{}' as <left>:<right>, got: '{}'", what, arg)
    })?;
    ensure!(!left.is_empty(), "Missing first half of '{}' in '{}'", what, arg);
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pair_keeps_colons_in_second_half() {
        let (zone, label) =
            split_pair("zone-1:Left: top", "relabel").expect("Valid pair");
        assert_eq!(zone, "zone-1");
        assert_eq!(label, "Left: top");
    }

    #[test]
    fn split_pair_rejects_missing_separator() {
        assert!(split_pair("zone-1", "assign").is_err());
        assert!(split_pair(":item-1", "assign").is_err());
    }

    #[test]
    fn file_context_mentions_path() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result
            .with_file_context("read", "question.json")
            .expect_err("Should carry context");
        assert!(err.to_string().contains("question.json"));
    }

    #[test]
    fn zone_context_names_zone() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result
            .with_zone_context("relabel", "zone-3")
            .expect_err("Should carry context");
        assert_eq!(err.to_string(), "Failed to relabel zone 'zone-3'");
    }
}
