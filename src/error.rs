//! Error handling for partbench
//!
//! Application plumbing (CLI, file loading) uses anyhow for context-rich
//! propagation; the encoder and import pipeline return the typed
//! [`CatalogError`] so callers can tell rejection kinds apart.

use anyhow::Context;
use std::path::Path;

use crate::bands::BandRole;

pub type Result<T> = anyhow::Result<T>;

/// Extension trait for Results to add context with file paths
pub trait ResultExt<T> {
    /// Add context with file path information
    fn with_path_context<P: AsRef<Path>>(self, operation: &str, path: P) -> Result<T>;

    /// Add context naming the component a value was meant for
    fn with_component_context(self, component: &str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error> + Send + Sync + 'static,
{
    fn with_path_context<P: AsRef<Path>>(self, operation: &str, path: P) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Failed to {} file: {}", operation, path.as_ref().display()))
    }

    fn with_component_context(self, component: &str) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Error updating {} parameters", component))
    }
}

/// Domain errors raised by the encoder and the import pipeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid resistor value: {reason}")]
    InvalidValue { reason: String },

    #[error("No {role} band color for {wanted}")]
    LookupMiss { role: BandRole, wanted: String },

    #[error("Import failed: {reason}")]
    ImportError { reason: String },

    #[error("Unknown component type: {keyword}")]
    UnknownComponent { keyword: String },
}

impl CatalogError {
    pub(crate) fn invalid_value(reason: impl Into<String>) -> Self {
        CatalogError::InvalidValue {
            reason: reason.into(),
        }
    }

    pub(crate) fn import(reason: impl Into<String>) -> Self {
        CatalogError::ImportError {
            reason: reason.into(),
        }
    }
}
