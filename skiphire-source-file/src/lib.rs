//! Catalog source reading a JSON array of skip records from disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use skiphire_core::{
    model::SkipOption,
    ports::{CatalogError, CatalogSource},
};

/// Source reading options from a JSON file.
///
/// The file holds an array of records in the same shape the remote API
/// returns. Unknown fields are ignored; a record missing a required field
/// fails the whole load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path the catalog is read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<SkipOption>, CatalogError> {
        let raw = tokio::fs::read(&self.path).await?;
        parse_catalog(&raw)
    }
}

/// Decode a JSON array of skip records.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] if the bytes are not a well-formed array of records.
pub fn parse_catalog(raw: &[u8]) -> Result<Vec<SkipOption>, CatalogError> {
    Ok(serde_json::from_slice(raw)?)
}

/// Build the shared source handle.
#[must_use]
pub fn source<P: Into<PathBuf>>(path: P) -> Arc<dyn CatalogSource> {
    Arc::new(FileSource::new(path))
}
