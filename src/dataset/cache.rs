//! One-shot dataset cache
//!
//! The source file is static for the lifetime of the process, so the parse
//! runs at most once and every caller afterwards gets the same shared handle.
//! There is no invalidation path.

use super::{DataLoadError, Dataset};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Memoized loader for a single dataset file
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Path the dataset is (or will be) loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the dataset has already been parsed
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached dataset, parsing the file on first use
    ///
    /// A failed load leaves the cache empty; startup treats that as fatal.
    pub fn get_or_load(&self) -> Result<Arc<Dataset>, DataLoadError> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        let started = Instant::now();
        let dataset = Arc::new(Dataset::load(&self.path)?);
        tracing::debug!(
            "Dataset parsed in {:?} ({} rows)",
            started.elapsed(),
            dataset.len()
        );

        Ok(Arc::clone(self.cell.get_or_init(|| dataset)))
    }
}
