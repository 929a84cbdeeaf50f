//! Load memoization keyed on file identity and modification time.
//!
//! Interactive report reruns hit the same static input files repeatedly.
//! Rather than tying caching to a particular call site, this is an explicit
//! layer: entries are keyed by canonical path, validated against the file's
//! modification time on every access, and invalidated manually with
//! [`LoadCache::invalidate`] or [`LoadCache::clear`].

use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

use crate::error::{Result, SolarError};

struct CacheEntry {
    modified: SystemTime,
    data: DataFrame,
}

/// In-process memoization of CSV loads
#[derive(Default)]
pub struct LoadCache {
    entries: HashMap<PathBuf, CacheEntry>,
    hits: usize,
    misses: usize,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, loading it on first access or
    /// when the file has been modified since it was cached.
    pub fn get_or_load(&mut self, path: &Path) -> Result<DataFrame> {
        if !path.exists() {
            return Err(SolarError::source_not_found(path));
        }

        let key = std::fs::canonicalize(path)?;
        let modified = std::fs::metadata(&key)?.modified()?;

        if let Some(entry) = self.entries.get(&key) {
            if entry.modified == modified {
                self.hits += 1;
                debug!("Load cache hit: {}", key.display());
                return Ok(entry.data.clone());
            }
            debug!("Load cache stale entry: {}", key.display());
        }

        self.misses += 1;
        let data = super::read_csv(&key)?;
        self.entries.insert(
            key,
            CacheEntry {
                modified,
                data: data.clone(),
            },
        );

        Ok(data)
    }

    /// Drop the entry for `path`, forcing the next access to reload
    pub fn invalidate(&mut self, path: &Path) {
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if self.entries.remove(&key).is_some() {
            debug!("Load cache invalidated: {}", key.display());
        }
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cached entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accesses served from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Accesses that read the file
    pub fn misses(&self) -> usize {
        self.misses
    }
}
