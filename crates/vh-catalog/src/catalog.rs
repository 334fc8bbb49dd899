//! Catalog loading and lookup.

use crate::error::{CatalogError, Result};
use crate::model::{Opportunity, OpportunityId};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The ordered set of opportunity records from one data file.
///
/// Records keep their file order; the grid pages through them exactly as
/// written and nothing ever re-sorts them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Opportunity>,
}

impl Catalog {
    pub fn new(records: Vec<Opportunity>) -> Self {
        Self { records }
    }

    /// Catalog with no records, used when the data file could not be read.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Opportunity] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose id matches, or `None`.
    ///
    /// Duplicate ids are not rejected at load time, so "first" is the rule
    /// that keeps lookups deterministic.
    pub fn get(&self, id: &OpportunityId) -> Option<&Opportunity> {
        self.records.iter().find(|r| &r.id == id)
    }
}

/// One array element that failed to decode during [`load`].
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// Zero-based position in the source array.
    pub index: usize,
    /// Decode error, verbatim.
    pub reason: String,
}

/// Outcome of loading a data file: the usable catalog plus everything that
/// had to be left behind.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
    pub source: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

/// Load the catalog from a JSON data file.
///
/// The file must hold a JSON array of record objects. Elements that fail to
/// decode (not an object, missing `id`) are skipped with a warning and
/// counted in the report; the load as a whole only fails when the file is
/// missing, unreadable, or not an array.
pub fn load(path: &Path) -> Result<LoadReport> {
    if !path.exists() {
        return Err(CatalogError::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| CatalogError::DataFileInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut records = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Opportunity>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed record");
                skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        path = %path.display(),
        loaded = records.len(),
        skipped = skipped.len(),
        "catalog loaded"
    );

    Ok(LoadReport {
        catalog: Catalog::new(records),
        skipped,
        source: path.to_path_buf(),
        loaded_at: Utc::now(),
    })
}
