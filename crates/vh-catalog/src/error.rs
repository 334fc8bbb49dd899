//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the opportunity catalog.
///
/// None of these are fatal to a serving process: the server degrades to an
/// empty catalog and shows [`headline`](CatalogError::headline) as a page
/// banner instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file does not exist at the resolved path.
    #[error("data file not found: {}", path.display())]
    DataFileNotFound { path: PathBuf },

    /// The data file exists but is not a JSON array of records.
    #[error("data file {} is not a JSON array: {reason}", path.display())]
    DataFileInvalid { path: PathBuf, reason: String },

    /// IO error reading the data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error outside the record-skip path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// User-facing one-liner, suitable for the page banner.
    pub fn headline(&self) -> String {
        match self {
            CatalogError::DataFileNotFound { path } => {
                format!("Data file not found: {}", path.display())
            }
            CatalogError::DataFileInvalid { path, .. } => {
                format!("Could not read data file: {}", path.display())
            }
            CatalogError::Io(e) => format!("Could not read data file: {e}"),
            CatalogError::Json(e) => format!("Could not read data file: {e}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn headline_carries_the_path() {
        let err = CatalogError::DataFileNotFound {
            path: Path::new("/srv/hub/opportunities.json").to_path_buf(),
        };
        assert_eq!(
            err.headline(),
            "Data file not found: /srv/hub/opportunities.json"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CatalogError = io.into();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(err.headline().starts_with("Could not read data file"));
    }
}
