//! Error types for metadata extraction and directory scans.
//!
//! Tag-level problems (unknown tags, malformed component counts, unparseable
//! timestamps) are not errors: they are absorbed by the value store and the
//! accessors. Only whole-file and whole-run failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by the metadata reader while opening a container.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EXIF error: {0}")]
    Exif(#[from] ::exif::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Per-file extraction failure. The directory walk skips the file.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unreadable image {}: {source}", path.display())]
    UnreadableImage {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}

/// Failure that aborts a whole scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source directory does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to write output {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}
