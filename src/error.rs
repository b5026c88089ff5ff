//! Error types for the asset load phase.
//!
//! Every variant is fatal: `main` logs it and exits with a non-zero code
//! before the game loop starts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading images and the sprite catalog.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file named by the catalog does not exist.
    #[error("Cannot load image '{name}': file not found at {path}")]
    Missing { name: String, path: PathBuf },

    /// The file exists but could not be decoded or uploaded.
    #[error("Cannot load image '{name}' from {path}: {details}")]
    Decode {
        name: String,
        path: PathBuf,
        details: String,
    },

    /// A sprite sheet grid that cannot be sliced into non-empty cells.
    #[error("Sprite sheet '{name}' ({width}x{height}) cannot be cut into {columns}x{rows} cells")]
    InvalidGrid {
        name: String,
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },

    /// The sprite catalog file could not be read.
    #[error("Failed to read catalog '{path}': {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sprite catalog file is not valid JSON for a catalog.
    #[error("Failed to parse catalog '{path}': {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
