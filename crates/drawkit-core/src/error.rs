//! Error handling for DrawKit
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Canvas error type
///
/// Covers color parsing, document (de)serialization and snapshot capture.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// An HSL color string did not match `hsl(<hue>, <sat>%, <light>%)`
    #[error("Invalid HSL color string: {input}")]
    InvalidColor {
        /// The string that failed to parse.
        input: String,
    },

    /// A document could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A loaded document carries a version this build does not understand
    #[error("Unsupported document version: {version}")]
    UnsupportedVersion {
        /// The version found in the document.
        version: u32,
    },

    /// The view layer failed to rasterize the canvas
    #[error("Snapshot capture failed: {reason}")]
    SnapshotFailed {
        /// The reason reported by the capture backend.
        reason: String,
    },
}

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, CanvasError>;
