use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a grid layout description.
///
/// The builders themselves never fail; only reading and decoding a
/// layout file can.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Layout file does not exist.
    #[error("Layout file not found: {0}")]
    NotFound(PathBuf),
    /// Layout is not valid JSON or does not match the expected shape.
    #[error("Invalid layout: {0}")]
    Parse(#[from] serde_json::Error),
    /// A column lists no header rows at all.
    #[error("Column {column} has no header rows")]
    NoHeaders { column: usize },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
