//! Error types of `id3tree`.
use thiserror::Error;

use std::io;
use std::path::PathBuf;

/// The result type of `id3tree`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading the data files,
/// persisting trees, or validating parameters.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A data row does not have one value per schema column.
    #[error(
        "line {line} has {found} columns, but the schema has {expected}"
    )]
    SchemaMismatch {
        /// 1-indexed position of the row.
        line: usize,
        /// Number of schema columns.
        expected: usize,
        /// Number of values in the row.
        found: usize,
    },
    /// A tree file is missing or cannot be decoded.
    #[error("cannot use the tree file {path:?}: {reason}")]
    Persistence {
        /// The tree file.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },
    /// The JSON text is not a tree.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON object does not describe a valid tree.
    #[error("malformed tree: {0}")]
    MalformedTree(String),
    /// The attribute name is not in the schema.
    #[error("attribute `{0}` does not exist in the schema")]
    UnknownAttribute(String),
    /// A parameter is out of its range.
    #[error("invalid parameter {0}")]
    Parameters(String),
    /// The data file has no rows.
    #[error("the data file {0:?} has no rows")]
    EmptyDataset(PathBuf),
}

impl Error {
    /// Wraps a decoding failure of the tree stored at `path`.
    pub(crate) fn persistence<P, S>(path: P, reason: S) -> Self
        where P: Into<PathBuf>,
              S: ToString,
    {
        Self::Persistence {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
