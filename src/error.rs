//! Error kinds shared by the parser, materializer and walker.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal to the current invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("{}: failed to open tree file", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: failed to read tree file")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Only raised when parsing in strict mode.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("{}: failed to create directory", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: failed to create file", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: failed to read directory", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write progress output")]
    Progress {
        #[source]
        source: io::Error,
    },

    #[error("{name:?}: entry name must be a single path component")]
    UnsafeName { name: String },
}

impl TreeError {
    /// Path the error refers to, if it concerns a filesystem location.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            TreeError::InputOpen { path, .. }
            | TreeError::DirectoryCreate { path, .. }
            | TreeError::FileCreate { path, .. }
            | TreeError::DirectoryRead { path, .. } => Some(path),
            _ => None,
        }
    }
}
