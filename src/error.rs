//! Filesystem error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during filesystem operations
#[derive(Error, Debug)]
pub enum FsError {
    /// The path does not exist
    #[error("no such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    /// The process may not read the path
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// A directory operation was given something else
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// File contents are not valid UTF-8
    #[error("invalid UTF-8 in {}", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Any other I/O failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Categorize an I/O error raised while operating on `path`.
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the failing operation was applied to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotADirectory { path }
            | Self::InvalidUtf8 { path }
            | Self::Io { path, .. } => path,
        }
    }
}

pub type FsResult<T> = Result<T, FsError>;
