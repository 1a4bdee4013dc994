//! Reading and writing note files.
//!
//! Notes are stored as plain text. Reading normalizes line endings so that
//! every line, including the last one, ends with `\n`; writing stores the
//! editor text verbatim and replaces any existing file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use torquatus_core::logging::targets;

/// Error type for note file operations.
#[derive(Debug)]
pub struct FileError {
    kind: FileErrorKind,
    path: PathBuf,
    source: io::Error,
}

/// The kind of file error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// File or directory not found.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// The path is a directory, not a file.
    IsDirectory,
    /// Invalid path or filename.
    InvalidPath,
    /// The file is not valid UTF-8 text.
    InvalidData,
    /// No space left on device.
    NoSpace,
    /// Read-only filesystem.
    ReadOnly,
    /// An unknown or unclassified error occurred.
    Other,
}

impl FileErrorKind {
    fn classify(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::IsADirectory => Self::IsDirectory,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidFilename => Self::InvalidPath,
            io::ErrorKind::InvalidData => Self::InvalidData,
            io::ErrorKind::StorageFull => Self::NoSpace,
            io::ErrorKind::ReadOnlyFilesystem => Self::ReadOnly,
            _ => Self::Other,
        }
    }
}

impl FileError {
    /// Creates a file error from an I/O error and path.
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileErrorKind::classify(err.kind()),
            path: path.into(),
            source: err,
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> FileErrorKind {
        self.kind
    }

    /// Returns the path involved in the error.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// Returns true if this error indicates the file was not found.
    pub fn is_not_found(&self) -> bool {
        self.kind == FileErrorKind::NotFound
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.path.display())
    }
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileErrorKind::NotFound => write!(f, "file not found"),
            FileErrorKind::PermissionDenied => write!(f, "permission denied"),
            FileErrorKind::IsDirectory => write!(f, "is a directory"),
            FileErrorKind::InvalidPath => write!(f, "invalid path"),
            FileErrorKind::InvalidData => write!(f, "invalid data"),
            FileErrorKind::NoSpace => write!(f, "no space left on device"),
            FileErrorKind::ReadOnly => write!(f, "read-only filesystem"),
            FileErrorKind::Other => write!(f, "file error"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Read a note file.
///
/// Each line is terminated with `\n` in the result, whatever the file used
/// (`\r\n` or a missing final newline). An empty file reads as `""`.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid UTF-8.
pub fn read_note(path: impl AsRef<Path>) -> FileResult<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| FileError::from_io(e, path))?;

    let mut content = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        content.push_str(line);
        content.push('\n');
    }

    tracing::debug!(target: targets::FILE, path = %path.display(), bytes = content.len(), "read note");
    Ok(content)
}

/// Write a note file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_note(path: impl AsRef<Path>, contents: &str) -> FileResult<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|e| FileError::from_io(e, path))?;
    tracing::debug!(target: targets::FILE, path = %path.display(), bytes = contents.len(), "wrote note");
    Ok(())
}
