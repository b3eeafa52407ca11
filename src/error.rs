// error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use walkdir;

/// Error types for selection-and-action runs
///
/// This enum represents all possible errors that can occur during
/// configuration validation, directory iteration and file processing.
#[derive(Error, Debug)]
pub enum SiftError {
    /// I/O error from filesystem operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Walkdir traversal error
    #[error("walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    /// Input directory is not specified
    #[error("input directory is not specified")]
    MissingInput,

    /// Output directory is required for the command but not specified
    #[error("output directory is not specified")]
    MissingOutput,

    /// Input or output directory does not exist
    #[error("{0} directory does not exist")]
    DirectoryMissing(&'static str),

    /// Input or output path exists but is a regular file
    #[error("{0} path is a file, but must be a directory")]
    NotADirectory(&'static str),

    /// Input and output directories resolve to the same location
    #[error("input and output directories are the same")]
    SameDirectories,

    /// Destination file already exists; copy and move never overwrite
    #[error("target file already exists: {0}")]
    TargetExists(String),

    /// Destination subdirectory path exists as a regular file
    #[error("can't create directory (already exists as file): {0}")]
    DirectoryConflict(String),

    /// File name is not valid UTF-8 and cannot be matched
    #[error("file name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),
}

impl SiftError {
    /// Reports whether this error is a not-found race
    ///
    /// Files may disappear between enumeration and processing. Such
    /// errors are skipped like any other per-candidate failure, but
    /// without a warning line.
    pub fn is_not_found(&self) -> bool {
        match self {
            SiftError::Io(err) => err.kind() == io::ErrorKind::NotFound,
            SiftError::Walkdir(err) => err
                .io_error()
                .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound),
            _ => false,
        }
    }
}
