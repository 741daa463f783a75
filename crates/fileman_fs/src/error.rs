//! Typed failures for every engine operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse failure class, stable across variants. Front-ends map it to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFsErrorKind {
    /// File or directory missing.
    NotFound,
    /// Copy/delete/rename/stat failed for an OS-level reason.
    PermissionOrIoFailure,
    /// Malformed search pattern.
    InvalidPattern,
    /// Size exceeds the formatting range.
    UnsupportedMagnitude,
    /// Derived rename target already exists.
    TargetExists,
    /// Destructive command without an affirmative confirmation.
    NotConfirmed,
}

/// Engine error. Each variant names the path or value involved.
#[derive(Debug, Error)]
pub enum FsOpError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to copy {} -> {}: {source}", .path_src.display(), .path_dst.display())]
    CopyFailed {
        path_src: PathBuf,
        path_dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove {}: {source}", .path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename {} -> {}: {source}", .path_src.display(), .path_dst.display())]
    RenameFailed {
        path_src: PathBuf,
        path_dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read metadata of {}: {source}", .path.display())]
    MetadataFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Unsupported magnitude: {0} bytes exceeds the largest formatting unit")]
    UnsupportedMagnitude(u64),

    #[error("Rename target already exists: {}", .0.display())]
    RenameTargetExists(PathBuf),

    #[error("Confirmation declined (got `{token}`); no changes were made")]
    ConfirmationDeclined { token: String },
}

impl FsOpError {
    /// Failure class of this error.
    pub fn kind(&self) -> EnumFsErrorKind {
        match self {
            Self::NotFound(_) | Self::FileNotFound(_) | Self::DirectoryNotFound(_) => {
                EnumFsErrorKind::NotFound
            }
            Self::CopyFailed { .. }
            | Self::RemoveFailed { .. }
            | Self::RenameFailed { .. }
            | Self::MetadataFailed { .. } => EnumFsErrorKind::PermissionOrIoFailure,
            Self::InvalidPattern { .. } => EnumFsErrorKind::InvalidPattern,
            Self::UnsupportedMagnitude(_) => EnumFsErrorKind::UnsupportedMagnitude,
            Self::RenameTargetExists(_) => EnumFsErrorKind::TargetExists,
            Self::ConfirmationDeclined { .. } => EnumFsErrorKind::NotConfirmed,
        }
    }
}

/// Shorthand used across the engine.
pub type Result<T> = std::result::Result<T, FsOpError>;
