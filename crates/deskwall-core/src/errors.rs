//! Error taxonomy for preference resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ResolveError
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Failures while resolving command input into preferences.
///
/// Every variant is produced before any store mutation is attempted, so a
/// resolution failure leaves the store untouched.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Color payload is not a 6-hex-digit code
    #[error("invalid color '{input}'")]
    InvalidColor { input: String },

    /// Interval payload is not an unsigned integer
    #[error("invalid interval '{input}'")]
    InvalidInterval { input: String },

    /// Path payload could not be made absolute
    #[error("invalid path '{path}': {source}")]
    InvalidPath {
        path: String,
        source: std::io::Error,
    },

    /// Wallpaper path does not exist
    #[error("invalid wallpaper '{}': no such file or directory", path.display())]
    WallpaperNotFound { path: PathBuf },

    /// Wallpaper path resolves to a directory
    #[error("invalid wallpaper: {} is a directory", path.display())]
    WallpaperIsDirectory { path: PathBuf },

    /// Wallpaper directory path does not exist
    #[error("invalid directory '{}': no such file or directory", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Wallpaper directory path resolves to something else
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}
