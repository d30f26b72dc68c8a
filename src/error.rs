use std::collections::TryReserveError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to memory-map file: {path}")]
    Map {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to allocate {size} bytes for file: {path}")]
    Allocation {
        path: PathBuf,
        size: u64,
        #[source]
        source: Option<TryReserveError>,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LocScanError {
    /// Wraps an I/O failure on `path`, picking the variant from the error kind.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { path, source },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Stable name of the variant, used in machine-readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::NotFound { .. } => "NotFound",
            Self::PermissionDenied { .. } => "PermissionDenied",
            Self::Io { .. } => "Io",
            Self::Map { .. } => "Map",
            Self::Write { .. } => "Write",
            Self::Allocation { .. } => "Allocation",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Human-readable message including the underlying cause, if any.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { path, source }
            | Self::PermissionDenied { path, source }
            | Self::Io { path, source }
            | Self::Map { path, source }
            | Self::Write { path, source } => format!("{}: {source}", path.display()),
            Self::Allocation {
                path,
                size,
                source: Some(source),
            } => format!("{} ({size} bytes): {source}", path.display()),
            Self::Allocation { path, size, .. } => {
                format!("{} ({size} bytes): file too large for this platform", path.display())
            }
            Self::Config(msg) => msg.clone(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Path of the file the failed scan was working on.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::Map { path, .. }
            | Self::Write { path, .. }
            | Self::Allocation { path, .. } => Some(path),
            Self::Config(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Mapping failures are reported apart from plain read failures.
    #[must_use]
    pub fn map_failed(path: &Path, source: std::io::Error) -> Self {
        Self::Map {
            path: path.to_path_buf(),
            source,
        }
    }

    #[must_use]
    pub fn write_failed(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Configuration errors are detected before any file is touched.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, LocScanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
