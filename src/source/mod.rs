//! Ways of getting a file's bytes into the [`LineScanner`](crate::counter::LineScanner).
//!
//! Every source hands out the file contents, in order, as a sequence of
//! borrowed chunks. Resources (mappings, handles, buffers) are released when
//! the source is dropped.

mod chunked;
mod mmap;
mod whole;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{LocScanError, Result};

pub use chunked::ChunkedSource;
pub use mmap::MmapSource;
pub use whole::WholeFileSource;

/// Default read size for [`Strategy::Chunked`] (4 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// A producer of consecutive chunks of one byte stream.
pub trait ByteSource {
    /// Returns the next non-empty chunk, or `None` once the stream is exhausted.
    ///
    /// # Errors
    /// Returns an error if the underlying read fails.
    fn next_chunk(&mut self) -> Result<Option<&[u8]>>;
}

/// How a file is read before scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Map the file read-only; no copy
    #[default]
    Mmap,
    /// Read fixed-size blocks into one reusable buffer
    Chunked,
    /// Read the whole file into a buffer sized to it
    WholeFile,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Mmap, Self::Chunked, Self::WholeFile];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mmap => "mmap",
            Self::Chunked => "chunked",
            Self::WholeFile => "whole-file",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mmap" => Ok(Self::Mmap),
            "chunked" => Ok(Self::Chunked),
            "whole-file" | "whole" => Ok(Self::WholeFile),
            _ => Err(format!("Unknown read strategy: {s}")),
        }
    }
}

/// Read settings shared by every scan in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScanOptions {
    pub strategy: Strategy,
    /// Buffer size for [`Strategy::Chunked`]; ignored by the others.
    pub chunk_size: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ScanOptions {
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// # Errors
    /// Returns [`LocScanError::Config`] if the chunk size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(LocScanError::Config(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
