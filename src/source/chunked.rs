use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::{LocScanError, Result};

use super::ByteSource;

/// Reads fixed-size blocks into one heap buffer that is reused for every chunk.
///
/// Peak memory is the buffer size regardless of how large the file is.
#[derive(Debug)]
pub struct ChunkedSource<R> {
    reader: R,
    path: PathBuf,
    buffer: Vec<u8>,
}

impl<R: Read> ChunkedSource<R> {
    /// `chunk_size` must be non-zero; [`ScanOptions::validate`](super::ScanOptions::validate)
    /// enforces that before a source is built.
    #[must_use]
    pub fn new(reader: R, path: &Path, chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        Self {
            reader,
            path: path.to_path_buf(),
            buffer: vec![0; chunk_size],
        }
    }

    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.buffer.len()
    }
}

impl<R: Read> ByteSource for ChunkedSource<R> {
    fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(&self.buffer[..n])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(LocScanError::from_io(&self.path, e)),
            }
        }
    }
}
