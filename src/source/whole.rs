use std::io::Read;
use std::path::Path;

use crate::error::{LocScanError, Result};

use super::ByteSource;

/// The complete file contents in one buffer allocated up front.
#[derive(Debug)]
pub struct WholeFileSource {
    buffer: Vec<u8>,
    consumed: bool,
}

impl WholeFileSource {
    /// Allocates `size` bytes and reads `reader` to the end.
    ///
    /// # Errors
    /// Returns [`LocScanError::Allocation`] if a buffer of `size` bytes cannot
    /// be allocated, or an I/O error if reading fails.
    pub fn read<R: Read>(mut reader: R, path: &Path, size: u64) -> Result<Self> {
        let capacity = usize::try_from(size).map_err(|_| LocScanError::Allocation {
            path: path.to_path_buf(),
            size,
            source: None,
        })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|e| LocScanError::Allocation {
                path: path.to_path_buf(),
                size,
                source: Some(e),
            })?;

        reader
            .read_to_end(&mut buffer)
            .map_err(|e| LocScanError::from_io(path, e))?;

        Ok(Self {
            buffer,
            consumed: false,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl ByteSource for WholeFileSource {
    fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        if self.consumed || self.buffer.is_empty() {
            return Ok(None);
        }
        self.consumed = true;
        Ok(Some(self.buffer.as_slice()))
    }
}
