use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{LocScanError, Result};

use super::ByteSource;

/// Read-only mapping of a whole file, handed out as a single chunk.
///
/// The mapping is released when the source is dropped.
#[derive(Debug)]
pub struct MmapSource {
    map: Mmap,
    consumed: bool,
}

impl MmapSource {
    /// Maps `file` read-only.
    ///
    /// # Errors
    /// Returns [`LocScanError::Map`] if the mapping cannot be created, for
    /// example because the file does not fit the address space.
    pub fn open(file: &File, path: &Path) -> Result<Self> {
        // SAFETY: the mapping is read-only and only lives for one scan. A file
        // truncated by another process while mapped is outside what we guard.
        let map = unsafe { Mmap::map(file) }.map_err(|e| LocScanError::map_failed(path, e))?;

        #[cfg(unix)]
        {
            if let Err(e) = map.advise(memmap2::Advice::Sequential) {
                tracing::trace!(path = %path.display(), error = %e, "madvise(SEQUENTIAL) failed");
            }
        }

        Ok(Self {
            map,
            consumed: false,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl ByteSource for MmapSource {
    fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        if self.consumed || self.map.is_empty() {
            return Ok(None);
        }
        self.consumed = true;
        Ok(Some(&self.map[..]))
    }
}
