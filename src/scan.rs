use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::counter::{LineCount, LineScanner};
use crate::error::{LocScanError, Result};
use crate::language::CommentSyntax;
use crate::source::{
    ByteSource, ChunkedSource, MmapSource, ScanOptions, Strategy, WholeFileSource,
};

/// Drives one byte source through a fresh scanner until it is exhausted.
///
/// # Errors
/// Propagates the first error returned by the source.
pub fn scan_source<S: ByteSource + ?Sized>(
    source: &mut S,
    syntax: &CommentSyntax,
) -> Result<LineCount> {
    let mut scanner = LineScanner::new(syntax);
    while let Some(chunk) = source.next_chunk()? {
        trace!(len = chunk.len(), "chunk");
        scanner.feed(chunk);
    }
    Ok(scanner.finish())
}

/// Counts total lines and LOC of the file at `path`.
///
/// Empty files return `(0, 0)` without reading anything. The strategy in
/// `options` only decides how bytes are obtained; every strategy yields the
/// same counts for the same file.
///
/// # Errors
/// - [`LocScanError::Config`] if `options` is invalid (checked before any I/O)
/// - [`LocScanError::NotFound`] / [`LocScanError::PermissionDenied`] /
///   [`LocScanError::Io`] if the file cannot be opened, stat'ed or read
/// - [`LocScanError::Map`] if the memory mapping fails
/// - [`LocScanError::Allocation`] if the whole-file buffer cannot be allocated
pub fn scan_file(path: &Path, syntax: &CommentSyntax, options: &ScanOptions) -> Result<LineCount> {
    options.validate()?;

    let file = File::open(path).map_err(|e| LocScanError::from_io(path, e))?;
    let metadata = file.metadata().map_err(|e| LocScanError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(LocScanError::from_io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        ));
    }

    let size = metadata.len();
    if size == 0 {
        debug!(path = %path.display(), "empty file");
        return Ok(LineCount::default());
    }

    debug!(path = %path.display(), strategy = %options.strategy, size, "scanning");
    let count = match options.strategy {
        Strategy::Mmap => scan_source(&mut MmapSource::open(&file, path)?, syntax),
        Strategy::Chunked => scan_source(
            &mut ChunkedSource::new(file, path, options.chunk_size),
            syntax,
        ),
        Strategy::WholeFile => scan_source(&mut WholeFileSource::read(file, path, size)?, syntax),
    }?;

    debug!(
        path = %path.display(),
        total_lines = count.total_lines,
        loc = count.loc,
        comment_lines = count.comment_lines,
        blank_lines = count.blank_lines,
        "scanned"
    );
    Ok(count)
}

/// Single-call entry point taking the comment markers as loose parts.
///
/// Uses [`ScanOptions::default`] (memory-mapped reads).
///
/// # Errors
/// [`LocScanError::Config`] if the markers do not form a valid
/// [`CommentSyntax`]; otherwise the errors of [`scan_file`].
pub fn scan(
    path: &Path,
    single_line: Option<&[u8]>,
    multi_line_start: Option<&[u8]>,
    multi_line_end: Option<&[u8]>,
    minimum_characters: usize,
) -> Result<LineCount> {
    let syntax = CommentSyntax::new(
        single_line,
        multi_line_start,
        multi_line_end,
        minimum_characters,
    )?;
    scan_file(path, &syntax, &ScanOptions::default())
}

/// Result of scanning one file as part of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<LineCount>,
}

/// Scans several files in parallel.
///
/// Each file gets its own handle and scanner; outcomes are returned in the
/// order of `paths`, and a failure on one file does not affect the others.
#[must_use]
pub fn scan_files<P>(paths: &[P], syntax: &CommentSyntax, options: &ScanOptions) -> Vec<FileOutcome>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            FileOutcome {
                path: path.to_path_buf(),
                result: scan_file(path, syntax, options),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
