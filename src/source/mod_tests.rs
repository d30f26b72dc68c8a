use std::io::{self, Cursor, Read};
use std::path::Path;

use super::*;

fn drain<S: ByteSource>(source: &mut S) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    while let Some(chunk) = source.next_chunk().unwrap() {
        chunks.push(chunk.to_vec());
    }
    chunks
}

// =============================================================================
// Strategy / ScanOptions
// =============================================================================

#[test]
fn strategy_default_is_mmap() {
    assert_eq!(Strategy::default(), Strategy::Mmap);
}

#[test]
fn strategy_from_str_roundtrips_display() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
    }
    assert_eq!("WHOLE".parse::<Strategy>(), Ok(Strategy::WholeFile));
    assert!("stream".parse::<Strategy>().is_err());
}

#[test]
fn strategy_serializes_kebab_case() {
    let json = serde_json::to_string(&Strategy::WholeFile).unwrap();
    assert_eq!(json, "\"whole-file\"");
}

#[test]
fn options_default_uses_four_mebibyte_chunks() {
    let options = ScanOptions::default();
    assert_eq!(options.strategy, Strategy::Mmap);
    assert_eq!(options.chunk_size, 4 * 1024 * 1024);
    assert!(options.validate().is_ok());
}

#[test]
fn options_reject_zero_chunk_size() {
    let err = ScanOptions::new(Strategy::Chunked)
        .with_chunk_size(0)
        .validate()
        .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ScanOptions = serde_json::from_str(r#"{"strategy": "chunked"}"#).unwrap();
    assert_eq!(options.strategy, Strategy::Chunked);
    assert_eq!(options.chunk_size, DEFAULT_CHUNK_SIZE);
}

// =============================================================================
// ChunkedSource
// =============================================================================

#[test]
fn chunked_source_splits_into_fixed_blocks() {
    let mut source = ChunkedSource::new(Cursor::new(b"abcdefg".to_vec()), Path::new("t"), 3);
    assert_eq!(source.chunk_size(), 3);
    assert_eq!(
        drain(&mut source),
        vec![b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]
    );
}

#[test]
fn chunked_source_on_empty_reader() {
    let mut source = ChunkedSource::new(Cursor::new(Vec::new()), Path::new("t"), 8);
    assert!(drain(&mut source).is_empty());
}

struct FlakyReader {
    interrupted: bool,
    data: Cursor<Vec<u8>>,
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        self.data.read(buf)
    }
}

#[test]
fn chunked_source_retries_interrupted_reads() {
    let reader = FlakyReader {
        interrupted: false,
        data: Cursor::new(b"xy".to_vec()),
    };
    let mut source = ChunkedSource::new(reader, Path::new("t"), 16);
    assert_eq!(drain(&mut source), vec![b"xy".to_vec()]);
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn chunked_source_reports_read_failure_with_path() {
    let mut source = ChunkedSource::new(BrokenReader, Path::new("src/lib.rs"), 16);
    let err = source.next_chunk().unwrap_err();
    assert_eq!(err.error_type(), "Io");
    assert_eq!(err.path(), Some(Path::new("src/lib.rs")));
}

// =============================================================================
// WholeFileSource
// =============================================================================

#[test]
fn whole_file_source_yields_one_chunk() {
    let mut source =
        WholeFileSource::read(Cursor::new(b"line\n".to_vec()), Path::new("t"), 5).unwrap();
    assert_eq!(source.len(), 5);
    assert_eq!(drain(&mut source), vec![b"line\n".to_vec()]);
    assert!(source.next_chunk().unwrap().is_none());
}

#[test]
fn whole_file_source_reads_past_stale_size() {
    // The size is only a capacity hint; the reader decides where the end is.
    let mut source =
        WholeFileSource::read(Cursor::new(b"grown".to_vec()), Path::new("t"), 2).unwrap();
    assert_eq!(drain(&mut source), vec![b"grown".to_vec()]);
}

#[test]
fn whole_file_source_reports_allocation_failure() {
    let err = WholeFileSource::read(Cursor::new(Vec::new()), Path::new("huge"), u64::MAX)
        .unwrap_err();
    assert!(matches!(err, LocScanError::Allocation { size: u64::MAX, .. }));
}

#[test]
fn whole_file_source_reports_read_failure() {
    let err = WholeFileSource::read(BrokenReader, Path::new("a.c"), 4).unwrap_err();
    assert_eq!(err.error_type(), "Io");
}

// =============================================================================
// MmapSource
// =============================================================================

#[test]
fn mmap_source_yields_whole_file_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("mapped.txt");
    std::fs::write(&path, b"one\ntwo\n").unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let mut source = MmapSource::open(&file, &path).unwrap();
    assert_eq!(source.len(), 8);
    assert_eq!(drain(&mut source), vec![b"one\ntwo\n".to_vec()]);
}
