//! Comment-aware line counting for single source files.
//!
//! The core is [`counter::LineScanner`], a byte-level state machine that
//! classifies every byte as code, single-line comment or block comment and
//! decides per line whether it is a line of code. [`source`] provides the
//! interchangeable ways of reading a file into it, and [`scan_file`] ties the
//! two together.

pub mod cli;
pub mod counter;
pub mod error;
pub mod language;
pub mod output;
pub mod scan;
pub mod source;

pub use counter::{LineCount, LineScanner, count_bytes};
pub use error::{LocScanError, Result};
pub use language::CommentSyntax;
pub use scan::{FileOutcome, scan, scan_file, scan_files, scan_source};
pub use source::{ScanOptions, Strategy};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SCAN_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
