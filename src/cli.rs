use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::language::CommentSyntax;
use crate::output::OutputFormat;
use crate::source::{DEFAULT_CHUNK_SIZE, ScanOptions, Strategy};

#[derive(Parser, Debug)]
#[command(name = "loc-scan")]
#[command(author, version, about = "Count total lines and lines of code, ignoring comments")]
#[command(long_about = "Counts, for each given file, the total number of lines and the \
    number of lines of code (LOC). A line is LOC when it holds more than --min-chars \
    bytes outside comments and whitespace; the remaining lines are reported as comment \
    or blank lines.\n\n\
    Exit codes:\n  \
    0 - All files scanned\n  \
    1 - At least one file could not be scanned\n  \
    2 - Invalid comment markers or options")]
pub struct Cli {
    /// Files to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Single-line comment marker (e.g. "//" or "#")
    #[arg(short = 's', long, value_name = "MARKER", allow_hyphen_values = true)]
    pub single_line: Option<String>,

    /// Multi-line comment start marker (requires --multi-end)
    #[arg(long, value_name = "MARKER", allow_hyphen_values = true)]
    pub multi_start: Option<String>,

    /// Multi-line comment end marker (requires --multi-start)
    #[arg(long, value_name = "MARKER", allow_hyphen_values = true)]
    pub multi_end: Option<String>,

    /// A line is LOC only with more than this many code characters
    #[arg(short = 'm', long, default_value_t = 0)]
    pub min_chars: usize,

    /// How files are read
    #[arg(long, value_enum, default_value_t = Strategy::Mmap)]
    pub strategy: Strategy,

    /// Buffer size for the chunked strategy (suffixes K, M, G allowed)
    #[arg(long, value_parser = parse_size, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Output format [possible values: text, json] (default: from --output extension, else text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the comment descriptor from the marker flags.
    ///
    /// # Errors
    /// Returns a configuration error for a lone block marker or an empty marker.
    pub fn comment_syntax(&self) -> Result<CommentSyntax> {
        CommentSyntax::new(
            self.single_line.as_deref().map(str::as_bytes),
            self.multi_start.as_deref().map(str::as_bytes),
            self.multi_end.as_deref().map(str::as_bytes),
            self.min_chars,
        )
    }

    /// An explicit --format wins; otherwise the --output extension decides.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| self.output.as_deref().and_then(OutputFormat::from_extension))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(self.strategy).with_chunk_size(self.chunk_size)
    }
}

/// Parses a byte count with an optional binary suffix (`64K`, `4MiB`, `1g`).
///
/// # Errors
/// Returns a message if the number is malformed or overflows.
pub fn parse_size(s: &str) -> std::result::Result<usize, String> {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
    ];

    let cleaned = s.trim().replace('_', "").to_ascii_lowercase();
    let (number, multiplier) = SUFFIXES
        .iter()
        .flat_map(|(suffixes, multiplier)| suffixes.iter().map(move |sfx| (*sfx, *multiplier)))
        .find_map(|(suffix, multiplier)| {
            cleaned
                .strip_suffix(suffix)
                .map(|rest| (rest.trim(), multiplier))
        })
        .unwrap_or((cleaned.as_str(), 1));

    let value: usize = number
        .parse()
        .map_err(|_| format!("Invalid size number: {number}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Size too large: {s}"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
