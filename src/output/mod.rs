mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{LocScanError, Result};
use crate::scan::FileOutcome;

/// Trait for formatting scan outcomes into various output formats.
pub trait OutputFormatter {
    /// Format one entry per scanned file into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, outcomes: &[FileOutcome]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl OutputFormat {
    /// Picks the format implied by an output file's extension, if any.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok().or_else(|| {
            extension
                .eq_ignore_ascii_case("txt")
                .then_some(Self::Text)
        })
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Writes `content` to `output_path`, or to stdout when no path is given.
///
/// # Errors
/// Returns [`LocScanError::Write`] if the file or stdout cannot be written.
/// A closed stdout (e.g. piped into `head`) is not an error.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| LocScanError::write_failed(path, e))?;
        }
        return fs::write(path, content).map_err(|e| LocScanError::write_failed(path, e));
    }

    write_stream(io::stdout().lock(), content)
        .map_err(|e| LocScanError::write_failed(Path::new("<stdout>"), e))
}

fn write_stream<W: Write>(mut writer: W, content: &str) -> io::Result<()> {
    match writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
    {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
