use serde::{Deserialize, Serialize};

use crate::error::{LocScanError, Result};

/// Start/end markers of a block comment. Both are always present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLinePair {
    start: Box<[u8]>,
    end: Box<[u8]>,
}

impl MultiLinePair {
    #[must_use]
    pub fn start(&self) -> &[u8] {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &[u8] {
        &self.end
    }
}

/// How comments look in one language, plus the LOC threshold.
///
/// Validated once on construction; scans only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCommentSyntax", into = "RawCommentSyntax")]
pub struct CommentSyntax {
    single_line: Option<Box<[u8]>>,
    multi_line: Option<MultiLinePair>,
    minimum_characters: usize,
}

impl CommentSyntax {
    /// Builds a descriptor from its loose parts.
    ///
    /// # Errors
    /// Returns [`LocScanError::Config`] if only one of the multi-line markers is
    /// given, or if any supplied marker is empty.
    pub fn new(
        single_line: Option<&[u8]>,
        multi_line_start: Option<&[u8]>,
        multi_line_end: Option<&[u8]>,
        minimum_characters: usize,
    ) -> Result<Self> {
        let single_line = single_line
            .map(|marker| non_empty("single-line marker", marker))
            .transpose()?;

        let multi_line = match (multi_line_start, multi_line_end) {
            (Some(start), Some(end)) => Some(MultiLinePair {
                start: non_empty("multi-line start marker", start)?,
                end: non_empty("multi-line end marker", end)?,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(LocScanError::Config(
                    "multi-line start marker given without an end marker".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(LocScanError::Config(
                    "multi-line end marker given without a start marker".to_string(),
                ));
            }
        };

        Ok(Self {
            single_line,
            multi_line,
            minimum_characters,
        })
    }

    /// Descriptor for a language with only line comments.
    ///
    /// # Errors
    /// Returns [`LocScanError::Config`] if `marker` is empty.
    pub fn with_single_line(marker: &str, minimum_characters: usize) -> Result<Self> {
        Self::new(Some(marker.as_bytes()), None, None, minimum_characters)
    }

    /// Descriptor for a language with only block comments.
    ///
    /// # Errors
    /// Returns [`LocScanError::Config`] if either marker is empty.
    pub fn with_multi_line(start: &str, end: &str, minimum_characters: usize) -> Result<Self> {
        Self::new(
            None,
            Some(start.as_bytes()),
            Some(end.as_bytes()),
            minimum_characters,
        )
    }

    /// `//` line comments and `/* */` blocks.
    #[must_use]
    pub fn c_style(minimum_characters: usize) -> Self {
        Self {
            single_line: Some(Box::from(&b"//"[..])),
            multi_line: Some(MultiLinePair {
                start: Box::from(&b"/*"[..]),
                end: Box::from(&b"*/"[..]),
            }),
            minimum_characters,
        }
    }

    /// A descriptor without comment markers: every non-blank line is content.
    #[must_use]
    pub const fn plain(minimum_characters: usize) -> Self {
        Self {
            single_line: None,
            multi_line: None,
            minimum_characters,
        }
    }

    #[must_use]
    pub fn single_line(&self) -> Option<&[u8]> {
        self.single_line.as_deref()
    }

    #[must_use]
    pub const fn multi_line(&self) -> Option<&MultiLinePair> {
        self.multi_line.as_ref()
    }

    #[must_use]
    pub fn multi_line_start(&self) -> Option<&[u8]> {
        self.multi_line.as_ref().map(MultiLinePair::start)
    }

    #[must_use]
    pub fn multi_line_end(&self) -> Option<&[u8]> {
        self.multi_line.as_ref().map(MultiLinePair::end)
    }

    /// A line is LOC only when its valid symbols strictly exceed this.
    #[must_use]
    pub const fn minimum_characters(&self) -> usize {
        self.minimum_characters
    }
}

fn non_empty(what: &str, marker: &[u8]) -> Result<Box<[u8]>> {
    if marker.is_empty() {
        return Err(LocScanError::Config(format!("{what} must not be empty")));
    }
    Ok(Box::from(marker))
}

/// Serialized shape of [`CommentSyntax`]; markers are written as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct RawCommentSyntax {
    single_line: Option<String>,
    multi_line_start: Option<String>,
    multi_line_end: Option<String>,
    minimum_characters: usize,
}

impl TryFrom<RawCommentSyntax> for CommentSyntax {
    type Error = LocScanError;

    fn try_from(raw: RawCommentSyntax) -> Result<Self> {
        Self::new(
            raw.single_line.as_deref().map(str::as_bytes),
            raw.multi_line_start.as_deref().map(str::as_bytes),
            raw.multi_line_end.as_deref().map(str::as_bytes),
            raw.minimum_characters,
        )
    }
}

impl From<CommentSyntax> for RawCommentSyntax {
    fn from(syntax: CommentSyntax) -> Self {
        let lossy = |bytes: &[u8]| String::from_utf8_lossy(bytes).into_owned();
        Self {
            single_line: syntax.single_line().map(lossy),
            multi_line_start: syntax.multi_line_start().map(lossy),
            multi_line_end: syntax.multi_line_end().map(lossy),
            minimum_characters: syntax.minimum_characters,
        }
    }
}
