use serde::Serialize;

use crate::language::CommentSyntax;

use super::matcher::{MarkerMatcher, Step};

/// Line totals for one file.
///
/// Every line falls in exactly one class, so
/// `loc + comment_lines + blank_lines == total_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCount {
    pub total_lines: u64,
    pub loc: u64,
    /// Lines below the LOC threshold that hold comment content.
    pub comment_lines: u64,
    /// Lines below the LOC threshold without any comment content.
    pub blank_lines: u64,
}

impl LineCount {
    #[must_use]
    pub const fn new(total_lines: u64, loc: u64, comment_lines: u64, blank_lines: u64) -> Self {
        Self {
            total_lines,
            loc,
            comment_lines,
            blank_lines,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Code,
    SingleLineComment,
    MultiLineComment,
}

/// Everything the scanner must carry from one chunk to the next.
#[derive(Debug, Clone)]
struct ScanState<'a> {
    mode: Mode,
    single_line: Option<MarkerMatcher<'a>>,
    multi_line_start: Option<MarkerMatcher<'a>>,
    multi_line_end: Option<MarkerMatcher<'a>>,
    /// The line marker matched while the block start was still partial.
    pending_single_line: bool,
    valid_symbols: usize,
    comment_seen: bool,
    counts: LineCount,
    last_byte: Option<u8>,
}

impl<'a> ScanState<'a> {
    fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            mode: Mode::Code,
            single_line: syntax.single_line().map(MarkerMatcher::new),
            multi_line_start: syntax.multi_line_start().map(MarkerMatcher::new),
            multi_line_end: syntax.multi_line_end().map(MarkerMatcher::new),
            pending_single_line: false,
            valid_symbols: 0,
            comment_seen: false,
            counts: LineCount::default(),
            last_byte: None,
        }
    }

    fn reset_markers(&mut self) {
        for matcher in [
            &mut self.single_line,
            &mut self.multi_line_start,
            &mut self.multi_line_end,
        ]
        .into_iter()
        .flatten()
        {
            matcher.reset();
        }
    }

    fn enter(&mut self, mode: Mode) {
        self.mode = mode;
        self.pending_single_line = false;
        self.comment_seen = true;
        self.reset_markers();
    }

    /// Anything but the rest of the block start commits a pending line comment.
    fn settle_pending(&mut self) {
        if self.pending_single_line {
            self.enter(Mode::SingleLineComment);
        }
    }
}

/// Space, tab, CR, VT and FF. `\n` is handled separately as the line boundary.
const fn is_ignorable(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

const fn is_high_bit(byte: u8) -> bool {
    byte & 0x80 != 0
}

/// Streaming comment-aware line counter.
///
/// Feed it the bytes of one file in order, in as many chunks as convenient,
/// then call [`LineScanner::finish`]. Chunk boundaries never change the result.
///
/// A line is LOC when the number of valid symbols on it is strictly greater
/// than [`CommentSyntax::minimum_characters`]. Valid symbols are ASCII bytes
/// that are not whitespace, not part of a comment marker and not inside a
/// comment. Bytes with the high bit set (any part of a multi-byte UTF-8
/// sequence) never count.
///
/// When the block start begins with the line marker (`--` and `--[[`), the
/// block start takes priority: a completed line marker is held until the
/// block start either completes or fails.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    minimum_characters: usize,
    state: ScanState<'a>,
}

impl<'a> LineScanner<'a> {
    #[must_use]
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            minimum_characters: syntax.minimum_characters(),
            state: ScanState::new(syntax),
        }
    }

    /// Consumes the next chunk of the byte stream.
    pub fn feed(&mut self, chunk: &[u8]) {
        let Some(&last) = chunk.last() else {
            return;
        };

        let mut pos = 0;
        while pos < chunk.len() {
            if self.state.mode == Mode::SingleLineComment {
                // Nothing inside a line comment can end it except the newline.
                match memchr::memchr(b'\n', &chunk[pos..]) {
                    Some(offset) => pos += offset,
                    None => break,
                }
            }
            self.step(chunk[pos]);
            pos += 1;
        }

        self.state.last_byte = Some(last);
    }

    /// Flushes an unterminated last line and returns the totals.
    #[must_use]
    pub fn finish(mut self) -> LineCount {
        if matches!(self.state.last_byte, Some(byte) if byte != b'\n') {
            self.end_line();
        }
        self.state.counts
    }

    fn step(&mut self, byte: u8) {
        if byte == b'\n' {
            self.end_line();
            return;
        }

        if is_ignorable(byte) {
            self.state.settle_pending();
            self.state.reset_markers();
            return;
        }

        if self.state.mode != Mode::Code {
            self.state.comment_seen = true;
        }

        if is_high_bit(byte) {
            self.state.settle_pending();
            self.state.reset_markers();
            return;
        }

        let consumed = match self.state.mode {
            Mode::Code => self.match_opening(byte),
            Mode::MultiLineComment => self.match_closing(byte),
            Mode::SingleLineComment => false,
        };
        if consumed {
            return;
        }

        if self.state.mode == Mode::Code {
            self.state.valid_symbols += 1;
        }
        self.state.reset_markers();
    }

    /// Offers `byte` to both opening markers. The block start has priority.
    fn match_opening(&mut self, byte: u8) -> bool {
        let start = self
            .state
            .multi_line_start
            .as_mut()
            .map(|m| m.advance(byte));
        let single = self.state.single_line.as_mut().map(|m| m.advance(byte));

        if start == Some(Step::Complete) {
            self.state.enter(Mode::MultiLineComment);
            return true;
        }

        if self.state.pending_single_line {
            if start != Some(Step::Partial) {
                self.state.enter(Mode::SingleLineComment);
            }
            return true;
        }

        if single == Some(Step::Complete) {
            if start == Some(Step::Partial) {
                self.state.pending_single_line = true;
                self.state.comment_seen = true;
            } else {
                self.state.enter(Mode::SingleLineComment);
            }
            return true;
        }

        start == Some(Step::Partial) || single == Some(Step::Partial)
    }

    fn match_closing(&mut self, byte: u8) -> bool {
        let Some(end) = self.state.multi_line_end.as_mut() else {
            return false;
        };

        match end.advance(byte) {
            Step::Complete => {
                self.state.enter(Mode::Code);
                true
            }
            Step::Partial => true,
            Step::Miss => false,
        }
    }

    fn end_line(&mut self) {
        let state = &mut self.state;
        state.counts.total_lines += 1;
        if state.valid_symbols > self.minimum_characters {
            state.counts.loc += 1;
        } else if state.comment_seen {
            state.counts.comment_lines += 1;
        } else {
            state.counts.blank_lines += 1;
        }
        state.valid_symbols = 0;
        state.comment_seen = false;
        state.pending_single_line = false;
        if state.mode == Mode::SingleLineComment {
            state.mode = Mode::Code;
        }
        state.reset_markers();
    }
}

/// Counts an in-memory buffer in one pass.
#[must_use]
pub fn count_bytes(bytes: &[u8], syntax: &CommentSyntax) -> LineCount {
    let mut scanner = LineScanner::new(syntax);
    scanner.feed(bytes);
    scanner.finish()
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
