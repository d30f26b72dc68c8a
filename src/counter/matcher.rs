/// Outcome of offering one byte to a [`MarkerMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The byte extended the match but the marker is not complete yet.
    Partial,
    /// The byte completed the marker; progress is back at zero.
    Complete,
    /// The byte did not extend the match; progress is back at zero.
    Miss,
}

/// Incremental prefix matcher for a single comment marker.
///
/// Deliberately naive: a mismatch drops all progress and the mismatching
/// byte is not re-tested as the first byte of a new match. Markers whose
/// prefix recurs inside themselves (`"aab"` fed `"aaab"`) are therefore
/// missed. This keeps counts identical to the established scanner output.
#[derive(Debug, Clone)]
pub struct MarkerMatcher<'a> {
    marker: &'a [u8],
    matched: usize,
}

impl<'a> MarkerMatcher<'a> {
    /// `marker` must be non-empty; `CommentSyntax` guarantees it.
    #[must_use]
    pub const fn new(marker: &'a [u8]) -> Self {
        Self { marker, matched: 0 }
    }

    pub fn advance(&mut self, byte: u8) -> Step {
        if self.marker.get(self.matched) != Some(&byte) {
            self.matched = 0;
            return Step::Miss;
        }

        self.matched += 1;
        if self.matched == self.marker.len() {
            self.matched = 0;
            Step::Complete
        } else {
            Step::Partial
        }
    }

    pub const fn reset(&mut self) {
        self.matched = 0;
    }

    #[cfg(test)]
    pub const fn progress(&self) -> usize {
        self.matched
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
