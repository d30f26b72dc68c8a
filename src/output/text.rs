use std::fmt::Write;

use crate::error::Result;
use crate::scan::FileOutcome;

use super::OutputFormatter;

/// One line per file: `path: <total> lines, <loc> loc, <comment> comment, <blank> blank`.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, outcomes: &[FileOutcome]) -> Result<String> {
        let mut output = String::new();

        for outcome in outcomes {
            let path = outcome.path.display();
            match &outcome.result {
                Ok(count) => {
                    let _ = writeln!(
                        output,
                        "{path}: {} lines, {} loc, {} comment, {} blank",
                        count.total_lines, count.loc, count.comment_lines, count.blank_lines
                    );
                }
                Err(e) => {
                    let _ = writeln!(output, "{path}: error: {e}");
                }
            }
        }

        Ok(output)
    }
}
