use serde::Serialize;

use crate::error::Result;
use crate::scan::FileOutcome;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct FileEntry {
    path: String,
    #[serde(flatten)]
    outcome: EntryOutcome,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EntryOutcome {
    Counted {
        total_lines: u64,
        loc: u64,
        comment_lines: u64,
        blank_lines: u64,
    },
    Failed { error: ErrorEntry },
}

#[derive(Serialize)]
struct ErrorEntry {
    kind: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcomes: &[FileOutcome]) -> Result<String> {
        let entries: Vec<FileEntry> = outcomes.iter().map(convert_outcome).collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

fn convert_outcome(outcome: &FileOutcome) -> FileEntry {
    FileEntry {
        path: outcome.path.display().to_string(),
        outcome: match &outcome.result {
            Ok(count) => EntryOutcome::Counted {
                total_lines: count.total_lines,
                loc: count.loc,
                comment_lines: count.comment_lines,
                blank_lines: count.blank_lines,
            },
            Err(e) => EntryOutcome::Failed {
                error: ErrorEntry {
                    kind: e.error_type(),
                    message: e.message(),
                },
            },
        },
    }
}
