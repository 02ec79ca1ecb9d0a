//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use tabled::Tabled;

use crate::tree::{record_id, FILES_KEY, FOLDERS_KEY};
use crate::Record;

/// Keys tried, in order, when looking for a human-readable record name.
const NAME_KEYS: &[&str] = &["name", "title", "subject", "number", "email"];

/// Trait for human-readable output.
///
/// Implemented by display wrappers to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// Best-effort display name for an untyped record.
pub fn display_name(record: &Record) -> String {
    NAME_KEYS
        .iter()
        .find_map(|key| match record.get(*key)? {
            Record::String(s) if !s.is_empty() => Some(s.clone()),
            Record::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// One row of a record listing.
#[derive(Debug, Tabled)]
pub struct RecordRow {
    pub id: String,
    pub name: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record_id(record).unwrap_or_default(),
            name: display_name(record),
        }
    }
}

/// A folder tree rendered as an indented outline.
///
/// Folders end with `/`; subfolders are listed before files.
pub struct TreeOutline<'a>(pub &'a Record);

impl PrettyPrint for TreeOutline<'_> {
    fn pretty_print(&self) -> String {
        let mut lines = Vec::new();
        outline_folder(self.0, 0, &mut lines);
        lines.join("\n")
    }
}

fn outline_folder(folder: &Record, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    lines.push(format!("{indent}{}/", label(folder)));

    for child in entries(folder, FOLDERS_KEY) {
        outline_folder(child, depth + 1, lines);
    }
    for file in entries(folder, FILES_KEY) {
        lines.push(format!("{indent}  {}", label(file)));
    }
}

fn entries<'a>(record: &'a Record, key: &str) -> impl Iterator<Item = &'a Record> {
    record
        .get(key)
        .and_then(Record::as_array)
        .into_iter()
        .flatten()
}

fn label(record: &Record) -> String {
    let name = display_name(record);
    if name.is_empty() {
        record_id(record).unwrap_or_else(|| "?".to_string())
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(display_name(&json!({"name": "Plans"})), "Plans");
        assert_eq!(display_name(&json!({"title": "Tower A"})), "Tower A");
        assert_eq!(display_name(&json!({"name": "", "number": 12})), "12");
        assert_eq!(display_name(&json!({"id": "x"})), "");
    }

    #[test]
    fn test_record_row() {
        let row = RecordRow::from(&json!({"id": 7, "subject": "Door hardware"}));
        assert_eq!(row.id, "7");
        assert_eq!(row.name, "Door hardware");
    }

    #[test]
    fn test_tree_outline() {
        let tree = json!({
            "id": "root",
            "name": "Project Files",
            "folders": [
                {
                    "id": "f1",
                    "name": "Plans",
                    "folders": [],
                    "files": [{"id": "a", "name": "A-101.pdf"}]
                }
            ],
            "files": [{"id": "b"}]
        });

        let output = TreeOutline(&tree).pretty_print();
        assert_eq!(output, "Project Files/\n  Plans/\n    A-101.pdf\n  b");
    }
}
