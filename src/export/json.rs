//! JSON export of the words still to learn.
//! Writes a snapshot of the deck to a file picked by the user.

use crate::error::ExportError;
use crate::models::WordPair;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct WordExport {
    pub exported_at: String,
    pub source_language: String,
    pub target_language: String,
    pub words: Vec<WordPair>,
}

impl WordExport {
    pub fn new(
        words: &[WordPair],
        source_language: &str,
        target_language: &str,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            exported_at: at.to_rfc3339(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            words: words.to_vec(),
        }
    }
}

/// Suggested file name for an export made at `at`, e.g. `words_to_learn-2024-05-01.json`.
pub fn default_file_name(at: DateTime<Local>) -> String {
    format!("words_to_learn-{}.json", at.format("%Y-%m-%d"))
}

/// Exports the words to a JSON file at the specified path.
pub fn export_json_to_path(export: &WordExport, path: &Path) -> Result<(), ExportError> {
    let json_string = serde_json::to_string_pretty(export)?;
    fs::write(path, json_string).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Exported {} words to '{}'",
        export.words.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_test_export() -> WordExport {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        WordExport::new(
            &[
                WordPair::new("Bonjour", "Hello"),
                WordPair::new("Merci", "Thank you"),
            ],
            "French",
            "English",
            at,
        )
    }

    #[test]
    fn test_default_file_name() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();
        assert_eq!(default_file_name(at), "words_to_learn-2024-05-01.json");
    }

    #[test]
    fn test_export_json_to_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.json");

        export_json_to_path(&create_test_export(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["source_language"], "French");
        assert_eq!(value["words"].as_array().unwrap().len(), 2);
        assert_eq!(value["words"][1]["source_term"], "Merci");
        assert_eq!(value["words"][1]["target_term"], "Thank you");
        assert!(value["exported_at"].as_str().unwrap().starts_with("2024-05-01T09:30:00"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("export.json");

        let result = export_json_to_path(&create_test_export(), &path);

        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
