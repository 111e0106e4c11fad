//! CSV storage for the word deck.
//!
//! Two files share the same two-column layout: the original deck, which is
//! never written, and the progress file holding the words still to learn.
//! Columns are read by position, so any header row is accepted.

use crate::config::Config;
use crate::error::StoreError;
use crate::models::WordPair;
use crate::models::word_pair::builtin_pairs;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where the words of the current deck came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckSource {
    Progress,
    Original,
    BuiltIn,
}

#[derive(Clone, Debug)]
pub struct CsvDeckStore {
    original_path: PathBuf,
    progress_path: PathBuf,
    source_language: String,
    target_language: String,
}

impl CsvDeckStore {
    pub fn new(original_path: impl Into<PathBuf>, progress_path: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            original_path: original_path.into(),
            progress_path: progress_path.into(),
            source_language: defaults.source_language,
            target_language: defaults.target_language,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            original_path: config.original_path.clone(),
            progress_path: config.progress_path.clone(),
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
        }
    }

    pub fn original_path(&self) -> &Path {
        &self.original_path
    }

    pub fn progress_path(&self) -> &Path {
        &self.progress_path
    }

    pub fn load_progress(&self) -> Result<Option<Vec<WordPair>>, StoreError> {
        read_pairs(&self.progress_path)
    }

    pub fn load_original(&self) -> Result<Option<Vec<WordPair>>, StoreError> {
        read_pairs(&self.original_path)
    }

    /// Startup order: progress file, then original deck, then built-in words.
    pub fn load_initial(&self) -> Result<(Vec<WordPair>, DeckSource), StoreError> {
        if let Some(pairs) = self.load_progress()? {
            log::info!(
                "Resuming {} words from '{}'",
                pairs.len(),
                self.progress_path.display()
            );
            return Ok((pairs, DeckSource::Progress));
        }
        self.load_reset()
    }

    /// Reset order: original deck, then built-in words. Progress is ignored.
    pub fn load_reset(&self) -> Result<(Vec<WordPair>, DeckSource), StoreError> {
        if let Some(pairs) = self.load_original()? {
            log::info!(
                "Loaded {} words from '{}'",
                pairs.len(),
                self.original_path.display()
            );
            return Ok((pairs, DeckSource::Original));
        }

        log::warn!(
            "Neither '{}' nor '{}' found. Using built-in words.",
            self.progress_path.display(),
            self.original_path.display()
        );
        Ok((builtin_pairs(), DeckSource::BuiltIn))
    }

    /// Overwrites the progress file with `pairs`, header row first.
    pub fn save_progress(&self, pairs: &[WordPair]) -> Result<(), StoreError> {
        let path = &self.progress_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
        writer
            .write_record([&self.source_language, &self.target_language])
            .map_err(write_err)?;
        for pair in pairs {
            writer
                .write_record([&pair.source_term, &pair.target_term])
                .map_err(write_err)?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        log::debug!("Saved {} words to '{}'", pairs.len(), path.display());
        Ok(())
    }

    /// Deletes the progress file. Returns false when there was nothing to delete.
    pub fn clear_progress(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.progress_path) {
            Ok(()) => {
                log::info!("Removed '{}'", self.progress_path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io {
                path: self.progress_path.clone(),
                source,
            }),
        }
    }
}

/// Reads a two-column CSV file. `Ok(None)` when the file does not exist.
fn read_pairs(path: &Path) -> Result<Option<Vec<WordPair>>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut pairs = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match (record.get(0), record.get(1)) {
            (Some(source_term), Some(target_term)) => {
                pairs.push(WordPair::new(source_term, target_term));
            }
            _ => log::warn!(
                "Skipping row {} of '{}': expected two columns",
                row_idx + 2,
                path.display()
            ),
        }
    }

    Ok(Some(pairs))
}
