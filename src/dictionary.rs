//! Custom dictionary management
//!
//! Loads extra words (company name, product names, ...) that the estimator
//! treats as user inputs, so passwords built on them score lower.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

static DICTIONARY: RwLock<Option<Vec<String>>> = RwLock::new(None);

const DEFAULT_DICTIONARY_PATH: &str = "./assets/dictionary.txt";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `./assets/dictionary.txt`
pub fn dictionary_path() -> PathBuf {
    std::env::var("PWD_DICTIONARY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_PATH))
}

/// Initializes the custom dictionary from the configured path.
///
/// See [`dictionary_path`] for how the path is resolved.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_dictionary() -> Result<usize, DictionaryError> {
    init_dictionary_from_path(dictionary_path())
}

/// Initializes the custom dictionary from a specific file path.
///
/// One word per line; lines are trimmed and lowercased, blank lines skipped.
/// Idempotent: once loaded, later calls return the existing word count.
pub fn init_dictionary_from_path<P: AsRef<Path>>(path: P) -> Result<usize, DictionaryError> {
    {
        let guard = DICTIONARY.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: FileNotFound {:?}", path);
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let words: BTreeSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: Empty file {:?}", path);
        return Err(DictionaryError::EmptyFile);
    }

    let count = words.len();
    {
        let mut guard = DICTIONARY.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded it while we were reading the file
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(words.into_iter().collect());
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the loaded words, or `None` before initialization.
pub fn get_dictionary() -> Option<Vec<String>> {
    DICTIONARY.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Runs `f` with the loaded words borrowed as `&str` (empty if not loaded).
pub(crate) fn with_words<R>(f: impl FnOnce(&[&str]) -> R) -> R {
    let guard = DICTIONARY.read().unwrap_or_else(PoisonError::into_inner);
    let words: Vec<&str> = guard
        .as_ref()
        .map(|w| w.iter().map(String::as_str).collect())
        .unwrap_or_default();
    f(&words)
}

#[cfg(test)]
pub fn reset_dictionary_for_testing() {
    *DICTIONARY.write().unwrap_or_else(PoisonError::into_inner) = None;
}
