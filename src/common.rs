//! Common password list
//!
//! Loads a list of well-known passwords once per process and answers
//! case-insensitive membership queries. The list is advisory: it feeds form
//! validation but never changes a [`ValidationReport`](crate::ValidationReport).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Environment variable overriding the list location.
pub const COMMON_LIST_ENV: &str = "PWD_COMMON_LIST_PATH";

const DEFAULT_COMMON_LIST_PATH: &str = "./assets/common-passwords.txt";

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password list: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password list is empty")]
    EmptyFile,
}

// The set is replaced wholesale, so a poisoned lock still holds a usable value.
fn read_list() -> RwLockReadGuard<'static, Option<HashSet<String>>> {
    COMMON_PASSWORDS.read().unwrap_or_else(|e| e.into_inner())
}

fn write_list() -> RwLockWriteGuard<'static, Option<HashSet<String>>> {
    COMMON_PASSWORDS.write().unwrap_or_else(|e| e.into_inner())
}

/// Returns the list file path.
///
/// Priority:
/// 1. Environment variable `PWD_COMMON_LIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn common_list_path() -> PathBuf {
    std::env::var(COMMON_LIST_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_LIST_PATH))
}

/// Loads the common password list from [`common_list_path`].
///
/// Returns the number of distinct entries. Once a list is loaded, further
/// calls are no-ops returning the existing count.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or has no entries.
pub fn init_common_passwords() -> Result<usize, CommonListError> {
    init_common_passwords_from_path(common_list_path())
}

/// Loads the common password list from an explicit path.
///
/// One password per line; surrounding whitespace and blank lines are ignored
/// and entries are stored lowercased.
pub fn init_common_passwords_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CommonListError> {
    if let Some(existing) = read_list().as_ref() {
        return Ok(existing.len());
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common password list FAILED: not found {:?}", path);
        return Err(CommonListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common password list FAILED: empty file {:?}", path);
        return Err(CommonListError::EmptyFile);
    }

    // Another thread may have won the race.
    let loaded = write_list().get_or_insert(set).len();

    #[cfg(feature = "tracing")]
    tracing::info!("Common password list loaded: {} entries from {:?}", loaded, path);

    Ok(loaded)
}

/// Returns `true` if the list is loaded and contains `password` (case-insensitive).
pub fn is_common_password(password: &str) -> bool {
    read_list()
        .as_ref()
        .is_some_and(|list| list.contains(&password.to_lowercase()))
}

/// Number of loaded entries, or `None` before initialization.
pub fn common_password_count() -> Option<usize> {
    read_list().as_ref().map(HashSet::len)
}

#[cfg(test)]
pub(crate) fn reset_common_passwords_for_testing() {
    *write_list() = None;
}
