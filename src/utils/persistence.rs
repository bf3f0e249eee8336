//! Generic JSON persistence helpers for the store's data directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load a JSON file.
///
/// Returns None if the file is missing or unreadable. A file that exists
/// but does not parse is removed so the next save starts clean.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!(
                "{} contained invalid JSON and was removed: {}",
                path.display(),
                e
            );
            fs::remove_file(path).ok();
            None
        }
    }
}

/// Write a value to a `.tmp` file next to `path` without touching `path`.
/// Returns the staged file, to be moved into place by `commit_staged`.
pub fn stage_json<T: Serialize>(path: &Path, data: &T) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    let staged = PathBuf::from(staged);
    fs::write(&staged, json)?;
    Ok(staged)
}

/// Atomically replace `path` with a staged file.
pub fn commit_staged(staged: &Path, path: &Path) -> io::Result<()> {
    fs::rename(staged, path).map_err(|e| {
        fs::remove_file(staged).ok();
        e
    })
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let staged = stage_json(path, data)?;
    commit_staged(&staged, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_dir() -> PathBuf {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "roulette-persistence-{}-{}",
            std::process::id(),
            id
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = temp_dir();
        let val: Option<Vec<String>> = load_json(&dir.join("nonexistent.json"));
        assert!(val.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = temp_dir();
        let path = dir.join("nested").join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Option<Vec<String>> = load_json(&path);
        assert_eq!(loaded, Some(data));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_staged_file_leaves_target_alone_until_commit() {
        let dir = temp_dir();
        let path = dir.join("data.json");
        save_json(&path, &vec![1, 2]).unwrap();

        let staged = stage_json(&path, &vec![3]).unwrap();
        assert_eq!(load_json::<Vec<i32>>(&path), Some(vec![1, 2]));

        commit_staged(&staged, &path).unwrap();
        assert_eq!(load_json::<Vec<i32>>(&path), Some(vec![3]));
        assert!(!staged.exists());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_json_is_removed() {
        let dir = temp_dir();
        let path = dir.join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let loaded: Option<Vec<String>> = load_json(&path);
        assert!(loaded.is_none());
        assert!(!path.exists());
        fs::remove_dir_all(dir).ok();
    }
}
