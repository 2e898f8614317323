use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::StorageError;

use super::StorageBackend;

const DEFAULT_DIR_NAME: &str = ".finance_core";
const STORE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-per-key JSON backend rooted at a single data directory.
///
/// Writes are staged to a temporary sibling and renamed into place, so an
/// interrupted write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens (creating if needed) a store rooted at `root`, defaulting to
    /// `~/.finance_core`.
    pub fn new(root: Option<PathBuf>) -> Result<Self, StorageError> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the on-disk file backing a key (slug applied).
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), STORE_EXTENSION))
    }
}

impl StorageBackend for JsonStore {
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        write_file(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }
}

fn default_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "store".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), StorageError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn write_then_read_returns_the_payload() {
        let (store, _guard) = store_with_temp_dir();
        store.write("bills", "[]").expect("write payload");
        let payload = store.read("bills").expect("read payload");
        assert_eq!(payload.as_deref(), Some("[]"));
    }

    #[test]
    fn read_of_missing_key_is_none() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.read("transactions").expect("read").is_none());
    }

    #[test]
    fn overwriting_replaces_the_previous_payload() {
        let (store, _guard) = store_with_temp_dir();
        store.write("bills", "[1]").unwrap();
        store.write("bills", "[2]").unwrap();
        assert_eq!(store.read("bills").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn keys_are_sanitized_to_slugs() {
        let (store, _guard) = store_with_temp_dir();
        let path = store.key_path("My Bills!");
        assert!(path.ends_with("my_bills_.json"), "got {}", path.display());
    }

    #[test]
    fn blank_keys_fall_back_to_a_stable_name() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.key_path("  ").ends_with("store.json"));
    }
}
