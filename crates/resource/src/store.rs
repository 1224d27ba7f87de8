//! Output store backed by a local directory and a public base URL.

use imprint_traits::{OutputStore, StoreError};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes rendered outputs to a directory under generated v4 UUID names and
/// returns locators of the form `<public_base_url>/<name>.<extension>`.
///
/// Each render is a single blocking write; a failed write surfaces as
/// `StoreError::WriteFailed` and no locator is returned.
#[derive(Debug)]
pub struct FilesystemOutputStore {
    output_dir: PathBuf,
    public_base_url: String,
}

impl FilesystemOutputStore {
    pub fn new<P: AsRef<Path>>(output_dir: P, public_base_url: impl Into<String>) -> Self {
        let base_url = public_base_url.into();
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            public_base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl OutputStore for FilesystemOutputStore {
    fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StoreError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.output_dir.join(&file_name);

        std::fs::create_dir_all(&self.output_dir).map_err(|e| StoreError::WriteFailed {
            name: file_name.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, bytes).map_err(|e| StoreError::WriteFailed {
            name: file_name.clone(),
            message: e.to_string(),
        })?;

        log::debug!("stored output {} ({} bytes)", path.display(), bytes.len());
        Ok(format!("{}/{}", self.public_base_url, file_name))
    }

    fn name(&self) -> &'static str {
        "FilesystemOutputStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_writes_file_and_returns_locator() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemOutputStore::new(dir.path(), "http://localhost:4000/outputs/");

        let locator = store.store(b"png bytes", "png").unwrap();
        assert!(locator.starts_with("http://localhost:4000/outputs/"));
        assert!(locator.ends_with(".png"));

        let file_name = locator.rsplit('/').next().unwrap();
        let written = std::fs::read(dir.path().join(file_name)).unwrap();
        assert_eq!(written, b"png bytes");
    }

    #[test]
    fn test_store_generates_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemOutputStore::new(dir.path(), "http://localhost:4000/outputs");

        let first = store.store(b"a", "png").unwrap();
        let second = store.store(b"b", "png").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_store_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("outputs/nested");
        let store = FilesystemOutputStore::new(&nested, "http://localhost:4000/outputs");

        store.store(b"bytes", "png").unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_unwritable_target_is_write_failed() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the output directory should be.
        let blocked = dir.path().join("not-a-dir");
        std::fs::write(&blocked, b"file").unwrap();
        let store = FilesystemOutputStore::new(&blocked, "http://localhost:4000/outputs");

        assert!(matches!(
            store.store(b"bytes", "png"),
            Err(StoreError::WriteFailed { .. })
        ));
    }
}
