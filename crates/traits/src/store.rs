//! OutputStore trait for persisting rendered images.
//!
//! A store takes one encoded image, writes it somewhere durable under a name
//! it generates itself, and returns a locator by which the image can later be
//! retrieved. Uniqueness of the generated name is the store's responsibility.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for output persistence.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Failed to persist output '{name}': {message}")]
    WriteFailed { name: String, message: String },
}

/// Persists encoded output images and hands back retrievable locators.
///
/// A failed write returns an error and no locator; there is no partial-write
/// recovery.
pub trait OutputStore: Send + Sync + Debug {
    /// Persist one encoded image, returning a unique public locator.
    ///
    /// `extension` is the file extension for the encoded format, without the
    /// leading dot (e.g. `"png"`).
    fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StoreError>;

    /// Returns a human-readable name for this store (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory output store that keeps everything in a map.
///
/// Locators look like `memory://output-3.png`. The test double counterpart
/// of the filesystem store.
#[derive(Debug, Default)]
pub struct InMemoryOutputStore {
    outputs: std::sync::RwLock<std::collections::HashMap<String, Vec<u8>>>,
    counter: std::sync::atomic::AtomicU64,
}

impl InMemoryOutputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a previously stored output by its locator.
    pub fn get(&self, locator: &str) -> Option<Vec<u8>> {
        self.outputs.read().ok()?.get(locator).cloned()
    }

    /// Number of outputs stored so far.
    pub fn len(&self) -> usize {
        self.outputs.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputStore for InMemoryOutputStore {
    fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StoreError> {
        let id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let locator = format!("memory://output-{}.{}", id, extension);
        let mut outputs = self.outputs.write().map_err(|_| StoreError::WriteFailed {
            name: locator.clone(),
            message: "output store lock poisoned".to_string(),
        })?;
        outputs.insert(locator.clone(), bytes.to_vec());
        Ok(locator)
    }

    fn name(&self) -> &'static str {
        "InMemoryOutputStore"
    }
}
