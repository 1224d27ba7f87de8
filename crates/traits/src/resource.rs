//! ResourceProvider trait for fetching source image bytes.
//!
//! The pipeline only needs "bytes in"; where those bytes come from (a remote
//! URL, a local file, a test fixture) is the provider's concern. Transport
//! failures are surfaced distinctly from a missing resource so callers can
//! report them separately from decode problems.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for image fetch operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch '{locator}': {message}")]
    FetchFailed { locator: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of raw encoded image bytes, keyed by an opaque locator.
///
/// Implementations decide what a locator means: the HTTP source treats it as
/// a URL, the in-memory provider as a plain lookup key. The pipeline never
/// inspects the locator itself.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Fetch the raw bytes behind a locator.
    fn fetch(&self, locator: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider, pre-populated before use.
///
/// The standard test double: no network, no filesystem.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: std::sync::RwLock<std::collections::HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes under a locator, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Io` if the internal lock is poisoned.
    pub fn add(&self, locator: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::Io("resource store lock poisoned".to_string()))?;
        resources.insert(locator.into(), Arc::new(data));
        Ok(())
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn fetch(&self, locator: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::Io("resource store lock poisoned".to_string()))?;
        resources
            .get(locator)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(locator.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_fetch() {
        let provider = InMemoryResourceProvider::new();
        provider.add("cat.png", b"not really a png".to_vec()).unwrap();

        let data = provider.fetch("cat.png").unwrap();
        assert_eq!(&*data, b"not really a png");
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        let result = provider.fetch("nonexistent.png");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryResourceProvider::new();
        provider.add("a.png", b"original".to_vec()).unwrap();
        provider.add("a.png", b"updated".to_vec()).unwrap();

        let data = provider.fetch("a.png").unwrap();
        assert_eq!(&*data, b"updated");
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::FetchFailed {
            locator: "http://example.com/a.png".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("http://example.com/a.png"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        let err: ResourceError = io_err.into();
        assert!(matches!(err, ResourceError::Io(_)));
        assert!(err.to_string().contains("read timed out"));
    }
}
