//! FontProvider trait for resolving font identifiers to raw font bytes.
//!
//! A font identifier is caller-controlled (a filename in the production
//! provider, a plain key in the in-memory one). There is no discovery or
//! fallback: an unknown identifier is an error, not a substitution.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for font resolution and parsing.
#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font not found: {0}")]
    NotFound(String),

    #[error("Font '{name}' could not be parsed: {message}")]
    InvalidData { name: String, message: String },

    #[error("Failed to load font '{name}': {message}")]
    LoadFailed { name: String, message: String },
}

/// Shared font data type (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

/// Resolves a font identifier to the raw bytes of a font file.
///
/// Providers only deal in bytes; parsing and scaling happen in the layout
/// crate, which also owns the `InvalidData` failure for unparseable bytes.
pub trait FontProvider: Send + Sync + Debug {
    /// Load the raw bytes of the named font.
    fn load(&self, font_name: &str) -> Result<SharedFontData, FontError>;

    /// Check whether the named font can be resolved.
    fn exists(&self, font_name: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory font provider, pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryFontProvider {
    fonts: std::sync::RwLock<std::collections::HashMap<String, SharedFontData>>,
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register font bytes under an identifier, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `FontError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, font_name: impl Into<String>, data: Vec<u8>) -> Result<(), FontError> {
        let name = font_name.into();
        let mut fonts = self.fonts.write().map_err(|_| FontError::LoadFailed {
            name: name.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.insert(name, Arc::new(data));
        Ok(())
    }
}

impl FontProvider for InMemoryFontProvider {
    fn load(&self, font_name: &str) -> Result<SharedFontData, FontError> {
        let fonts = self.fonts.read().map_err(|_| FontError::LoadFailed {
            name: font_name.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts
            .get(font_name)
            .cloned()
            .ok_or_else(|| FontError::NotFound(font_name.to_string()))
    }

    fn exists(&self, font_name: &str) -> bool {
        self.fonts
            .read()
            .map(|f| f.contains_key(font_name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProvider"
    }
}
