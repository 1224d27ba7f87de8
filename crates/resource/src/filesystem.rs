//! Font provider backed by a local font directory.
//!
//! Font identifiers are filenames resolved against a fixed base directory.
//! Resolved paths are validated to stay inside that directory, so a
//! traversal attempt (`../../etc/passwd`) reads as a missing font rather
//! than escaping the base.

use imprint_traits::{FontError, FontProvider, SharedFontData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads fonts from a fixed directory, keyed by filename.
#[derive(Debug)]
pub struct FilesystemFontProvider {
    base_path: PathBuf,
    /// Canonicalized base path for traversal checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemFontProvider {
    /// Creates a provider rooted at the given font directory.
    ///
    /// The base path is canonicalized to enable traversal checks; a base
    /// that does not exist yet falls back to component checks.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Returns the font directory for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a font name against the base directory.
    ///
    /// Returns `None` if the name is absolute or would escape the base.
    fn resolve_path_safe(&self, font_name: &str) -> Option<PathBuf> {
        if Path::new(font_name).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(font_name);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            if canonical.starts_with(base) {
                return Some(canonical);
            }
            return None;
        }

        // Canonicalization fails for names that don't exist; still reject
        // anything with a parent component.
        for component in Path::new(font_name).components() {
            if let std::path::Component::ParentDir = component {
                return None;
            }
        }

        Some(full_path)
    }
}

impl FontProvider for FilesystemFontProvider {
    fn load(&self, font_name: &str) -> Result<SharedFontData, FontError> {
        let full_path = self
            .resolve_path_safe(font_name)
            .ok_or_else(|| FontError::NotFound(format!("{} (path traversal blocked)", font_name)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FontError::NotFound(font_name.to_string())
            } else {
                FontError::LoadFailed {
                    name: font_name.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, font_name: &str) -> bool {
        self.resolve_path_safe(font_name)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemFontProvider"
    }
}
