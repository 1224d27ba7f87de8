//! Caption overlay service.
//!
//! Thin service glue around the `imprint-core` pipeline: configuration
//! loading, the outbound HTTP image fetch, and the inbound HTTP surface.
//! The core stays synchronous; the service drives it from the blocking
//! thread pool.

pub mod config;
pub mod fetch;
pub mod server;

pub use imprint_core::{
    CaptionRequest, DEFAULT_CAPTION, DEFAULT_TEXT_SIZE, RenderError, RenderedCaption, Renderer,
};
pub use imprint_resource::{FilesystemFontProvider, FilesystemOutputStore};
