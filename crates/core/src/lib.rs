//! Caption rendering core.
//!
//! Ties the layout and raster crates together behind [`Renderer`], the one
//! entry point callers use: validate a [`CaptionRequest`], fetch and decode
//! the source image, wrap and place the caption, composite it with a shadow,
//! and persist the encoded result. Every failure mode is a named
//! [`RenderError`] variant; the transport boundary only ever sees those.

pub mod error;
pub mod pipeline;
pub mod request;

pub use error::RenderError;
pub use pipeline::{RenderedCaption, Renderer};
pub use request::{CaptionRequest, DEFAULT_CAPTION, DEFAULT_TEXT_SIZE};
