//! Collaborator contracts for the caption rendering pipeline.
//!
//! The core pipeline never talks to the network or the filesystem directly;
//! it goes through the traits in this crate:
//!
//! - [`ResourceProvider`]: fetches raw encoded image bytes by locator
//! - [`FontProvider`]: resolves a font identifier to raw font bytes
//! - [`OutputStore`]: persists an encoded output and returns a public locator
//!
//! Each trait ships with an in-memory implementation used as a test double.

pub mod font;
pub mod resource;
pub mod store;

pub use font::{FontError, FontProvider, InMemoryFontProvider, SharedFontData};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use store::{InMemoryOutputStore, OutputStore, StoreError};
