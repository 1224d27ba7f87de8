pub mod anchor;
pub mod color;

pub use anchor::VerticalAnchor;
pub use color::Color;
