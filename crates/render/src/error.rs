use thiserror::Error;

/// Error type for raster decode/encode operations.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),
}
