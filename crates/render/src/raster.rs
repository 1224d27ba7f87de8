//! Decode fetched bytes into a mutable raster and encode the result.

use crate::error::RasterError;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Decode encoded image bytes (any enabled format) into an RGBA raster.
///
/// The format is sniffed from the bytes; the locator's extension is not
/// consulted.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, RasterError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| RasterError::Decode(e.to_string()))?;
    let raster = decoded.to_rgba8();
    log::debug!("decoded image: {}x{}", raster.width(), raster.height());
    Ok(raster)
}

/// Encode a raster as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RasterError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_image(b"this is not an image");
        assert!(matches!(result, Err(RasterError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_empty_bytes() {
        assert!(matches!(decode_image(&[]), Err(RasterError::Decode(_))));
    }

    #[test]
    fn test_encoded_png_decodes_to_same_dimensions() {
        let image = RgbaImage::from_pixel(200, 100, Rgba([10, 20, 30, 255]));
        let bytes = encode_png(&image).unwrap();

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 100);
        assert_eq!(decoded.get_pixel(50, 50), &Rgba([10, 20, 30, 255]));
    }
}
