//! Source photograph decoder built on the image crate.
//!
//! Footprint photographs arrive from the capture UI as compressed raster
//! payloads (PNG or JPEG in practice, anything the image crate can sniff
//! in principle). The decoder normalizes every source to an 8-bit RGB
//! grid; a 4-channel source has its alpha dropped at this point since no
//! downstream stage reads it.

use tracing::debug;

use crate::analysis::common::error::{Result, AnalysisError};
use crate::analysis::raster::types::RgbRaster;
use crate::analysis::raster::decoder::ImageDecoder;

/// Image decoder that uses the image crate for format detection and
/// decoding.
///
/// Supports any format the image crate can decode from memory, including
/// but not limited to:
/// - PNG
/// - JPEG
pub struct StandardImageDecoder;

impl ImageDecoder for StandardImageDecoder {
    /// Decodes an encoded image payload into an RGB pixel grid.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the encoded image
    ///
    /// # Returns
    ///
    /// * `Ok(RgbRaster)` - Successfully decoded pixel grid
    /// * `Err(AnalysisError::DecodeError)` - Payload could not be decoded
    fn decode(&self, data: &[u8]) -> Result<RgbRaster> {
        debug!("Decoding source image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        let width = rgb.width() as usize;
        let height = rgb.height() as usize;

        debug!("Decoded image: {}x{}", width, height);

        Ok(RgbRaster {
            width,
            height,
            data: rgb.into_raw(),
        })
    }
}
