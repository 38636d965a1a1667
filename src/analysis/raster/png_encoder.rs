use std::io::Write;

use image::ImageEncoder;
use tracing::debug;

use crate::analysis::common::error::{Result, AnalysisError};
use crate::analysis::config::{AnalysisConfig, PngCompression};
use crate::analysis::raster::types::RgbRaster;
use crate::analysis::raster::encoder::RasterEncoder;

/// Lossless PNG encoder for the cropped, grayscale and heatmap artifacts.
pub struct StandardPngEncoder;

impl RasterEncoder for StandardPngEncoder {
    fn encode(&self, raster: &RgbRaster, output: &mut dyn Write, config: &AnalysisConfig) -> Result<()> {
        debug!("Encoding PNG artifact: {}x{}", raster.width, raster.height);

        let compression = match config.compression {
            PngCompression::Fast => image::codecs::png::CompressionType::Fast,
            PngCompression::Balanced => image::codecs::png::CompressionType::Default,
            PngCompression::Best => image::codecs::png::CompressionType::Best,
        };

        let mut buffer = Vec::new();

        let encoder = image::codecs::png::PngEncoder::new_with_quality(
            std::io::Cursor::new(&mut buffer),
            compression,
            image::codecs::png::FilterType::Adaptive,
        );

        encoder.write_image(
            &raster.data,
            raster.width as u32,
            raster.height as u32,
            image::ExtendedColorType::Rgb8,
        ).map_err(|e| AnalysisError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
