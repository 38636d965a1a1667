//! Luminosity conversion of the cropped footprint region.
//!
//! Light areas of the scanned footprint carry the most ink/pressure, so
//! the luminosity raster doubles as the pressure proxy for every
//! quantitative stage downstream.

use crate::analysis::constants::luma;
use crate::analysis::raster::{RgbRaster, LuminosityRaster};

/// Converts an RGB buffer to a single-channel luminosity raster using the
/// ITU-R BT.601 weights, rounding each value to the nearest integer.
pub fn to_luminosity(raster: &RgbRaster) -> LuminosityRaster {
    let mut data = Vec::with_capacity(raster.width * raster.height);

    for pixel in raster.data.chunks_exact(3) {
        let value = luma::WEIGHT_R * pixel[0] as f64
            + luma::WEIGHT_G * pixel[1] as f64
            + luma::WEIGHT_B * pixel[2] as f64;
        data.push(value.round() as u8);
    }

    LuminosityRaster {
        width: raster.width,
        height: raster.height,
        data,
    }
}

/// Expands a luminosity raster back into a displayable RGB buffer with
/// the intensity replicated into all three channels.
pub fn to_display_raster(raster: &LuminosityRaster) -> RgbRaster {
    let mut data = Vec::with_capacity(raster.width * raster.height * 3);

    for &value in &raster.data {
        data.extend_from_slice(&[value, value, value]);
    }

    RgbRaster {
        width: raster.width,
        height: raster.height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bt601_weights_are_applied_exactly() {
        let raster = RgbRaster {
            width: 2,
            height: 1,
            data: vec![100, 150, 200, 255, 0, 0],
        };

        let luma = to_luminosity(&raster);

        // 0.299*100 + 0.587*150 + 0.114*200 = 141.75 -> 142
        assert_eq!(luma.data[0], 142);
        // 0.299*255 = 76.245 -> 76
        assert_eq!(luma.data[1], 76);
    }

    #[test]
    fn white_maps_to_full_intensity() {
        let raster = RgbRaster {
            width: 1,
            height: 1,
            data: vec![255, 255, 255],
        };

        assert_eq!(to_luminosity(&raster).data, vec![255]);
    }

    #[test]
    fn display_raster_replicates_all_channels() {
        let luma = LuminosityRaster {
            width: 2,
            height: 1,
            data: vec![42, 200],
        };

        let display = to_display_raster(&luma);

        assert_eq!(display.width, 2);
        assert_eq!(display.height, 1);
        assert_eq!(display.data, vec![42, 42, 42, 200, 200, 200]);
    }
}
