//! Region extraction from the source photograph.
//!
//! The capture UI reports the operator's selection in on-screen display
//! pixels. This module maps that rectangle back into source-image pixel
//! coordinates using the display-to-natural scale factor and copies the
//! covered pixels into a fresh sub-buffer.
//!
//! Selections smaller than
//! [`MIN_SELECTION_DISPLAY_PX`](crate::analysis::constants::contact::MIN_SELECTION_DISPLAY_PX)
//! per axis are unreliable for calibration. Rejecting them is the
//! caller's responsibility; this module does not re-validate.

use serde::Deserialize;
use tracing::debug;

use crate::analysis::common::error::{Result, AnalysisError};
use crate::analysis::raster::RgbRaster;

/// Selection rectangle in on-screen display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SelectionRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Dimensions of the display container the selection was drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Copies the selected region out of the source image.
///
/// The scale factors are `naturalWidth / displayWidth` and
/// `naturalHeight / displayHeight`; the output buffer measures
/// `round(selection.width * scaleX)` by `round(selection.height * scaleY)`
/// pixels and is filled by direct nearest-sample copy, no resampling
/// filter. Samples falling outside the source bounds are clamped to the
/// nearest edge pixel.
pub fn extract_region(
    source: &RgbRaster,
    selection: &SelectionRegion,
    container: &ContainerSize,
) -> Result<RgbRaster> {
    if container.width <= 0.0 || container.height <= 0.0 {
        return Err(AnalysisError::BufferAllocationError(
            container.width as i64,
            container.height as i64,
        ));
    }

    let scale_x = source.width as f64 / container.width;
    let scale_y = source.height as f64 / container.height;

    let out_width = (selection.width * scale_x).round() as i64;
    let out_height = (selection.height * scale_y).round() as i64;

    if out_width <= 0 || out_height <= 0 {
        return Err(AnalysisError::BufferAllocationError(out_width, out_height));
    }

    let src_x0 = selection.x * scale_x;
    let src_y0 = selection.y * scale_y;

    debug!(
        "Extracting region: display {}x{} at ({}, {}) -> source {}x{} at ({:.1}, {:.1})",
        selection.width, selection.height, selection.x, selection.y,
        out_width, out_height, src_x0, src_y0,
    );

    let out_width = out_width as usize;
    let out_height = out_height as usize;
    let mut data = vec![0u8; out_width * out_height * 3];

    for oy in 0..out_height {
        let sy = (src_y0 + oy as f64).floor().clamp(0.0, (source.height - 1) as f64) as usize;
        for ox in 0..out_width {
            let sx = (src_x0 + ox as f64).floor().clamp(0.0, (source.width - 1) as f64) as usize;
            let src_idx = (sy * source.width + sx) * 3;
            let dst_idx = (oy * out_width + ox) * 3;
            data[dst_idx..dst_idx + 3].copy_from_slice(&source.data[src_idx..src_idx + 3]);
        }
    }

    Ok(RgbRaster {
        width: out_width,
        height: out_height,
        data,
    })
}
