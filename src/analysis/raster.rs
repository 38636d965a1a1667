//! Raster decoding and encoding module
//!
//! This module provides format-agnostic image decoding into pixel grids,
//! lossless PNG encoding of derived artifacts, and data-URI payload
//! handling for callers that exchange images as self-describing strings.

mod decoder;
mod image_decoder;
mod encoder;
mod png_encoder;
pub mod payload;
pub mod types;

pub use decoder::ImageDecoder;
pub use image_decoder::StandardImageDecoder;
pub use encoder::RasterEncoder;
pub use png_encoder::StandardPngEncoder;
pub use types::{RgbRaster, LuminosityRaster};
