use crate::analysis::common::error::Result;
use crate::analysis::raster::types::RgbRaster;

pub trait ImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<RgbRaster>;
}
