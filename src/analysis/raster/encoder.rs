use std::io::Write;

use crate::analysis::common::error::Result;
use crate::analysis::config::AnalysisConfig;
use crate::analysis::raster::types::RgbRaster;

pub trait RasterEncoder {
    fn encode(&self, raster: &RgbRaster, output: &mut dyn Write, config: &AnalysisConfig) -> Result<()>;
}
