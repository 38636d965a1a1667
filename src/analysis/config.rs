//! Analysis configuration types

/// PNG compression levels for the encoded artifacts
#[derive(Debug, Clone, Copy)]
pub enum PngCompression {
    /// Fast compression (larger artifacts)
    Fast,
    /// Balanced speed/size (default)
    Balanced,
    /// Best compression (slower)
    Best,
}

/// Configuration for a footprint analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Compression level for the PNG artifacts
    pub compression: PngCompression,
    /// Whether to validate cropped raster dimensions before the pixel stages
    pub validate_dimensions: bool,
    /// Upper bound on either cropped raster axis, as a resource limit.
    /// Only checked when `validate_dimensions` is set.
    pub max_dimension: Option<u32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Balanced,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    compression: Option<PngCompression>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl AnalysisConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max_dimension: Option<u32>) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
