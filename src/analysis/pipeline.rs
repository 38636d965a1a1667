use tracing::{info, instrument};
use std::io::Cursor;
use std::path::Path;

use serde::Deserialize;

use crate::analysis::{
    common::error::{AnalysisError, Result},
    classify::{self, ArchEvidence},
    config::AnalysisConfig,
    contact,
    crop::{self, SelectionRegion, ContainerSize},
    geometry::{self, FootSide, TrianglePoints, AlignmentLines},
    grayscale,
    heatmap,
    metrics::FootMetrics,
    pressure,
    raster::{
        payload,
        ImageDecoder, StandardImageDecoder,
        RasterEncoder, StandardPngEncoder,
        RgbRaster,
    },
};

/// Everything the caller supplies for one foot side besides the image
/// payload itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Selection rectangle in display pixels
    pub selection: SelectionRegion,
    /// Dimensions of the display container the selection was drawn in
    pub container: ContainerSize,
    /// Which foot the payload shows
    pub side: FootSide,
    /// User-entered foot length in cm, for contact area calibration
    #[serde(default)]
    pub foot_measurement: Option<f64>,
    /// Medial-view triangle landmarks for the navicular angle
    #[serde(default)]
    pub triangle: Option<TrianglePoints>,
    /// Posterior-view alignment lines for the rearfoot angle
    #[serde(default)]
    pub alignment: Option<AlignmentLines>,
}

/// The three encoded display artifacts, lossless PNG.
#[derive(Debug, Clone)]
pub struct AnalysisArtifacts {
    pub cropped: Vec<u8>,
    pub grayscale: Vec<u8>,
    pub heatmap: Vec<u8>,
}

impl AnalysisArtifacts {
    /// Wraps an artifact as a self-describing data URI for collaborators
    /// that exchange images as strings.
    pub fn cropped_data_uri(&self) -> String {
        payload::to_data_uri("image/png", &self.cropped)
    }

    pub fn grayscale_data_uri(&self) -> String {
        payload::to_data_uri("image/png", &self.grayscale)
    }

    pub fn heatmap_data_uri(&self) -> String {
        payload::to_data_uri("image/png", &self.heatmap)
    }
}

/// Complete result for one foot side.
#[derive(Debug, Clone)]
pub struct FootAnalysis {
    pub artifacts: AnalysisArtifacts,
    pub metrics: FootMetrics,
}

pub struct FootAnalysisPipeline<D: ImageDecoder, E: RasterEncoder> {
    decoder: D,
    encoder: E,
    config: AnalysisConfig,
}

impl FootAnalysisPipeline<StandardImageDecoder, StandardPngEncoder> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            decoder: StandardImageDecoder,
            encoder: StandardPngEncoder,
            config,
        }
    }
}

impl<D: ImageDecoder, E: RasterEncoder> FootAnalysisPipeline<D, E> {
    pub fn with_custom(decoder: D, encoder: E, config: AnalysisConfig) -> Self {
        Self {
            decoder,
            encoder,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(AnalysisError::BufferAllocationError(width as i64, height as i64));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max as usize || height > max as usize {
                return Err(AnalysisError::BufferAllocationError(width as i64, height as i64));
            }
        }

        Ok(())
    }

    fn encode_artifact(&self, raster: &RgbRaster) -> Result<Vec<u8>> {
        let mut output = Cursor::new(Vec::new());
        self.encoder.encode(raster, &mut output, &self.config)?;
        Ok(output.into_inner())
    }

    /// Runs the full analysis for one foot side.
    ///
    /// The payload may be raw encoded image bytes or a base64 data URI.
    /// Stages run synchronously in sequence: decode, region extraction,
    /// luminosity conversion, heatmap rendering, regional aggregation,
    /// angle computation, classification, contact area estimation and
    /// artifact encoding. Each pixel buffer is owned exclusively by this
    /// call chain, so concurrent invocations share no state.
    #[instrument(skip(self, image_payload, request), fields(payload_size = image_payload.len(), side = ?request.side))]
    pub fn analyze(&self, image_payload: &[u8], request: &AnalysisRequest) -> Result<FootAnalysis> {
        info!("Starting footprint analysis");

        let image_bytes = payload::image_bytes(image_payload)?;

        let source = {
            let _span = tracing::info_span!("decode_source").entered();
            self.decoder.decode(&image_bytes)?
        };

        let cropped = {
            let _span = tracing::info_span!("extract_region",
                natural_width = source.width,
                natural_height = source.height,
            ).entered();
            crop::extract_region(&source, &request.selection, &request.container)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = cropped.width,
                height = cropped.height,
            ).entered();
            self.validate_dimensions(cropped.width, cropped.height)?;
        }

        let luma = {
            let _span = tracing::info_span!("grayscale").entered();
            grayscale::to_luminosity(&cropped)
        };

        let heat = {
            let _span = tracing::info_span!("heatmap").entered();
            heatmap::render(&luma)
        };

        let regions = {
            let _span = tracing::info_span!("pressure_regions").entered();
            pressure::analyze_regions(&luma)
        };

        let navicular_angle = request.triangle.as_ref().map(geometry::navicular_angle);
        let rearfoot_angle = request
            .alignment
            .as_ref()
            .map(|lines| geometry::rearfoot_angle(lines, request.side));

        let arch_type = classify::classify_arch(&ArchEvidence {
            navicular_angle,
            midfoot_pressure_ratio: Some(regions.midfoot_pressure_ratio),
            rearfoot_angle,
        });

        let contact_area = contact::contact_area(request.foot_measurement, Some(&request.selection));

        let artifacts = {
            let _span = tracing::info_span!("encode_artifacts").entered();
            AnalysisArtifacts {
                cropped: self.encode_artifact(&cropped)?,
                grayscale: self.encode_artifact(&grayscale::to_display_raster(&luma))?,
                heatmap: self.encode_artifact(&heat)?,
            }
        };

        let metrics = FootMetrics {
            antepie: regions.antepie,
            mediopie: regions.mediopie,
            retropie: regions.retropie,
            indice_arco: regions.indice_arco,
            arch_type,
            contact_area,
            total_load: regions.total_load,
            navicular_angle,
            rearfoot_angle,
            midfoot_pressure_ratio: regions.midfoot_pressure_ratio,
        };

        info!(
            width = cropped.width,
            height = cropped.height,
            arch_type = ?metrics.arch_type,
            "Analysis complete"
        );
        Ok(FootAnalysis { artifacts, metrics })
    }

    /// Convenience wrapper that reads the image payload from disk.
    #[instrument(skip(self, image_path, request))]
    pub fn analyze_file<P: AsRef<Path>>(
        &self,
        image_path: P,
        request: &AnalysisRequest,
    ) -> Result<FootAnalysis> {
        let image_path = image_path.as_ref();

        info!(image = %image_path.display(), "Analyzing file");

        let image_payload = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(image_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", image_path.display(), e))
            })?
        };

        self.analyze(&image_payload, request)
    }

    /// Analyzes both feet for a report, right first.
    ///
    /// The two runs are independent (no shared buffers, no ordering
    /// requirement); sequential processing here just mirrors the capture
    /// flow.
    pub fn analyze_pair(
        &self,
        right: (&[u8], &AnalysisRequest),
        left: (&[u8], &AnalysisRequest),
    ) -> Result<(FootAnalysis, FootAnalysis)> {
        let right_analysis = self.analyze(right.0, right.1)?;
        let left_analysis = self.analyze(left.0, left.1)?;
        Ok((right_analysis, left_analysis))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
