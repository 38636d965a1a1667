//! Footprint analysis pipeline module
//!
//! This module provides a structured approach to turning a footprint
//! photograph plus user-placed annotations into biomechanical metrics,
//! with separate modules for raster decoding/encoding, the pixel
//! transformation stages, geometric angle computation and classification.

pub mod raster;
pub mod crop;
pub mod grayscale;
pub mod heatmap;
pub mod pressure;
pub mod geometry;
pub mod classify;
pub mod contact;
pub mod constants;
pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod common;


pub use common::{
    AnalysisError,
    Result,
};

pub use raster::{
    RgbRaster,
    LuminosityRaster,
    ImageDecoder,
    StandardImageDecoder,
    RasterEncoder,
    StandardPngEncoder,
};

pub use crop::{
    SelectionRegion,
    ContainerSize,
};

pub use geometry::{
    Point,
    FootSide,
    TrianglePoints,
    AlignmentLines,
};

pub use config::{
    PngCompression,
    AnalysisConfig,
    AnalysisConfigBuilder,
};

pub use metrics::{
    ArchType,
    ContactArea,
    FootMetrics,
};

pub use pipeline::{
    AnalysisRequest,
    AnalysisArtifacts,
    FootAnalysis,
    FootAnalysisPipeline,
};
