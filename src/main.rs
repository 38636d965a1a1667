use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use podoscan_rs::analysis::{AnalysisConfig, AnalysisRequest, FootAnalysisPipeline, PngCompression};
use podoscan_rs::logger;

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze a footprint photograph into biomechanical metrics")]
struct Args {
    /// Footprint photograph (PNG/JPEG bytes or a base64 data URI payload)
    #[arg(short, long)]
    image: PathBuf,

    /// Analysis request JSON: selection, container, side, plus optional
    /// footMeasurement, triangle and alignment annotations
    #[arg(short, long)]
    request: PathBuf,

    /// Directory the artifacts and the metrics record are written into
    #[arg(short, long, default_value = "analysis")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    info!("Starting podoscan...");

    let request_text = std::fs::read_to_string(&args.request)
        .with_context(|| format!("Failed to read request file {}", args.request.display()))?;
    let request: AnalysisRequest = serde_json::from_str(&request_text)
        .context("Failed to parse analysis request")?;

    let config = AnalysisConfig::builder()
        .compression(PngCompression::Balanced)
        .build();
    let pipeline = FootAnalysisPipeline::new(config);

    info!("Footprint analysis pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);
    info!("Side: {:?}", request.side);

    match pipeline.analyze_file(&args.image, &request) {
        Ok(analysis) => {
            std::fs::create_dir_all(&args.out_dir)?;
            std::fs::write(args.out_dir.join("cropped.png"), &analysis.artifacts.cropped)?;
            std::fs::write(args.out_dir.join("grayscale.png"), &analysis.artifacts.grayscale)?;
            std::fs::write(args.out_dir.join("heatmap.png"), &analysis.artifacts.heatmap)?;
            std::fs::write(
                args.out_dir.join("metrics.json"),
                serde_json::to_string_pretty(&analysis.metrics)?,
            )?;
            info!(
                "Analysis successful! Arch type: {:?}, total load: {}",
                analysis.metrics.arch_type, analysis.metrics.total_load
            );
        }
        Err(e) => error!("Analysis failed: {}", e),
    }

    Ok(())
}
