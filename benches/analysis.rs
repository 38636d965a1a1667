use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use podoscan_rs::analysis::{
    AnalysisConfig, AnalysisRequest, ContainerSize, FootAnalysisPipeline, FootSide,
    PngCompression, SelectionRegion,
};

fn generate_mock_footprint_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        let value = ((x + y) % 256) as u8;
        image::Rgb([value, value, value])
    });

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn full_frame_request(size: u32) -> AnalysisRequest {
    AnalysisRequest {
        selection: SelectionRegion {
            x: 0.0,
            y: 0.0,
            width: size as f64,
            height: size as f64,
        },
        container: ContainerSize {
            width: size as f64,
            height: size as f64,
        },
        side: FootSide::Left,
        foot_measurement: Some(26.0),
        triangle: None,
        alignment: None,
    }
}

fn benchmark_analysis_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_by_size");

    let sizes = vec![
        (100, "100x100"),
        (500, "500x500"),
        (1000, "1000x1000"),
    ];

    for (size, label) in sizes {
        let mock_png = generate_mock_footprint_png(size, size);
        let request = full_frame_request(size);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_png,
            |b, data| {
                let config = AnalysisConfig::default();
                let pipeline = FootAnalysisPipeline::new(config);

                b.iter(|| {
                    let _ = pipeline.analyze(black_box(data), &request);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_compression_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_levels");

    let mock_png = generate_mock_footprint_png(500, 500);
    let request = full_frame_request(500);

    let levels = vec![
        (PngCompression::Fast, "fast"),
        (PngCompression::Balanced, "balanced"),
        (PngCompression::Best, "best"),
    ];

    for (level, label) in levels {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_png,
            |b, data| {
                let config = AnalysisConfig::builder().compression(level).build();
                let pipeline = FootAnalysisPipeline::new(config);

                b.iter(|| {
                    let _ = pipeline.analyze(black_box(data), &request);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_analysis_sizes, benchmark_compression_levels);
criterion_main!(benches);
