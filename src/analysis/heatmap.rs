//! Pressure heatmap rendering.
//!
//! Display artifact only: the quantitative stages read the luminosity
//! raster directly and never read colors back out of the heatmap.
//!
//! Rendering steps:
//! 1. Collect luma values above the background threshold.
//! 2. Clip the distribution at the 2nd and 98th percentile so outliers
//!    do not compress the usable color range.
//! 3. Normalize each qualifying pixel into the clipped range.
//! 4. Apply gamma to expand low-pressure separation.
//! 5. Map through the 5-stop blue-to-red gradient.
//!
//! Background pixels render pure black regardless of the clip bounds.

use crate::analysis::constants::heatmap::{
    BACKGROUND_LUMA_MAX, PERCENTILE_LOW, PERCENTILE_HIGH, GAMMA, GRADIENT_STOPS,
};
use crate::analysis::raster::{RgbRaster, LuminosityRaster};

/// Renders the luminosity raster into a displayable pressure map.
///
/// If no pixel clears the background threshold the output is entirely
/// black.
pub fn render(luma: &LuminosityRaster) -> RgbRaster {
    let mut data = vec![0u8; luma.width * luma.height * 3];

    let bounds = percentile_bounds(&luma.data);

    if let Some((min_gray, max_gray)) = bounds {
        for (i, &value) in luma.data.iter().enumerate() {
            if value <= BACKGROUND_LUMA_MAX {
                continue;
            }

            let t = normalize(value, min_gray, max_gray).powf(GAMMA);
            let color = gradient_color(t);
            data[i * 3..i * 3 + 3].copy_from_slice(&color);
        }
    }

    RgbRaster {
        width: luma.width,
        height: luma.height,
        data,
    }
}

/// Percentile-clipped bounds of the foreground luma distribution, or
/// `None` when every pixel is background.
fn percentile_bounds(values: &[u8]) -> Option<(u8, u8)> {
    let mut foreground: Vec<u8> = values
        .iter()
        .copied()
        .filter(|&v| v > BACKGROUND_LUMA_MAX)
        .collect();

    if foreground.is_empty() {
        return None;
    }

    foreground.sort_unstable();
    let n = foreground.len() as f64;
    let min_gray = foreground[(n * PERCENTILE_LOW).floor() as usize];
    let max_gray = foreground[(n * PERCENTILE_HIGH).floor() as usize];
    Some((min_gray, max_gray))
}

/// Position of a luma value inside the clipped range, clamped to [0, 1].
/// A degenerate range (all foreground pixels equal) maps to the middle of
/// the gradient.
fn normalize(value: u8, min_gray: u8, max_gray: u8) -> f64 {
    let range = max_gray as f64 - min_gray as f64;
    if range <= 0.0 {
        return 0.5;
    }
    ((value as f64 - min_gray as f64) / range).clamp(0.0, 1.0)
}

/// Linear interpolation through the 5-stop gradient, each pair of
/// adjacent stops spanning an equal quarter of the range.
pub fn gradient_color(t: f64) -> [u8; 3] {
    let segments = GRADIENT_STOPS.len() - 1;
    let scaled = t * segments as f64;
    let index = (scaled.floor() as usize).min(segments - 1);
    let fraction = scaled - index as f64;

    let c1 = GRADIENT_STOPS[index];
    let c2 = GRADIENT_STOPS[index + 1];

    let mut color = [0u8; 3];
    for ch in 0..3 {
        let value = c1[ch] as f64 + (c2[ch] as f64 - c1[ch] as f64) * fraction;
        color[ch] = value.round() as u8;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_pixels_render_black() {
        let luma = LuminosityRaster {
            width: 3,
            height: 1,
            data: vec![0, 10, 200],
        };

        let heatmap = render(&luma);

        assert_eq!(&heatmap.data[0..3], &[0, 0, 0]);
        assert_eq!(&heatmap.data[3..6], &[0, 0, 0]);
        assert_ne!(&heatmap.data[6..9], &[0, 0, 0]);
    }

    #[test]
    fn all_background_yields_black_image() {
        let luma = LuminosityRaster {
            width: 2,
            height: 2,
            data: vec![0, 5, 10, 3],
        };

        let heatmap = render(&luma);
        assert!(heatmap.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn gradient_endpoints_are_blue_and_red() {
        assert_eq!(gradient_color(0.0), [0, 0, 255]);
        assert_eq!(gradient_color(1.0), [255, 0, 0]);
    }

    #[test]
    fn gradient_hits_intermediate_stops() {
        assert_eq!(gradient_color(0.25), [0, 255, 255]);
        assert_eq!(gradient_color(0.5), [0, 255, 0]);
        assert_eq!(gradient_color(0.75), [255, 255, 0]);
    }

    // Gradient order is blue < cyan < green < yellow < red; the segment
    // index must never go backwards as t increases.
    #[test]
    fn increasing_t_never_moves_earlier_in_gradient() {
        let segment_of = |color: [u8; 3]| -> usize {
            // Reconstruct which segment a color falls in from its channels.
            if color[0] == 0 && color[2] > 0 && color[1] < 255 {
                0 // blue -> cyan
            } else if color[0] == 0 && color[2] > 0 {
                1 // cyan -> green (blue fading)
            } else if color[0] < 255 {
                2 // green -> yellow
            } else {
                3 // yellow -> red
            }
        };

        let mut last_segment = 0;
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let segment = segment_of(gradient_color(t));
            assert!(segment >= last_segment, "gradient regressed at t={}", t);
            last_segment = segment;
        }
    }

    #[test]
    fn uniform_foreground_maps_to_gradient_middle() {
        let luma = LuminosityRaster {
            width: 2,
            height: 1,
            data: vec![100, 100],
        };

        let heatmap = render(&luma);

        // normalize() degenerates to 0.5; gamma then shifts it up the ramp.
        let expected = gradient_color(0.5f64.powf(GAMMA));
        assert_eq!(&heatmap.data[0..3], &expected);
        assert_eq!(&heatmap.data[3..6], &expected);
    }

    #[test]
    fn monotone_luma_yields_monotone_gradient_position() {
        let luma = LuminosityRaster {
            width: 5,
            height: 1,
            data: vec![30, 80, 130, 180, 230],
        };

        let heatmap = render(&luma);

        // Blue should fade while red rises along the row.
        let blue: Vec<u8> = heatmap.data.chunks_exact(3).map(|c| c[2]).collect();
        let red: Vec<u8> = heatmap.data.chunks_exact(3).map(|c| c[0]).collect();
        assert!(blue.windows(2).all(|w| w[1] <= w[0]));
        assert!(red.windows(2).all(|w| w[1] >= w[0]));
    }
}
