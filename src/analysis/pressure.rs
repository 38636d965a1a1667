//! Regional pressure aggregation over the luminosity raster.
//!
//! Rows are partitioned into three fixed longitudinal bands: rearfoot,
//! midfoot and forefoot. Every pixel above the noise threshold
//! contributes its intensity to its band; the midfoot band additionally
//! tracks per-row contact width, which feeds the arch index and the
//! functional arch signal used by classification.

use tracing::debug;

use crate::analysis::constants::{fallback, pressure::*};
use crate::analysis::raster::LuminosityRaster;

/// Aggregated regional load distribution for one footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDistribution {
    /// Forefoot load share, percent of total
    pub antepie: f64,
    /// Midfoot load share, percent of total
    pub mediopie: f64,
    /// Rearfoot load share, percent of total
    pub retropie: f64,
    /// Arch index derived from midfoot contact width, clamped
    pub indice_arco: f64,
    /// Sum of all intensity above the noise threshold
    pub total_load: f64,
    /// Average midfoot contact width over the image width
    pub midfoot_pressure_ratio: f64,
}

impl RegionDistribution {
    /// Fixed degraded record used when no pixel clears the noise
    /// threshold (blank or mis-cropped selection). Downstream
    /// classification still gets a deterministic neutral input.
    pub fn degraded() -> Self {
        Self {
            antepie: fallback::ANTEPIE_PCT,
            mediopie: fallback::MEDIOPIE_PCT,
            retropie: fallback::RETROPIE_PCT,
            indice_arco: fallback::ARCH_INDEX,
            total_load: fallback::TOTAL_LOAD,
            midfoot_pressure_ratio: fallback::MIDFOOT_PRESSURE_RATIO,
        }
    }
}

/// Aggregates band intensities and midfoot contact width into the
/// regional distribution record.
pub fn analyze_regions(luma: &LuminosityRaster) -> RegionDistribution {
    let width = luma.width;
    let height = luma.height;

    let rearfoot_end = height as f64 * REARFOOT_END_FRACTION;
    let midfoot_end = height as f64 * MIDFOOT_END_FRACTION;

    let mut rearfoot_sum = 0.0f64;
    let mut midfoot_sum = 0.0f64;
    let mut forefoot_sum = 0.0f64;

    let mut midfoot_contact_width_sum = 0.0f64;
    let mut midfoot_rows_with_contact = 0u32;

    for y in 0..height {
        let row = y as f64;
        let in_midfoot = row >= rearfoot_end && row < midfoot_end;

        let mut row_contact_left = width;
        let mut row_contact_right = 0usize;

        for x in 0..width {
            let value = luma.data[y * width + x];
            if value <= NOISE_LUMA_MIN {
                continue;
            }

            let pressure = value as f64;
            if row < rearfoot_end {
                rearfoot_sum += pressure;
            } else if row >= midfoot_end {
                forefoot_sum += pressure;
            } else {
                midfoot_sum += pressure;
            }

            if in_midfoot {
                row_contact_left = row_contact_left.min(x);
                row_contact_right = row_contact_right.max(x);
            }
        }

        if row_contact_right > row_contact_left {
            midfoot_contact_width_sum += (row_contact_right - row_contact_left) as f64;
            midfoot_rows_with_contact += 1;
        }
    }

    let avg_contact_width = if midfoot_rows_with_contact > 0 {
        midfoot_contact_width_sum / midfoot_rows_with_contact as f64
    } else {
        0.0
    };
    let midfoot_pressure_ratio = if width > 0 {
        avg_contact_width / width as f64
    } else {
        0.0
    };

    let total = rearfoot_sum + midfoot_sum + forefoot_sum;
    if total == 0.0 {
        debug!("No pixel above noise threshold, using degraded record");
        return RegionDistribution::degraded();
    }

    RegionDistribution {
        antepie: forefoot_sum / total * 100.0,
        retropie: rearfoot_sum / total * 100.0,
        mediopie: midfoot_sum / total * 100.0,
        indice_arco: (1.0 - midfoot_pressure_ratio).clamp(ARCH_INDEX_MIN, ARCH_INDEX_MAX),
        total_load: total,
        midfoot_pressure_ratio,
    }
}
