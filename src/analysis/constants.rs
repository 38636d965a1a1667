//! Clinical heuristic constants for footprint analysis
//!
//! These values are empirical, tuned against podiatric practice rather
//! than derived. They are collected here so they stay auditable and
//! swappable instead of being scattered as magic literals.

/// ITU-R BT.601 luminosity weights used for the grayscale conversion.
pub mod luma {
    /// Red channel weight
    pub const WEIGHT_R: f64 = 0.299;
    /// Green channel weight
    pub const WEIGHT_G: f64 = 0.587;
    /// Blue channel weight
    pub const WEIGHT_B: f64 = 0.114;
}

/// Heatmap rendering parameters (display only, never fed back into metrics).
pub mod heatmap {
    /// Luma at or below this value is treated as background and rendered
    /// pure black.
    pub const BACKGROUND_LUMA_MAX: u8 = 10;

    /// Lower percentile clip applied to the qualifying luma distribution.
    pub const PERCENTILE_LOW: f64 = 0.02;

    /// Upper percentile clip applied to the qualifying luma distribution.
    pub const PERCENTILE_HIGH: f64 = 0.98;

    /// Gamma applied after normalization. Values below 1 expand the
    /// low-pressure end of the color range.
    pub const GAMMA: f64 = 0.6;

    /// 5-stop pressure gradient, low to high:
    /// blue, cyan, green, yellow, red. Adjacent stops each span an equal
    /// quarter of the normalized range.
    pub const GRADIENT_STOPS: [[u8; 3]; 5] = [
        [0, 0, 255],
        [0, 255, 255],
        [0, 255, 0],
        [255, 255, 0],
        [255, 0, 0],
    ];
}

/// Pressure region aggregation parameters.
pub mod pressure {
    /// Luma must exceed this value to count as foot contact. Deliberately
    /// higher than the heatmap background threshold since this feeds a
    /// quantitative rather than cosmetic computation.
    pub const NOISE_LUMA_MIN: u8 = 20;

    /// Rows in `[0, REARFOOT_END_FRACTION * height)` belong to the rearfoot.
    pub const REARFOOT_END_FRACTION: f64 = 0.35;

    /// Rows in `[REARFOOT_END_FRACTION * h, MIDFOOT_END_FRACTION * h)`
    /// belong to the midfoot; the remainder is forefoot.
    pub const MIDFOOT_END_FRACTION: f64 = 0.65;

    /// Clamp bounds for the arch index derived from midfoot contact width.
    pub const ARCH_INDEX_MIN: f64 = 0.1;
    pub const ARCH_INDEX_MAX: f64 = 0.9;
}

/// Fixed degraded record returned when no pixel clears the noise
/// threshold, so downstream classification still has a deterministic
/// neutral input instead of a hard failure.
pub mod fallback {
    pub const ANTEPIE_PCT: f64 = 40.0;
    pub const RETROPIE_PCT: f64 = 40.0;
    pub const MEDIOPIE_PCT: f64 = 20.0;
    pub const ARCH_INDEX: f64 = 0.6;
    pub const TOTAL_LOAD: f64 = 1.0;
    pub const MIDFOOT_PRESSURE_RATIO: f64 = 0.33;
}

/// Arch classification thresholds and evidence weights.
pub mod classification {
    /// Navicular angle above this suggests a flattened medial arch.
    pub const NAVICULAR_FLAT_DEG: f64 = 155.0;
    /// Navicular angle below this suggests a high (cavus) arch.
    pub const NAVICULAR_CAVUS_DEG: f64 = 135.0;
    /// Structural angle evidence weight.
    pub const NAVICULAR_WEIGHT: i32 = 2;

    /// Midfoot contact ratio above this suggests flattening.
    pub const MIDFOOT_RATIO_FLAT: f64 = 0.40;
    /// Midfoot contact ratio below this suggests little midfoot contact.
    pub const MIDFOOT_RATIO_CAVUS: f64 = 0.15;
    /// Functional pressure evidence weight.
    pub const MIDFOOT_RATIO_WEIGHT: i32 = 1;

    /// Rearfoot angle beyond +/- this many degrees counts as
    /// valgus/varus evidence.
    pub const REARFOOT_NEUTRAL_DEG: f64 = 4.0;
    /// Rearfoot alignment evidence weight.
    pub const REARFOOT_WEIGHT: i32 = 1;

    /// Total score at or above this classifies as flat (plano).
    pub const PLANO_SCORE_MIN: i32 = 2;
    /// Total score at or below this classifies as high-arched (cavo).
    pub const CAVO_SCORE_MAX: i32 = -2;
}

/// Contact area calibration parameters.
pub mod contact {
    /// Empirical fill factor correcting for the non-rectangular shape of
    /// a footprint inside its bounding selection.
    pub const FOOTPRINT_FILL_FACTOR: f64 = 0.75;

    /// Selections below this many display pixels per axis are unreliable
    /// for calibration. Callers must reject them before invoking the
    /// pipeline; the core documents this as a precondition and does not
    /// re-validate.
    pub const MIN_SELECTION_DISPLAY_PX: f64 = 50.0;
}
