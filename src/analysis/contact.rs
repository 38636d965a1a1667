//! Real-world contact area estimation.
//!
//! The user-entered foot length calibrates the selection rectangle: the
//! selection's height axis is assumed aligned with the foot length, which
//! yields a cm-per-display-pixel scale. Width follows from the same
//! scale, and the bounding-box area is corrected by an empirical fill
//! factor for the non-rectangular footprint shape.

use crate::analysis::constants::contact::FOOTPRINT_FILL_FACTOR;
use crate::analysis::crop::SelectionRegion;
use crate::analysis::metrics::ContactArea;

/// Estimates the real-world contact area in cm².
///
/// Returns `None` when the foot measurement or selection is absent, or
/// when the selection height is non-positive.
pub fn contact_area(
    foot_measurement_cm: Option<f64>,
    selection: Option<&SelectionRegion>,
) -> Option<ContactArea> {
    let length = foot_measurement_cm?;
    let selection = selection?;
    if selection.height <= 0.0 {
        return None;
    }

    let scale = length / selection.height;
    let width = selection.width * scale;
    let area = length * width * FOOTPRINT_FILL_FACTOR;

    Some(ContactArea { length, width, area })
}
