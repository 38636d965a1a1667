//! Plantar footprint analysis core.
//!
//! Converts a photograph of a footprint plus a small set of user-placed
//! geometric annotations into quantitative biomechanical indicators:
//! regional pressure distribution, arch classification, rearfoot alignment
//! and contact area.

pub mod analysis;
pub mod logger;
