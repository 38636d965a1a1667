//! Arch type classification from combined structural and functional
//! evidence.
//!
//! Three signals vote on a single score: the navicular angle (structural,
//! double weight), the midfoot contact ratio (functional) and the
//! rearfoot alignment angle. A missing signal contributes nothing; the
//! score maps onto the ternary plano / cavo / neutro diagnosis.

use crate::analysis::constants::classification::*;
use crate::analysis::metrics::ArchType;

/// Evidence available for one foot. Absent measurements are explicit so
/// the zero-contribution contract is enforced by the type, not by
/// convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchEvidence {
    pub navicular_angle: Option<f64>,
    pub midfoot_pressure_ratio: Option<f64>,
    pub rearfoot_angle: Option<f64>,
}

/// Accumulated evidence score. Positive leans flat, negative leans cavus.
pub fn arch_score(evidence: &ArchEvidence) -> i32 {
    let mut score = 0;

    if let Some(navicular) = evidence.navicular_angle {
        if navicular > NAVICULAR_FLAT_DEG {
            score += NAVICULAR_WEIGHT;
        } else if navicular < NAVICULAR_CAVUS_DEG {
            score -= NAVICULAR_WEIGHT;
        }
    }

    if let Some(ratio) = evidence.midfoot_pressure_ratio {
        if ratio > MIDFOOT_RATIO_FLAT {
            score += MIDFOOT_RATIO_WEIGHT;
        } else if ratio < MIDFOOT_RATIO_CAVUS {
            score -= MIDFOOT_RATIO_WEIGHT;
        }
    }

    if let Some(rearfoot) = evidence.rearfoot_angle {
        if rearfoot > REARFOOT_NEUTRAL_DEG {
            score += REARFOOT_WEIGHT;
        } else if rearfoot < -REARFOOT_NEUTRAL_DEG {
            score -= REARFOOT_WEIGHT;
        }
    }

    score
}

/// Maps the evidence score onto the ternary diagnosis.
pub fn classify_arch(evidence: &ArchEvidence) -> ArchType {
    let score = arch_score(evidence);
    if score >= PLANO_SCORE_MIN {
        ArchType::Plano
    } else if score <= CAVO_SCORE_MAX {
        ArchType::Cavo
    } else {
        ArchType::Neutro
    }
}
