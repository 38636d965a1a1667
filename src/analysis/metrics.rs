//! Output metrics record for one analyzed foot
//!
//! Field names serialize in the camelCase/Spanish form the reporting
//! collaborator consumes (`antepie`, `indiceArco`, `archType`, ...).

use serde::{Deserialize, Serialize};

/// Ternary arch diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchType {
    /// Flat foot
    Plano,
    /// High-arched foot
    Cavo,
    /// Neutral arch
    Neutro,
}

/// Real-world contact area derived from the foot-length calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactArea {
    /// Foot length in cm (the user-entered calibration value)
    pub length: f64,
    /// Calibrated selection width in cm
    pub width: f64,
    /// Estimated contact area in cm²
    pub area: f64,
}

/// Quantitative indicators for one foot side.
///
/// Created fresh per analysis run, never mutated afterwards, and handed
/// verbatim to the narrative-generation and report-rendering
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootMetrics {
    /// Forefoot load share, percent
    pub antepie: f64,
    /// Midfoot load share, percent
    pub mediopie: f64,
    /// Rearfoot load share, percent
    pub retropie: f64,
    /// Arch index derived from midfoot contact width
    pub indice_arco: f64,
    /// Ternary arch diagnosis
    pub arch_type: ArchType,
    /// Calibrated contact area, when a foot measurement was supplied
    pub contact_area: Option<ContactArea>,
    /// Sum of all intensity above the noise threshold
    pub total_load: f64,
    /// Navicular angle in degrees, when triangle landmarks were supplied
    pub navicular_angle: Option<f64>,
    /// Signed rearfoot angle in degrees (positive = valgus), when
    /// alignment lines were supplied
    pub rearfoot_angle: Option<f64>,
    /// Average midfoot contact width over the image width
    pub midfoot_pressure_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_serialize_in_collaborator_field_names() {
        let metrics = FootMetrics {
            antepie: 45.0,
            mediopie: 15.0,
            retropie: 40.0,
            indice_arco: 0.7,
            arch_type: ArchType::Neutro,
            contact_area: Some(ContactArea { length: 25.0, width: 10.0, area: 187.5 }),
            total_load: 12345.0,
            navicular_angle: Some(145.0),
            rearfoot_angle: None,
            midfoot_pressure_ratio: 0.3,
        };

        let json = serde_json::to_value(&metrics).unwrap();

        assert_eq!(json["indiceArco"], 0.7);
        assert_eq!(json["archType"], "neutro");
        assert_eq!(json["contactArea"]["area"], 187.5);
        assert_eq!(json["navicularAngle"], 145.0);
        assert_eq!(json["rearfootAngle"], serde_json::Value::Null);
        assert_eq!(json["midfootPressureRatio"], 0.3);
    }
}
