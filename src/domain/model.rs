use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(deserialize_with = "deserialize_position")]
    pub coordinates: [f64; 2],
}

/// Longitude and latitude of a GeoJSON position; any extra elements such as
/// altitude are dropped.
fn deserialize_position<'de, D>(deserializer: D) -> Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let position = Vec::<f64>::deserialize(deserializer)?;
    match position.as_slice() {
        [x, y, ..] => Ok([*x, *y]),
        _ => Err(serde::de::Error::invalid_length(
            position.len(),
            &"a position with at least two elements",
        )),
    }
}

/// Event attributes as published by the catalogue. Any of them may be
/// missing for an incomplete record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "eventtype")]
    pub event_type: Option<String>,
    #[serde(rename = "publicid")]
    pub public_id: Option<String>,
    #[serde(rename = "modificationtime")]
    pub modification_time: Option<DateTime<Utc>>,
    #[serde(rename = "origintime")]
    pub origin_time: Option<DateTime<Utc>>,
    #[serde(rename = "originerror")]
    pub origin_error: Option<f64>,
    #[serde(rename = "earthmodel")]
    pub earth_model: Option<String>,
    #[serde(rename = "evaluationmethod")]
    pub evaluation_method: Option<String>,
    #[serde(rename = "evaluationstatus")]
    pub evaluation_status: Option<String>,
    #[serde(rename = "evaluationmode")]
    pub evaluation_mode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub depth: Option<f64>,
    #[serde(rename = "depthtype")]
    pub depth_type: Option<String>,
    #[serde(rename = "usedphasecount")]
    pub used_phase_count: Option<i32>,
    #[serde(rename = "usedstationcount")]
    pub used_station_count: Option<i32>,
    #[serde(rename = "azimuthalgap")]
    pub azimuthal_gap: Option<f64>,
    #[serde(rename = "minimumdistance")]
    pub minimum_distance: Option<f64>,
    pub magnitude: Option<f64>,
    #[serde(rename = "magnitudetype")]
    pub magnitude_type: Option<String>,
    #[serde(rename = "magnitudestationcount")]
    pub magnitude_station_count: Option<i32>,
    #[serde(rename = "magnitudeuncertainty")]
    pub magnitude_uncertainty: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Search {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Search {
    /// Identifiers of the returned events in service order. Features without
    /// a public id are skipped.
    pub fn public_ids(&self) -> Vec<String> {
        self.features
            .iter()
            .filter_map(|feature| feature.properties.public_id.clone())
            .collect()
    }
}
