use serde::{Deserialize, Serialize};

use super::number;

/// Yearly environmental indicators for the village. The year is the key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentalRecord {
    #[serde(rename = "Year", alias = "year", default)]
    pub year: i32,
    #[serde(rename = "Aqi", alias = "aqi", default, deserialize_with = "number::required")]
    pub aqi: f64,
    #[serde(
        rename = "Forest_cover",
        alias = "forest_cover",
        default,
        deserialize_with = "number::required"
    )]
    pub forest_cover: f64,
    #[serde(rename = "Odf", alias = "odf", default, deserialize_with = "number::required")]
    pub odf: f64,
    #[serde(
        rename = "Afforestation_data",
        alias = "afforestation_data",
        default,
        deserialize_with = "number::required"
    )]
    pub afforestation: f64,
    #[serde(
        rename = "Precipitation",
        alias = "precipitation",
        default,
        deserialize_with = "number::required"
    )]
    pub precipitation: f64,
    #[serde(
        rename = "Water_quality",
        alias = "water_quality",
        default,
        deserialize_with = "number::required"
    )]
    pub water_quality: f64,
}

impl EnvironmentalRecord {
    /// A blank record for the given year, as the create form starts.
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.year < 1900 {
            return Err("Enter a valid year.".to_string());
        }
        if self.aqi < 0.0 || self.precipitation < 0.0 {
            return Err("Measurements cannot be negative.".to_string());
        }
        if !(0.0..=100.0).contains(&self.forest_cover) {
            return Err("Forest cover is a percentage between 0 and 100.".to_string());
        }
        Ok(())
    }
}

/// Body for `DELETE /panchayat-employee/environmental-data`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearKey {
    #[serde(rename = "Year")]
    pub year: i32,
}
