use serde::{Deserialize, Serialize};

use super::number;
use crate::query::{matches_text, sort_by, within, SortOrder};

/// A citizen's asset. Agricultural land additionally carries crop details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "Asset_id", alias = "asset_id", default)]
    pub id: i64,
    #[serde(rename = "Type", alias = "type", default)]
    pub kind: String,
    #[serde(
        rename = "Valuation",
        alias = "valuation",
        default,
        deserialize_with = "number::required"
    )]
    pub valuation: f64,
    #[serde(rename = "User_name", alias = "user_name", default)]
    pub owner: String,
    #[serde(rename = "Year", alias = "year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "Season", alias = "season", default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(
        rename = "Crop_type",
        alias = "crop_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub crop_type: Option<String>,
    #[serde(
        rename = "Area_cultivated",
        alias = "area_cultivated",
        default,
        deserialize_with = "number::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub area_cultivated: Option<f64>,
    #[serde(
        rename = "Yield",
        alias = "yield",
        default,
        deserialize_with = "number::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub crop_yield: Option<f64>,
}

impl Asset {
    pub fn is_agricultural(&self) -> bool {
        self.crop_type.is_some() || self.season.is_some()
    }
}

/// Create/update body for `/panchayat-employee/assets`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AssetDraft {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Valuation")]
    pub valuation: f64,
    #[serde(rename = "User_name")]
    pub owner: String,
}

impl AssetDraft {
    /// Prefill from an existing row for editing.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            kind: asset.kind.clone(),
            valuation: asset.valuation,
            owner: asset.owner.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.kind.trim().is_empty() {
            return Err("Asset type is required.".to_string());
        }
        if self.owner.trim().is_empty() {
            return Err("Citizen user name is required.".to_string());
        }
        if self.valuation < 0.0 {
            return Err("Valuation cannot be negative.".to_string());
        }
        Ok(())
    }
}

/// Employee asset table inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetFilter {
    pub kind: String,
    pub min_valuation: Option<f64>,
    pub max_valuation: Option<f64>,
    pub order: Option<SortOrder>,
}

impl AssetFilter {
    pub fn apply(&self, assets: &[Asset]) -> Vec<Asset> {
        let mut rows: Vec<Asset> = assets
            .iter()
            .filter(|a| matches_text(&a.kind, &self.kind))
            .filter(|a| within(a.valuation, self.min_valuation, self.max_valuation))
            .cloned()
            .collect();
        sort_by(&mut rows, self.order, |a| a.valuation);
        rows
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn asset(id: i64, kind: &str, valuation: f64) -> Asset {
        Asset {
            id,
            kind: kind.into(),
            valuation,
            owner: "john_doe".into(),
            ..Asset::default()
        }
    }

    #[test]
    fn test_decodes_both_spellings() {
        let upper: Asset =
            serde_json::from_value(json!({"Asset_id": 1, "Type": "Land", "Valuation": 50000}))
                .unwrap();
        let lower: Asset =
            serde_json::from_value(json!({"Asset_id": 1, "type": "Land", "valuation": "50000"}))
                .unwrap();
        assert_eq!(upper, lower);
        assert!(!upper.is_agricultural());
    }

    #[test]
    fn test_agricultural_fields() {
        let asset: Asset = serde_json::from_value(json!({
            "Asset_id": 3, "Type": "Agricultural Land", "Valuation": 120000,
            "User_name": "john_doe", "Year": 2023, "Season": "Kharif",
            "Crop_type": "Rice", "Area_cultivated": 2.5, "Yield": 40
        }))
        .unwrap();
        assert!(asset.is_agricultural());
        assert_eq!(asset.crop_yield, Some(40.0));
    }

    #[test]
    fn test_draft_wire_shape() {
        let draft = AssetDraft {
            kind: "House".into(),
            valuation: 90000.0,
            owner: "john_doe".into(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"Type": "House", "Valuation": 90000.0, "User_name": "john_doe"})
        );
        assert!(AssetDraft::default().validate().is_err());
    }

    #[test]
    fn test_filter_search_range_and_sort() {
        let rows = vec![
            asset(1, "Land", 500.0),
            asset(2, "House", 900.0),
            asset(3, "Farm land", 100.0),
        ];
        let filter = AssetFilter {
            kind: "land".into(),
            min_valuation: Some(50.0),
            max_valuation: None,
            order: Some(SortOrder::Asc),
        };
        let ids: Vec<i64> = filter.apply(&rows).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
