use serde::{Deserialize, Serialize};

use super::number;

/// One yearly census snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CensusRecord {
    #[serde(alias = "Year", default)]
    pub year: i32,
    #[serde(alias = "Total", default)]
    pub total: i64,
    #[serde(alias = "Male", default)]
    pub male: i64,
    #[serde(alias = "Female", default)]
    pub female: i64,
    #[serde(alias = "Literacy", default, deserialize_with = "number::required")]
    pub literacy: f64,
}

impl CensusRecord {
    /// Records sorted by year, as the chart plots them.
    pub fn chronological(records: &[CensusRecord]) -> Vec<CensusRecord> {
        let mut rows = records.to_vec();
        rows.sort_by_key(|r| r.year);
        rows
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_chronological_order() {
        let rows: Vec<CensusRecord> = serde_json::from_value(json!([
            {"year": 2020, "total": 80, "male": 41, "female": 39, "literacy": 74.5},
            {"year": 2000, "total": 50, "male": 26, "female": 24, "literacy": "61.2"}
        ]))
        .unwrap();
        let years: Vec<i32> = CensusRecord::chronological(&rows)
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, vec![2000, 2020]);
    }
}
