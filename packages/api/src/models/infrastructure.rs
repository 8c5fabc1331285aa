use serde::{Deserialize, Serialize};

use super::number;
use crate::query::{matches_text, sort_by, SortOrder};

/// A public works project owned by a government agency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfrastructureProject {
    #[serde(rename = "Infra_id", alias = "infra_id", default)]
    pub id: i64,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,
    #[serde(rename = "Location", alias = "location", default)]
    pub location: Option<String>,
    #[serde(
        rename = "Funding",
        alias = "funding",
        default,
        deserialize_with = "number::required"
    )]
    pub funding: f64,
    #[serde(
        rename = "Actual_cost",
        alias = "actual_cost",
        default,
        deserialize_with = "number::required"
    )]
    pub actual_cost: f64,
    #[serde(
        rename = "Government_agencies_fk",
        alias = "government_agencies_fk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub agency_id: Option<i64>,
    #[serde(
        rename = "government_agency_user_name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub agency: Option<String>,
}

impl InfrastructureProject {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Negative when the project came in under budget.
    pub fn overrun(&self) -> f64 {
        self.actual_cost - self.funding
    }
}

/// Body for `POST /government-agency/infrastructure`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InfrastructureDraft {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Funding")]
    pub funding: f64,
    #[serde(rename = "Actual_cost")]
    pub actual_cost: f64,
}

impl InfrastructureDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() || self.location.trim().is_empty() {
            return Err("Description and location are required.".to_string());
        }
        if self.funding < 0.0 || self.actual_cost < 0.0 {
            return Err("Amounts cannot be negative.".to_string());
        }
        Ok(())
    }
}

/// Body for `PUT /panchayat-employee/infrastructure`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostUpdate {
    #[serde(rename = "Infra_id")]
    pub id: i64,
    pub actual_cost: f64,
}

/// Body for `DELETE /government-agency/infrastructure`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfraRef {
    #[serde(rename = "Infra_id")]
    pub id: i64,
}

/// Sortable columns of the citizen infrastructure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfraColumn {
    #[default]
    Description,
    Location,
    Funding,
    ActualCost,
}

impl InfraColumn {
    pub const ALL: [InfraColumn; 4] = [
        InfraColumn::Description,
        InfraColumn::Location,
        InfraColumn::Funding,
        InfraColumn::ActualCost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InfraColumn::Description => "Description",
            InfraColumn::Location => "Location",
            InfraColumn::Funding => "Funding",
            InfraColumn::ActualCost => "Actual Cost",
        }
    }
}

/// Citizen infrastructure table inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InfraFilter {
    /// Matched against description and location.
    pub search: String,
    pub column: InfraColumn,
    pub order: SortOrder,
}

impl InfraFilter {
    /// Clicking the active column flips the order; another column starts ascending.
    pub fn click(&mut self, column: InfraColumn) {
        if self.column == column {
            self.order = self.order.toggle();
        } else {
            self.column = column;
            self.order = SortOrder::Asc;
        }
    }

    pub fn apply(&self, projects: &[InfrastructureProject]) -> Vec<InfrastructureProject> {
        let mut rows: Vec<InfrastructureProject> = projects
            .iter()
            .filter(|p| {
                matches_text(p.description(), &self.search)
                    || matches_text(p.location(), &self.search)
            })
            .cloned()
            .collect();
        let order = Some(self.order);
        match self.column {
            InfraColumn::Description => {
                sort_by(&mut rows, order, |p| p.description().to_lowercase())
            }
            InfraColumn::Location => sort_by(&mut rows, order, |p| p.location().to_lowercase()),
            InfraColumn::Funding => sort_by(&mut rows, order, |p| p.funding),
            InfraColumn::ActualCost => sort_by(&mut rows, order, |p| p.actual_cost),
        }
        rows
    }
}
