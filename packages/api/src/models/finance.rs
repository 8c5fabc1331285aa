use serde::{Deserialize, Serialize};

use super::number;
use crate::query::{sort_by, within, SortOrder};

/// One year of a citizen's financial profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialRecord {
    #[serde(rename = "Financial_id", alias = "financial_id", default)]
    pub id: i64,
    #[serde(alias = "Year", default)]
    pub year: i32,
    #[serde(
        rename = "Annual_Income",
        alias = "annual_income",
        default,
        deserialize_with = "number::required"
    )]
    pub annual_income: f64,
    #[serde(rename = "Income_source", alias = "income_source", default)]
    pub income_source: String,
    #[serde(
        rename = "Tax_paid",
        alias = "tax_paid",
        default,
        deserialize_with = "number::required"
    )]
    pub tax_paid: f64,
    #[serde(
        rename = "Tax_liability",
        alias = "tax_liability",
        default,
        deserialize_with = "number::required"
    )]
    pub tax_liability: f64,
    #[serde(
        rename = "Debt_liability",
        alias = "debt_liability",
        default,
        deserialize_with = "number::required"
    )]
    pub debt_liability: f64,
    #[serde(
        rename = "Credit_score",
        alias = "credit_score",
        default,
        deserialize_with = "number::optional"
    )]
    pub credit_score: Option<f64>,
    #[serde(rename = "Last_updated", alias = "last_updated", default)]
    pub last_updated: String,
    #[serde(rename = "user_name", alias = "User_name", default)]
    pub owner: String,
}

/// Body for `POST /panchayat-employee/financial-data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinancialDraft {
    pub year: i32,
    #[serde(rename = "Annual_Income")]
    pub annual_income: f64,
    #[serde(rename = "Income_source")]
    pub income_source: String,
    #[serde(rename = "Tax_paid")]
    pub tax_paid: f64,
    #[serde(rename = "Tax_liability")]
    pub tax_liability: f64,
    #[serde(rename = "Debt_liability")]
    pub debt_liability: f64,
    #[serde(rename = "Credit_score", skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<f64>,
    pub user_name: String,
}

impl FinancialDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_name.trim().is_empty() {
            return Err("Citizen user name is required.".to_string());
        }
        if self.year <= 0 {
            return Err("Year is required.".to_string());
        }
        if self.income_source.trim().is_empty() {
            return Err("Income source is required.".to_string());
        }
        Ok(())
    }
}

/// Body for `DELETE /panchayat-employee/financial-data`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialRef {
    #[serde(rename = "Financial_id")]
    pub id: i64,
}

/// Employee finance table inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinanceFilter {
    pub min_income: Option<f64>,
    pub max_income: Option<f64>,
    pub order: Option<SortOrder>,
}

impl FinanceFilter {
    pub fn apply(&self, records: &[FinancialRecord]) -> Vec<FinancialRecord> {
        let mut rows: Vec<FinancialRecord> = records
            .iter()
            .filter(|r| within(r.annual_income, self.min_income, self.max_income))
            .cloned()
            .collect();
        sort_by(&mut rows, self.order, |r| r.annual_income);
        rows
    }
}
