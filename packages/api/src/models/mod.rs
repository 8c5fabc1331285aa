//! Data models for the portal.
//!
//! Every record mirrors a backend row. Field renames follow the backend's wire
//! spellings, and `alias`es accept the variants different endpoints send
//! (`Type`/`type`, `Scheme_id`/`Scheme_fk`, ...). Each list model also carries
//! a `*Filter` holding the view's local search and sort inputs.

mod account;
mod asset;
mod census;
mod document;
mod environment;
mod family;
mod finance;
mod infrastructure;
mod issue;
mod profile;
mod welfare;

pub use account::{ActivityEntry, UserAccount, UserColumn, UserFilter, VerifyRequest};
pub use asset::{Asset, AssetDraft, AssetFilter};
pub use census::CensusRecord;
pub use document::{Document, DocumentDraft, DocumentFilter};
pub use environment::{EnvironmentalRecord, YearKey};
pub use family::{Family, FamilyMember, FamilyRef, HeadRef, MemberRef};
pub use finance::{FinanceFilter, FinancialDraft, FinancialRecord, FinancialRef};
pub use infrastructure::{
    CostUpdate, InfraColumn, InfraFilter, InfraRef, InfrastructureDraft, InfrastructureProject,
};
pub use issue::{Issue, IssueDraft, IssueFilter, IssueStatus, StatusUpdate};
pub use profile::{CitizenProfile, StaffProfile};
pub use welfare::{
    EnrollmentDecision, EnrollmentFilter, EnrollmentStatus, SchemeDraft, SchemeFilter, SchemeRef,
    WelfareEnrollment, WelfareScheme,
};

/// Lenient numeric decoding. The backend sends some money and measurement
/// columns as JSON numbers and others as decimal strings.
pub(crate) mod number {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    fn convert<E: serde::de::Error>(raw: Raw) -> Result<Option<f64>, E> {
        match raw {
            Raw::Number(n) => Ok(Some(n)),
            Raw::Text(s) if s.trim().is_empty() => Ok(None),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| E::custom(format!("not a number: {s}"))),
            Raw::Null(()) => Ok(None),
        }
    }

    pub fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        convert(Raw::deserialize(deserializer)?).map(|n| n.unwrap_or(0.0))
    }

    pub fn optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        convert(Raw::deserialize(deserializer)?)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Money {
        #[serde(deserialize_with = "super::number::required")]
        amount: f64,
        #[serde(default, deserialize_with = "super::number::optional")]
        extra: Option<f64>,
    }

    #[test]
    fn test_number_accepts_strings_and_numbers() {
        let a: Money = serde_json::from_value(json!({"amount": "1500.50"})).unwrap();
        assert_eq!(a.amount, 1500.5);
        assert!(a.extra.is_none());

        let b: Money = serde_json::from_value(json!({"amount": 7, "extra": null})).unwrap();
        assert_eq!(b.amount, 7.0);
        assert!(b.extra.is_none());

        assert!(serde_json::from_value::<Money>(json!({"amount": "lots"})).is_err());
    }
}
