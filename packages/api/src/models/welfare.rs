use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::{matches_text, sort_by, SortOrder};

/// A government welfare scheme.
///
/// Citizens' listing adds their own enrollment `status` (absent when they have
/// not applied) and names the key `Scheme_fk`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WelfareScheme {
    #[serde(rename = "Scheme_id", alias = "Scheme_fk", alias = "scheme_id", default)]
    pub id: i64,
    #[serde(rename = "Scheme_name", alias = "scheme_name", default)]
    pub name: String,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,
    #[serde(rename = "Application_deadline", alias = "application_deadline", default)]
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
}

/// Enrollment decision state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnrollmentStatus {
    #[default]
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Approved")]
    Approved,
    #[serde(alias = "Rejected")]
    Rejected,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 3] = [
        EnrollmentStatus::Pending,
        EnrollmentStatus::Approved,
        EnrollmentStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "PENDING",
            EnrollmentStatus::Approved => "APPROVED",
            EnrollmentStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "Pending",
            EnrollmentStatus::Approved => "Approved",
            EnrollmentStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One citizen's application to one scheme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WelfareEnrollment {
    #[serde(rename = "Citizen_fk", alias = "citizen_id", default)]
    pub citizen_id: i64,
    #[serde(rename = "user_name", alias = "User_name", default)]
    pub user_name: String,
    #[serde(rename = "Scheme_fk", alias = "scheme_id", default)]
    pub scheme_id: i64,
    #[serde(rename = "scheme_name", alias = "Scheme_name", default)]
    pub scheme_name: String,
    #[serde(default)]
    pub status: EnrollmentStatus,
}

/// Body for `PUT /panchayat-employee/welfare-enrol`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentDecision {
    pub scheme_id: i64,
    pub citizen_id: i64,
    pub status: EnrollmentStatus,
}

impl EnrollmentDecision {
    pub fn for_enrollment(enrollment: &WelfareEnrollment, status: EnrollmentStatus) -> Self {
        Self {
            scheme_id: enrollment.scheme_id,
            citizen_id: enrollment.citizen_id,
            status,
        }
    }
}

/// Body for `POST /government-agency/welfare-scheme`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SchemeDraft {
    #[serde(rename = "Scheme_name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Application_deadline")]
    pub deadline: String,
}

impl SchemeDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Scheme name is required.".to_string());
        }
        if self.deadline.trim().is_empty() {
            return Err("Application deadline is required.".to_string());
        }
        Ok(())
    }
}

/// Body for `DELETE /government-agency/welfare-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SchemeRef {
    #[serde(rename = "Scheme_id")]
    pub id: i64,
}

/// Scheme table inputs, shared by agencies and employees.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemeFilter {
    pub name: String,
    pub by_deadline: bool,
}

impl SchemeFilter {
    pub fn apply(&self, schemes: &[WelfareScheme]) -> Vec<WelfareScheme> {
        let mut rows: Vec<WelfareScheme> = schemes
            .iter()
            .filter(|s| matches_text(&s.name, &self.name))
            .cloned()
            .collect();
        // ISO dates sort lexically
        let order = self.by_deadline.then_some(SortOrder::Asc);
        sort_by(&mut rows, order, |s| s.deadline.clone());
        rows
    }
}

/// Enrollment table inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnrollmentFilter {
    pub scheme_name: String,
    pub status: Option<EnrollmentStatus>,
}

impl EnrollmentFilter {
    pub fn apply(&self, enrollments: &[WelfareEnrollment]) -> Vec<WelfareEnrollment> {
        enrollments
            .iter()
            .filter(|e| matches_text(&e.scheme_name, &self.scheme_name))
            .filter(|e| self.status.is_none_or(|s| e.status == s))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_citizen_listing_uses_scheme_fk() {
        let scheme: WelfareScheme = serde_json::from_value(json!({
            "Scheme_fk": 2, "Scheme_name": "Educational Grant",
            "Description": "Scholarship", "Application_deadline": "2025-06-15"
        }))
        .unwrap();
        assert_eq!(scheme.id, 2);
        assert_eq!(scheme.status, None);

        let applied: WelfareScheme = serde_json::from_value(json!({
            "Scheme_id": 3, "Scheme_name": "Housing", "status": "PENDING"
        }))
        .unwrap();
        assert_eq!(applied.status, Some(EnrollmentStatus::Pending));
    }

    #[test]
    fn test_decision_wire_shape() {
        let enrollment = WelfareEnrollment {
            citizen_id: 101,
            user_name: "john_doe".into(),
            scheme_id: 1,
            scheme_name: "Health Assistance".into(),
            status: EnrollmentStatus::Pending,
        };
        let decision = EnrollmentDecision::for_enrollment(&enrollment, EnrollmentStatus::Approved);
        assert_eq!(
            serde_json::to_value(decision).unwrap(),
            json!({"scheme_id": 1, "citizen_id": 101, "status": "APPROVED"})
        );
    }

    #[test]
    fn test_scheme_filter_sorts_by_deadline() {
        let scheme = |id, name: &str, deadline: &str| WelfareScheme {
            id,
            name: name.into(),
            deadline: deadline.into(),
            ..WelfareScheme::default()
        };
        let rows = vec![
            scheme(1, "Health Assistance", "2025-12-31"),
            scheme(2, "Education Grant", "2025-06-30"),
            scheme(3, "Housing", "2024-01-01"),
        ];
        let filter = SchemeFilter {
            name: "a".into(),
            by_deadline: true,
        };
        let ids: Vec<i64> = filter.apply(&rows).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_enrollment_filter() {
        let rows = vec![
            WelfareEnrollment {
                scheme_name: "Agricultural Subsidy".into(),
                status: EnrollmentStatus::Approved,
                ..WelfareEnrollment::default()
            },
            WelfareEnrollment {
                scheme_name: "Agricultural Subsidy".into(),
                ..WelfareEnrollment::default()
            },
        ];
        let filter = EnrollmentFilter {
            scheme_name: "agri".into(),
            status: Some(EnrollmentStatus::Pending),
        };
        assert_eq!(filter.apply(&rows).len(), 1);
        assert_eq!(EnrollmentStatus::parse("rejected"), Some(EnrollmentStatus::Rejected));
    }
}
