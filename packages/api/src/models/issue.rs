use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::query::{sort_by, SortOrder};

/// Progress of a reported issue.
///
/// Citizens' endpoints spell states as `Pending`/`In Progress`/`Resolved`,
/// employees' as `OPEN`/`IN_PROGRESS`/`RESOLVED`. Both decode to the same
/// variant; anything else is kept verbatim in [`IssueStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum IssueStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Other(String),
}

impl IssueStatus {
    /// States an employee can move an issue to.
    pub const SETTABLE: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "OPEN" | "PENDING" => IssueStatus::Open,
            "IN_PROGRESS" => IssueStatus::InProgress,
            "RESOLVED" | "CLOSED" => IssueStatus::Resolved,
            _ => IssueStatus::Other(raw.to_string()),
        }
    }

    /// Wire spelling sent on updates.
    pub fn as_str(&self) -> &str {
        match self {
            IssueStatus::Open => "OPEN",
            IssueStatus::InProgress => "IN_PROGRESS",
            IssueStatus::Resolved => "RESOLVED",
            IssueStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Other(raw) => raw,
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge(&self) -> &'static str {
        match self {
            IssueStatus::Open => "badge-warning",
            IssueStatus::InProgress => "badge-info",
            IssueStatus::Resolved => "badge-success",
            IssueStatus::Other(_) => "badge-muted",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for IssueStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IssueStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| IssueStatus::parse(&s)).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "Issue_id", alias = "issue_id", default)]
    pub id: i64,
    #[serde(alias = "Description", default)]
    pub description: String,
    #[serde(alias = "Status", default)]
    pub status: IssueStatus,
    #[serde(rename = "user_name", alias = "User_name", default)]
    pub reporter: String,
}

/// Body for `POST /citizen/issues`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueDraft {
    pub description: String,
}

impl IssueDraft {
    /// `None` when the description is blank.
    pub fn new(description: &str) -> Option<Self> {
        let description = description.trim();
        (!description.is_empty()).then(|| Self {
            description: description.to_string(),
        })
    }
}

/// Body for `PUT /panchayat-employee/issues`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub issue_id: i64,
    pub status: IssueStatus,
}

/// Employee issue table inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub order: Option<SortOrder>,
}

impl IssueFilter {
    pub fn apply(&self, issues: &[Issue]) -> Vec<Issue> {
        let mut rows: Vec<Issue> = issues
            .iter()
            .filter(|i| self.status.as_ref().is_none_or(|s| &i.status == s))
            .cloned()
            .collect();
        sort_by(&mut rows, self.order, |i| i.id);
        rows
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_spellings_agree() {
        assert_eq!(IssueStatus::parse("Pending"), IssueStatus::Open);
        assert_eq!(IssueStatus::parse("OPEN"), IssueStatus::Open);
        assert_eq!(IssueStatus::parse("In Progress"), IssueStatus::InProgress);
        assert_eq!(IssueStatus::parse("IN_PROGRESS"), IssueStatus::InProgress);
        assert_eq!(
            IssueStatus::parse("Escalated"),
            IssueStatus::Other("Escalated".into())
        );
    }

    #[test]
    fn test_decode_citizen_and_employee_rows() {
        let citizen: Issue = serde_json::from_value(
            json!({"Issue_id": 1, "description": "Streetlight broken", "status": "Pending"}),
        )
        .unwrap();
        let employee: Issue = serde_json::from_value(
            json!({"issue_id": 1, "description": "Streetlight broken", "status": "OPEN"}),
        )
        .unwrap();
        assert_eq!(citizen, employee);
    }

    #[test]
    fn test_null_status_defaults_to_open() {
        let issue: Issue =
            serde_json::from_value(json!({"Issue_id": 4, "description": "x", "status": null}))
                .unwrap();
        assert_eq!(issue.status, IssueStatus::Open);
    }

    #[test]
    fn test_status_update_wire_shape() {
        let update = StatusUpdate {
            issue_id: 3,
            status: IssueStatus::Resolved,
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"issue_id": 3, "status": "RESOLVED"})
        );
    }

    #[test]
    fn test_blank_draft_rejected() {
        assert!(IssueDraft::new("   ").is_none());
        assert_eq!(IssueDraft::new(" Pothole ").unwrap().description, "Pothole");
    }

    #[test]
    fn test_filter_by_status_sorted_by_id() {
        let issue = |id, status| Issue {
            id,
            status,
            ..Issue::default()
        };
        let rows = vec![
            issue(3, IssueStatus::Open),
            issue(1, IssueStatus::Resolved),
            issue(2, IssueStatus::Open),
        ];
        let filter = IssueFilter {
            status: Some(IssueStatus::Open),
            order: Some(SortOrder::Desc),
        };
        let ids: Vec<i64> = filter.apply(&rows).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
