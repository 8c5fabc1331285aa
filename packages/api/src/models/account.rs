//! Accounts and the audit trail, as the admin dashboard sees them.

use serde::{Deserialize, Serialize};

use crate::query::{sort_by, SortOrder};
use crate::roles::UserType;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "User_id", alias = "user_id", default)]
    pub id: i64,
    #[serde(rename = "User_name", alias = "user_name", default)]
    pub user_name: String,
    #[serde(rename = "User_type", alias = "user_type", default)]
    pub user_type: String,
    #[serde(rename = "Email", alias = "email", default)]
    pub email: String,
    #[serde(rename = "Contact_number", alias = "contact_number", default)]
    pub contact_number: String,
    #[serde(rename = "Is_verified", alias = "is_verified", default)]
    pub is_verified: bool,
}

impl UserAccount {
    /// The account type, if its spelling is known.
    pub fn kind(&self) -> Option<UserType> {
        self.user_type.parse().ok()
    }
}

/// Body for `PUT /admin/verify/{user}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerifyRequest {
    #[serde(rename = "User_id")]
    pub id: i64,
    pub validation: bool,
}

/// Sortable columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserColumn {
    #[default]
    UserName,
    UserType,
}

/// Admin users table inputs. The type and verification filters are also sent
/// to the backend as query parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFilter {
    pub user_type: Option<UserType>,
    pub verified: Option<bool>,
    pub column: UserColumn,
}

impl UserFilter {
    /// Query parameters for `GET /admin/users`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(kind) = self.user_type {
            params.push(("User_type", kind.as_str().to_string()));
        }
        if let Some(verified) = self.verified {
            params.push(("Is_verified", verified.to_string()));
        }
        params
    }

    pub fn apply(&self, users: &[UserAccount]) -> Vec<UserAccount> {
        let mut rows: Vec<UserAccount> = users
            .iter()
            .filter(|u| self.user_type.is_none_or(|k| u.kind() == Some(k)))
            .filter(|u| self.verified.is_none_or(|v| u.is_verified == v))
            .cloned()
            .collect();
        match self.column {
            UserColumn::UserName => {
                sort_by(&mut rows, Some(SortOrder::Asc), |u| u.user_name.to_lowercase())
            }
            UserColumn::UserType => {
                sort_by(&mut rows, Some(SortOrder::Asc), |u| u.user_type.clone())
            }
        }
        rows
    }
}

/// One audited field change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "Log_id", alias = "log_id", default)]
    pub id: i64,
    #[serde(rename = "Time", alias = "time", default)]
    pub time: String,
    #[serde(rename = "From_value", alias = "from_value", default)]
    pub field: String,
    #[serde(rename = "New_val", alias = "new_val", default)]
    pub new_value: Option<String>,
    #[serde(rename = "Old_val", alias = "old_val", default)]
    pub old_value: Option<String>,
    #[serde(rename = "Affected_user_name", alias = "affected_user_name", default)]
    pub affected_user: String,
    #[serde(rename = "User_name", alias = "user_name", default)]
    pub actor: String,
}
