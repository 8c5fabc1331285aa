//! # User types, staff roles and client-side gates
//!
//! The backend groups accounts by **user type** (`CITIZEN`, `ADMIN`,
//! `PANCHAYAT_EMPLOYEE`, `GOVERNMENT_AGENCY`) and, for staff, a **role** naming
//! the records they manage (`ASSET`, `FINANCIAL_DATA`, ...).
//!
//! An [`Access`] is the requirement a view checks before it fetches anything.
//! These gates only decide what the portal shows. The backend must re-validate
//! the caller's role on every endpoint; nothing here is an authorization
//! boundary.
//!
//! Role strings are compared by exact spelling. A spelling the portal does not
//! know (the backend has been seen sending `FIANNCIAL_DATA`) is kept verbatim in
//! the session, logged, and grants nothing.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::session::Identity;

/// Account category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Citizen,
    Admin,
    PanchayatEmployee,
    GovernmentAgency,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Citizen,
        UserType::Admin,
        UserType::PanchayatEmployee,
        UserType::GovernmentAgency,
    ];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Citizen => "CITIZEN",
            UserType::Admin => "ADMIN",
            UserType::PanchayatEmployee => "PANCHAYAT_EMPLOYEE",
            UserType::GovernmentAgency => "GOVERNMENT_AGENCY",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            UserType::Citizen => "Citizen",
            UserType::Admin => "Admin",
            UserType::PanchayatEmployee => "Panchayat Employee",
            UserType::GovernmentAgency => "Government Agency",
        }
    }

    /// Roles a user of this type may register with.
    pub fn roles(self) -> &'static [Role] {
        match self {
            UserType::PanchayatEmployee => &Role::EMPLOYEE,
            UserType::GovernmentAgency => &Role::AGENCY,
            UserType::Citizen | UserType::Admin => &[],
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown user type: {s}"))
    }
}

/// Staff duty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Asset,
    Family,
    Issues,
    Document,
    FinancialData,
    WelfareScheme,
    Infrastructure,
    EnvironmentalData,
}

impl Role {
    /// Roles available to panchayat employees.
    pub const EMPLOYEE: [Role; 8] = [
        Role::Asset,
        Role::Family,
        Role::Issues,
        Role::Document,
        Role::FinancialData,
        Role::WelfareScheme,
        Role::Infrastructure,
        Role::EnvironmentalData,
    ];

    /// Roles available to government agencies.
    pub const AGENCY: [Role; 2] = [Role::WelfareScheme, Role::Infrastructure];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Asset => "ASSET",
            Role::Family => "FAMILY",
            Role::Issues => "ISSUES",
            Role::Document => "DOCUMENT",
            Role::FinancialData => "FINANCIAL_DATA",
            Role::WelfareScheme => "WELFARE_SCHEME",
            Role::Infrastructure => "INFRASTRUCTURE",
            Role::EnvironmentalData => "ENVIRONMENTAL_DATA",
        }
    }

    /// What a holder of this role manages, in lower case.
    pub fn subject(self) -> &'static str {
        match self {
            Role::Asset => "assets",
            Role::Family => "families",
            Role::Issues => "issues",
            Role::Document => "documents",
            Role::FinancialData => "financial data",
            Role::WelfareScheme => "welfare schemes",
            Role::Infrastructure => "infrastructure projects",
            Role::EnvironmentalData => "environmental data",
        }
    }

    /// Registration form label, as shown to employees.
    pub fn label(self) -> &'static str {
        match self {
            Role::Asset => "Asset Manager",
            Role::Family => "Family Manager",
            Role::Issues => "Issue Manager",
            Role::Document => "Document Manager",
            Role::FinancialData => "Finance Manager",
            Role::WelfareScheme => "Welfare Manager",
            Role::Infrastructure => "Infrastructure Manager",
            Role::EnvironmentalData => "Environment Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::EMPLOYEE
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// Requirement a view places on the session before fetching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, logged in or not.
    Anyone,
    /// Any account of this type.
    Kind(UserType),
    /// A staff account of this type holding this role.
    Duty(UserType, Role),
}

impl Access {
    pub const fn employee(role: Role) -> Self {
        Access::Duty(UserType::PanchayatEmployee, role)
    }

    pub const fn agency(role: Role) -> Self {
        Access::Duty(UserType::GovernmentAgency, role)
    }

    /// Whether the identity satisfies this requirement.
    pub fn permits(self, identity: &Identity) -> bool {
        match self {
            Access::Anyone => true,
            Access::Kind(kind) => identity.user_type == Some(kind),
            Access::Duty(kind, role) => {
                identity.user_type == Some(kind) && identity.role() == Some(role)
            }
        }
    }

    /// `Ok(())` when permitted, [`ApiError::Unauthorized`] otherwise.
    pub fn check(self, identity: &Identity) -> ApiResult<()> {
        if self.permits(identity) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized(self))
        }
    }

    /// Phrase completing "You are not authorized to access ...".
    pub fn describe(self) -> String {
        match self {
            Access::Anyone => "this page".to_string(),
            Access::Kind(UserType::Admin) => "this panel".to_string(),
            Access::Kind(kind) => format!("{} pages", kind.label().to_lowercase()),
            Access::Duty(_, role) => role.subject().to_string(),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Anyone => f.write_str("anyone"),
            Access::Kind(kind) => write!(f, "{kind}"),
            Access::Duty(kind, role) => write!(f, "{kind}/{role}"),
        }
    }
}

/// Run `fetch` only when `access` permits `identity`.
///
/// On a mismatch `fetch` is never called, so no request leaves the client.
pub async fn gated<T, F, Fut>(identity: &Identity, access: Access, fetch: F) -> ApiResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    if let Err(e) = access.check(identity) {
        tracing::debug!("Skipping fetch for {}: {}", identity.user_name, e);
        return Err(e);
    }
    fetch().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn identity(user_type: Option<UserType>, role: &str) -> Identity {
        Identity {
            user_type,
            role: role.to_string(),
            user_name: "tester".to_string(),
            ..Identity::default()
        }
    }

    #[test]
    fn test_user_type_wire_spelling() {
        for kind in UserType::ALL {
            assert_eq!(kind.as_str().parse::<UserType>(), Ok(kind));
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.as_str())
            );
        }
        assert!("notLoggedIn".parse::<UserType>().is_err());
    }

    #[test]
    fn test_role_wire_spelling() {
        assert_eq!("FINANCIAL_DATA".parse::<Role>(), Ok(Role::FinancialData));
        assert!("FIANNCIAL_DATA".parse::<Role>().is_err());
        assert_eq!(
            serde_json::from_str::<Role>("\"ENVIRONMENTAL_DATA\"").unwrap(),
            Role::EnvironmentalData
        );
    }

    #[test]
    fn test_duty_requires_type_and_role() {
        let gate = Access::employee(Role::Asset);
        assert!(gate.permits(&identity(Some(UserType::PanchayatEmployee), "ASSET")));
        assert!(!gate.permits(&identity(Some(UserType::PanchayatEmployee), "FAMILY")));
        assert!(!gate.permits(&identity(Some(UserType::GovernmentAgency), "ASSET")));
        assert!(!gate.permits(&identity(None, "ASSET")));
    }

    #[test]
    fn test_misspelled_role_grants_nothing() {
        let finance = identity(Some(UserType::PanchayatEmployee), "FIANNCIAL_DATA");
        assert!(!Access::employee(Role::FinancialData).permits(&finance));
        // The raw spelling is preserved, not corrected
        assert_eq!(finance.role, "FIANNCIAL_DATA");
    }

    #[test]
    fn test_anyone_permits_logged_out() {
        assert!(Access::Anyone.permits(&Identity::default()));
    }

    #[tokio::test]
    async fn test_gated_skips_fetch_on_mismatch() {
        let calls = Cell::new(0);
        let citizen = identity(Some(UserType::Citizen), "");

        let result: ApiResult<Vec<u32>> = gated(&citizen, Access::Kind(UserType::Admin), || async {
            calls.set(calls.get() + 1);
            Ok(vec![1, 2, 3])
        })
        .await;

        assert_eq!(calls.get(), 0);
        let err = result.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(
            err.user_message(),
            "You are not authorized to access this panel."
        );
    }

    #[tokio::test]
    async fn test_gated_runs_fetch_when_permitted() {
        let admin = identity(Some(UserType::Admin), "");
        let result = gated(&admin, Access::Kind(UserType::Admin), || async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
