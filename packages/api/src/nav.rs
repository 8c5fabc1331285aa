//! # Role-gated navigation model
//!
//! [`sections`] turns the session identity into the ordered list of menu
//! entries the navbar renders. Each [`Section`] also knows its route path and
//! the [`Access`] its view checks, so the menu and the views cannot disagree.
//!
//! | Identity | Entries |
//! |---|---|
//! | logged out | Sign Up, Sign In |
//! | citizen | Assets, Family, Documents, Finances, Welfare Schemes, Issues, Infrastructure, Profile |
//! | employee | the one entry for the held role, then Profile |
//! | admin | Workspace |
//! | agency | the workspace for the held role, then Profile |
//!
//! Every logged-in identity also gets Logout at the end. An unrecognised role
//! spelling contributes no role entry.

use crate::roles::{Access, Role, UserType};
use crate::session::Identity;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    SignUp,
    SignIn,
    CitizenAssets,
    CitizenFamily,
    CitizenDocuments,
    CitizenFinances,
    CitizenWelfare,
    CitizenIssues,
    CitizenInfrastructure,
    CitizenProfile,
    Employee(Role),
    EmployeeProfile,
    Admin,
    Agency(Role),
    AgencyProfile,
    Logout,
}

impl Section {
    pub const CITIZEN: [Section; 8] = [
        Section::CitizenAssets,
        Section::CitizenFamily,
        Section::CitizenDocuments,
        Section::CitizenFinances,
        Section::CitizenWelfare,
        Section::CitizenIssues,
        Section::CitizenInfrastructure,
        Section::CitizenProfile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Section::Home | Section::Logout => "/",
            Section::SignUp => "/signup",
            Section::SignIn => "/signin",
            Section::CitizenAssets => "/citizen/assets",
            Section::CitizenFamily => "/citizen/family",
            Section::CitizenDocuments => "/citizen/documents",
            Section::CitizenFinances => "/citizen/finances",
            Section::CitizenWelfare => "/citizen/welfare",
            Section::CitizenIssues => "/citizen/issues",
            Section::CitizenInfrastructure => "/citizen/infrastructure",
            Section::CitizenProfile => "/citizen/profile",
            Section::Employee(role) => match role {
                Role::Asset => "/employee/assets",
                Role::Family => "/employee/family",
                Role::Issues => "/employee/issues",
                Role::Document => "/employee/documents",
                Role::FinancialData => "/employee/finances",
                Role::WelfareScheme => "/employee/welfare-scheme",
                Role::Infrastructure => "/employee/infrastructure",
                Role::EnvironmentalData => "/employee/environment",
            },
            Section::EmployeeProfile => "/employee/profile",
            Section::Admin => "/admin",
            Section::Agency(Role::Infrastructure) => "/govt_infra",
            Section::Agency(_) => "/govt_welf",
            Section::AgencyProfile => "/govt/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::SignUp => "Sign Up",
            Section::SignIn => "Sign In",
            Section::CitizenAssets => "Assets",
            Section::CitizenFamily => "Family",
            Section::CitizenDocuments => "Documents",
            Section::CitizenFinances => "Finances",
            Section::CitizenWelfare => "Welfare Schemes",
            Section::CitizenIssues => "Issues",
            Section::CitizenInfrastructure => "Infrastructure",
            Section::CitizenProfile | Section::EmployeeProfile | Section::AgencyProfile => {
                "Profile"
            }
            Section::Employee(role) => match role {
                Role::Asset => "Assets",
                Role::Family => "Family",
                Role::Issues => "Issues",
                Role::Document => "Documents",
                Role::FinancialData => "Finances",
                Role::WelfareScheme => "Welfare Schemes",
                Role::Infrastructure => "Infrastructure",
                Role::EnvironmentalData => "Environmental Data",
            },
            Section::Admin | Section::Agency(_) => "Workspace",
            Section::Logout => "Logout",
        }
    }

    /// What the section's view requires of the session.
    pub fn access(self) -> Access {
        match self {
            Section::Home | Section::SignUp | Section::SignIn | Section::Logout => Access::Anyone,
            Section::CitizenAssets
            | Section::CitizenFamily
            | Section::CitizenDocuments
            | Section::CitizenFinances
            | Section::CitizenWelfare
            | Section::CitizenIssues
            | Section::CitizenInfrastructure
            | Section::CitizenProfile => Access::Kind(UserType::Citizen),
            Section::Employee(role) => Access::employee(role),
            Section::EmployeeProfile => Access::Kind(UserType::PanchayatEmployee),
            Section::Admin => Access::Kind(UserType::Admin),
            Section::Agency(role) => Access::agency(role),
            Section::AgencyProfile => Access::Kind(UserType::GovernmentAgency),
        }
    }
}

/// Menu entries for an identity, in display order.
pub fn sections(identity: &Identity) -> Vec<Section> {
    let Some(user_type) = identity.user_type else {
        return vec![Section::SignUp, Section::SignIn];
    };

    let role = identity.role().filter(|r| user_type.roles().contains(r));
    let mut entries = match user_type {
        UserType::Citizen => Section::CITIZEN.to_vec(),
        UserType::PanchayatEmployee => role
            .map(Section::Employee)
            .into_iter()
            .chain([Section::EmployeeProfile])
            .collect(),
        UserType::Admin => vec![Section::Admin],
        UserType::GovernmentAgency => role
            .map(Section::Agency)
            .into_iter()
            .chain([Section::AgencyProfile])
            .collect(),
    };
    entries.push(Section::Logout);

    debug_assert!(entries.iter().all(|s| s.access().permits(identity)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_type: Option<UserType>, role: &str) -> Identity {
        Identity {
            user_type,
            role: role.to_string(),
            ..Identity::default()
        }
    }

    #[test]
    fn test_logged_out() {
        assert_eq!(
            sections(&Identity::default()),
            vec![Section::SignUp, Section::SignIn]
        );
    }

    #[test]
    fn test_citizen_sees_all_citizen_sections() {
        let entries = sections(&identity(Some(UserType::Citizen), ""));
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[..8], Section::CITIZEN);
        assert_eq!(entries.last(), Some(&Section::Logout));
    }

    #[test]
    fn test_employee_sees_only_held_role() {
        let entries = sections(&identity(Some(UserType::PanchayatEmployee), "DOCUMENT"));
        assert_eq!(
            entries,
            vec![
                Section::Employee(Role::Document),
                Section::EmployeeProfile,
                Section::Logout
            ]
        );
        assert_eq!(entries[0].path(), "/employee/documents");
    }

    #[test]
    fn test_misspelled_role_contributes_nothing() {
        let entries = sections(&identity(Some(UserType::PanchayatEmployee), "FIANNCIAL_DATA"));
        assert_eq!(entries, vec![Section::EmployeeProfile, Section::Logout]);
    }

    #[test]
    fn test_agency_workspace_by_role() {
        let welfare = sections(&identity(Some(UserType::GovernmentAgency), "WELFARE_SCHEME"));
        assert_eq!(welfare[0].path(), "/govt_welf");
        let infra = sections(&identity(Some(UserType::GovernmentAgency), "INFRASTRUCTURE"));
        assert_eq!(infra[0].path(), "/govt_infra");
        // An employee-only role gives an agency no workspace
        let odd = sections(&identity(Some(UserType::GovernmentAgency), "ASSET"));
        assert_eq!(odd, vec![Section::AgencyProfile, Section::Logout]);
    }

    #[test]
    fn test_admin() {
        assert_eq!(
            sections(&identity(Some(UserType::Admin), "")),
            vec![Section::Admin, Section::Logout]
        );
    }

    #[test]
    fn test_every_entry_passes_its_own_gate() {
        for kind in UserType::ALL {
            for role in Role::EMPLOYEE {
                let who = identity(Some(kind), role.as_str());
                for section in sections(&who) {
                    assert!(section.access().permits(&who), "{section:?} for {kind}/{role}");
                }
            }
        }
    }
}
