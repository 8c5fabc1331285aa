//! # REST endpoints by audience
//!
//! Each backend prefix gets a small borrowed handle over [`PortalClient`]:
//!
//! | Handle | Prefix |
//! |---|---|
//! | [`CitizenApi`] | `/citizen` |
//! | [`EmployeeApi`] | `/panchayat-employee` |
//! | [`AgencyApi`] | `/government-agency` |
//! | [`AdminApi`] | `/admin` |
//! | [`PublicApi`] | `/user` (census and environment summaries) |
//!
//! List calls return `Vec<T>` whatever envelope the backend wraps them in.
//! Mutations return `()`; views refetch afterwards.

mod admin;
mod agency;
mod citizen;
mod employee;
mod public;

pub use admin::AdminApi;
pub use agency::AgencyApi;
pub use citizen::CitizenApi;
pub use employee::EmployeeApi;
pub use public::PublicApi;

use crate::client::PortalClient;
use crate::transport::Transport;

impl<T: Transport> PortalClient<T> {
    pub fn citizen(&self) -> CitizenApi<'_, T> {
        CitizenApi { client: self }
    }

    pub fn employee(&self) -> EmployeeApi<'_, T> {
        EmployeeApi { client: self }
    }

    pub fn agency(&self) -> AgencyApi<'_, T> {
        AgencyApi { client: self }
    }

    pub fn admin(&self) -> AdminApi<'_, T> {
        AdminApi { client: self }
    }

    pub fn public(&self) -> PublicApi<'_, T> {
        PublicApi { client: self }
    }
}

/// `base` or `base/{segment}` when a citizen filter is given.
pub(crate) fn scoped_path(base: &str, citizen: &str) -> String {
    if citizen.trim().is_empty() {
        base.to_string()
    } else {
        format!("{base}/{}", crate::client::segment(citizen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_path() {
        assert_eq!(
            scoped_path("/panchayat-employee/assets", ""),
            "/panchayat-employee/assets"
        );
        assert_eq!(
            scoped_path("/panchayat-employee/assets", "john doe"),
            "/panchayat-employee/assets/john%20doe"
        );
    }
}
