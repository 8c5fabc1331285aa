//! Screens for logged-in citizens. Every one requires user type `CITIZEN` and
//! shows only the caller's own records; the backend derives the citizen from
//! the token.

mod assets;
mod documents;
mod family;
mod finances;
mod infrastructure;
mod issues;
mod profile;
mod welfare;

pub use assets::CitizenAssets;
pub use documents::CitizenDocuments;
pub use family::CitizenFamily;
pub use finances::CitizenFinances;
pub(crate) use finances::FinanceTable;
pub use infrastructure::CitizenInfrastructure;
pub use issues::CitizenIssues;
pub use profile::CitizenProfileView;
pub use welfare::CitizenWelfare;

use api::{Access, UserType};

const CITIZEN: Access = Access::Kind(UserType::Citizen);
