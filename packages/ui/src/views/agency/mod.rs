//! Government agency workspaces: one for welfare schemes, one for
//! infrastructure projects, plus the profile.

mod infrastructure;
mod profile;
mod welfare;

pub use infrastructure::AgencyInfrastructure;
pub use profile::AgencyProfileView;
pub use welfare::AgencyWelfare;
