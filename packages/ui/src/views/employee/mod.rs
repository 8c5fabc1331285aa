//! Screens for panchayat employees. Each requires the employee user type and
//! the one role that manages its records; the profile needs only the type.

mod assets;
mod documents;
mod environment;
mod family;
mod finances;
mod infrastructure;
mod issues;
mod profile;
mod welfare;

pub use assets::EmployeeAssets;
pub use documents::EmployeeDocuments;
pub use environment::EmployeeEnvironment;
pub use family::EmployeeFamily;
pub use finances::EmployeeFinances;
pub use infrastructure::EmployeeInfrastructure;
pub use issues::EmployeeIssues;
pub use profile::EmployeeProfileView;
pub use welfare::EmployeeWelfare;
