use dioxus::prelude::*;

use ui::views::agency::{AgencyInfrastructure, AgencyProfileView, AgencyWelfare};
use ui::views::citizen::{
    CitizenAssets, CitizenDocuments, CitizenFamily, CitizenFinances, CitizenInfrastructure,
    CitizenIssues, CitizenProfileView, CitizenWelfare,
};
use ui::views::employee::{
    EmployeeAssets, EmployeeDocuments, EmployeeEnvironment, EmployeeFamily, EmployeeFinances,
    EmployeeInfrastructure, EmployeeIssues, EmployeeProfileView, EmployeeWelfare,
};
use ui::views::{AdminDashboard, Home, Login, NotFound, Register};
use ui::{AuthProvider, Navbar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/signup")]
        Register {},
        #[route("/signin")]
        Login {},

        #[route("/citizen/assets")]
        CitizenAssets {},
        #[route("/citizen/family")]
        CitizenFamily {},
        #[route("/citizen/documents")]
        CitizenDocuments {},
        #[route("/citizen/finances")]
        CitizenFinances {},
        #[route("/citizen/welfare")]
        CitizenWelfare {},
        #[route("/citizen/issues")]
        CitizenIssues {},
        #[route("/citizen/infrastructure")]
        CitizenInfrastructure {},
        #[route("/citizen/profile")]
        CitizenProfileView {},

        #[route("/employee/assets")]
        EmployeeAssets {},
        #[route("/employee/family")]
        EmployeeFamily {},
        #[route("/employee/issues")]
        EmployeeIssues {},
        #[route("/employee/documents")]
        EmployeeDocuments {},
        #[route("/employee/finances")]
        EmployeeFinances {},
        #[route("/employee/welfare-scheme")]
        EmployeeWelfare {},
        #[route("/employee/infrastructure")]
        EmployeeInfrastructure {},
        #[route("/employee/environment")]
        EmployeeEnvironment {},
        #[route("/employee/profile")]
        EmployeeProfileView {},

        #[route("/admin")]
        AdminDashboard {},

        #[route("/govt_welf")]
        AgencyWelfare {},
        #[route("/govt_infra")]
        AgencyInfrastructure {},
        #[route("/govt/profile")]
        AgencyProfileView {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The launcher's logger is only installed once the app is running.
    use_hook(|| tracing::info!("Starting panchayat portal"));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar above whichever screen the route selects.
#[component]
fn AppShell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "app-shell",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{sections, Identity, Role, Section, UserType};

    use super::*;

    fn identity(user_type: UserType, role: &str) -> Identity {
        Identity {
            user_type: Some(user_type),
            role: role.to_string(),
            user_name: "someone".to_string(),
            ..Identity::default()
        }
    }

    /// Every menu entry must land on a real screen, never the 404 page.
    #[test]
    fn test_every_section_path_routes() {
        let mut who = vec![Identity::default()];
        for role in Role::EMPLOYEE {
            who.push(identity(UserType::PanchayatEmployee, role.as_str()));
        }
        for role in Role::AGENCY {
            who.push(identity(UserType::GovernmentAgency, role.as_str()));
        }
        who.push(identity(UserType::Citizen, ""));
        who.push(identity(UserType::Admin, ""));

        for identity in &who {
            for section in sections(identity) {
                let route: Route = section
                    .path()
                    .parse()
                    .unwrap_or_else(|_| panic!("{section:?} has no route"));
                assert!(
                    !matches!(route, Route::NotFound { .. }),
                    "{section:?} routes to the 404 page"
                );
            }
        }
        assert_eq!(
            "/nowhere".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["nowhere".to_string()]
            })
        );
        assert_eq!(Section::Home.path().parse::<Route>().ok(), Some(Route::Home {}));
    }
}
