pub mod about;
pub mod employees;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;

use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, NavbarNav};

use crate::auth::{use_auth, use_is_admin};

use about::About;
use home::Home;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/employees")]
    Employees {},
    #[route("/add-employee")]
    AddEmployee {},
    #[route("/profile")]
    MyProfile {},
    #[route("/profile/:id")]
    EmployeeProfile { id: i64 },
    #[route("/about")]
    About {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Gate for everything behind the sign-in screen. Anonymous visitors
/// are sent to the login view no matter which path they asked for.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if !auth.is_authenticated() {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Main layout: top navbar plus the routed page below it.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let is_admin = use_is_admin();

    let (username, role) = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| (user.username.clone(), user.role.clone()))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            NavbarBrand {
                Link { to: Route::Home {}, "Employer Dashboard" }
            }
            NavbarNav {
                Link {
                    to: Route::Home {},
                    class: if matches!(route, Route::Home {}) { "active" } else { "" },
                    "Home"
                }
                Link {
                    to: Route::Employees {},
                    class: if matches!(route, Route::Employees {}) { "active" } else { "" },
                    "Employees"
                }
                if is_admin {
                    Link {
                        to: Route::AddEmployee {},
                        class: if matches!(route, Route::AddEmployee {}) { "active" } else { "" },
                        "Add Employee"
                    }
                }
                Link {
                    to: Route::MyProfile {},
                    class: if matches!(route, Route::MyProfile {}) { "active" } else { "" },
                    "Profile"
                }
                Link {
                    to: Route::About {},
                    class: if matches!(route, Route::About {}) { "active" } else { "" },
                    "About"
                }
            }
            NavbarActions {
                span { class: "navbar-user", "{username} ({role})" }
                Button {
                    variant: ButtonVariant::Outline,
                    button_type: "button",
                    onclick: move |_| {
                        auth.clear_auth();
                        navigator().replace(Route::Login {});
                    },
                    "Logout"
                }
            }
        }

        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

// Route components for pages living in nested modules.

#[component]
fn Employees() -> Element {
    employees::list::EmployeesPage()
}

#[component]
fn AddEmployee() -> Element {
    employees::create::AddEmployeePage()
}

#[component]
fn MyProfile() -> Element {
    rsx! { profile::ProfilePage { id: None } }
}

#[component]
fn EmployeeProfile(id: i64) -> Element {
    rsx! { profile::ProfilePage { id: Some(id) } }
}
