use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::DashboardStats;
use shared_ui::{
    Button, ButtonVariant, Card, CardDescription, CardFooter, CardHeader, CardTitle, LoadingState,
    PageHeader, PageSubtitle, PageTitle, StatCard,
};

use crate::format_helpers::format_currency_whole;
use crate::routes::Route;

/// Dashboard landing page with roster-wide aggregates.
#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();

    // Stats are derived client-side from the full roster; a failed fetch
    // leaves the zeroed defaults in place rather than surfacing an error.
    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            match api.list_employees().await {
                Ok(employees) => DashboardStats::from_employees(&employees),
                Err(err) => {
                    tracing::warn!("dashboard stats unavailable: {err}");
                    DashboardStats::default()
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            PageHeader {
                PageTitle { "Dashboard Overview" }
                PageSubtitle { "Welcome to your employer dashboard" }
            }

            {match &*stats.read() {
                Some(data) => rsx! {
                    div { class: "stats-grid",
                        StatCard {
                            label: "Total Employees",
                            value: data.total_employees.to_string(),
                        }
                        StatCard {
                            label: "Total Payroll",
                            value: format_currency_whole(data.total_salary),
                        }
                        StatCard {
                            label: "Departments",
                            value: data.departments.to_string(),
                        }
                        StatCard {
                            label: "Average Salary",
                            value: format_currency_whole(data.average_salary),
                        }
                    }
                },
                None => rsx! {
                    LoadingState { message: "Loading dashboard..." }
                },
            }}

            Card {
                CardHeader {
                    CardTitle { "Quick Actions" }
                    CardDescription {
                        "Manage your workforce efficiently with our comprehensive employee management system."
                    }
                }
                CardFooter {
                    Button {
                        button_type: "button",
                        onclick: move |_| {
                            navigator().push(Route::Employees {});
                        },
                        "Manage Employees"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        button_type: "button",
                        onclick: move |_| {
                            navigator().push(Route::About {});
                        },
                        "Learn More"
                    }
                }
            }
        }
    }
}
