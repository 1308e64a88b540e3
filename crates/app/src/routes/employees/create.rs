use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader, PageSubtitle, PageTitle};

use crate::auth::use_is_admin;
use crate::components::employee_form::EmployeeForm;
use crate::flash::delay;
use crate::routes::Route;

/// How long the success banner stays up before returning to the roster.
const ROSTER_REDIRECT_MS: u32 = 2_000;

/// Admin-only page creating an employee record plus its login account.
#[component]
pub fn AddEmployeePage() -> Element {
    let is_admin = use_is_admin();

    // Creation is an admin surface; everyone else gets the unknown-path
    // treatment and lands back on the dashboard.
    if !is_admin {
        navigator().replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./create.css") }

        div { class: "create-page",
            PageHeader {
                PageTitle { "Add New Employee" }
                PageSubtitle { "Create a new employee record and user account" }
            }

            Card {
                CardContent {
                    EmployeeForm {
                        with_credentials: true,
                        on_created: move |_| {
                            spawn(async move {
                                delay(ROSTER_REDIRECT_MS).await;
                                navigator().push(Route::Employees {});
                            });
                        },
                        on_cancel: move |_| {
                            navigator().push(Route::Employees {});
                        },
                    }
                }
            }
        }
    }
}
