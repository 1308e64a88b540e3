use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Employee, UpdateProfileRequest};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, DetailItem, DetailList, Form, FormActions,
    FormRow, Input, LoadingState, PageHeader, PageSubtitle, PageTitle,
};

use crate::auth::use_auth;
use crate::flash::{use_flash, Flash, FlashBanner};
use crate::format_helpers::{format_currency, format_date_long, format_date_short};

/// Profile page behind both the "my profile" route and the per-employee
/// route the roster links to.
///
/// Administrators have no employee record, so they get a static account
/// panel and no fetch happens regardless of the path.
#[component]
pub fn ProfilePage(id: Option<i64>) -> Element {
    let auth = use_auth();
    let api = use_context::<ApiClient>();
    let mut flash = use_flash();

    let session = auth.current_user.read().clone();
    let is_admin = session
        .as_ref()
        .map(|session| session.is_admin())
        .unwrap_or(false);
    let own_employee_id = session.as_ref().and_then(|session| session.employee_id);
    let target_id = id.or(own_employee_id);
    let is_own_profile = match id {
        None => true,
        Some(requested) => own_employee_id == Some(requested),
    };
    let fetch_needed = !is_admin && target_id.is_some();

    let employee = use_signal(|| Option::<Employee>::None);
    let loading = use_signal(move || fetch_needed);
    let mut editing = use_signal(|| false);
    let mut edit_name = use_signal(String::new);
    let mut edit_email = use_signal(String::new);

    {
        let api = api.clone();
        use_hook(move || {
            if let Some(target) = target_id.filter(|_| fetch_needed) {
                load_profile(api, target, employee, loading, flash);
            }
        });
    }

    let Some(session) = session else {
        // The auth guard is already redirecting; render nothing meanwhile.
        return rsx! {};
    };

    let handle_save = move |_: FormEvent| {
        let Some(target) = target_id else {
            return;
        };
        let request = UpdateProfileRequest {
            name: edit_name.read().clone(),
            email: edit_email.read().clone(),
        };
        let api = api.clone();
        spawn(async move {
            match api.update_profile(target, &request).await {
                Ok(()) => {
                    flash.success("Profile updated successfully!");
                    editing.set(false);
                    load_profile(api.clone(), target, employee, loading, flash);
                }
                Err(err) => flash.error(err.user_message("Failed to update profile")),
            }
        });
    };

    if is_admin {
        let account_created = session
            .created_at
            .as_deref()
            .map(format_date_short)
            .unwrap_or_else(|| "N/A".to_string());
        let last_updated = session
            .updated_at
            .as_deref()
            .map(format_date_short)
            .unwrap_or_else(|| "N/A".to_string());

        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./profile.css") }

            div { class: "profile-page",
                PageHeader {
                    PageTitle { "Administrator Account" }
                    PageSubtitle { "System Administrator Dashboard" }
                }

                Card {
                    CardContent {
                        h2 { class: "profile-name", "{session.username} (Administrator)" }
                        DetailList {
                            DetailItem { label: "Username", value: session.username.clone() }
                            DetailItem { label: "Role",
                                Badge { "Administrator" }
                            }
                            DetailItem { label: "User ID", value: "#{session.id}" }
                            DetailItem { label: "Account Created", value: account_created }
                            DetailItem { label: "Last Updated", value: last_updated }
                        }
                    }
                }
            }
        };
    }

    let body = if loading() {
        rsx! {
            LoadingState { message: "Loading profile..." }
        }
    } else {
        match &*employee.read() {
            Some(record) => {
                let header = if is_own_profile {
                    "My Profile".to_string()
                } else {
                    format!("{}'s Profile", record.name)
                };
                let salary = format_currency(record.salary);
                let hire_date = format_date_long(&record.hire_date);
                let record_name = record.name.clone();
                let record_email = record.email.clone();

                rsx! {
                    PageHeader {
                        PageTitle { "{header}" }
                        PageSubtitle { "Employee ID: #{record.id}" }
                    }

                    FlashBanner { flash }

                    Card {
                        CardContent {
                            if editing() && is_own_profile {
                                Form { onsubmit: handle_save,
                                    h2 { "Edit Profile" }
                                    FormRow {
                                        Input {
                                            label: "Full Name",
                                            id: "name",
                                            placeholder: "Enter full name",
                                            value: edit_name(),
                                            on_input: move |evt: FormEvent| edit_name.set(evt.value()),
                                        }
                                        Input {
                                            label: "Email Address",
                                            id: "email",
                                            input_type: "email",
                                            placeholder: "Enter email address",
                                            value: edit_email(),
                                            on_input: move |evt: FormEvent| edit_email.set(evt.value()),
                                        }
                                    }
                                    FormActions {
                                        Button { "Save Changes" }
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            button_type: "button",
                                            onclick: move |_| editing.set(false),
                                            "Cancel"
                                        }
                                    }
                                }
                            } else {
                                div { class: "profile-header",
                                    h2 { class: "profile-name", "{record.name}" }
                                    if is_own_profile {
                                        Button {
                                            button_type: "button",
                                            onclick: move |_| {
                                                edit_name.set(record_name.clone());
                                                edit_email.set(record_email.clone());
                                                editing.set(true);
                                            },
                                            "Edit Profile"
                                        }
                                    }
                                }
                                DetailList {
                                    DetailItem { label: "Employee ID", value: "#{record.id}" }
                                    DetailItem { label: "Email", value: record.email.clone() }
                                    DetailItem { label: "Position", value: record.position.clone() }
                                    DetailItem { label: "Department", value: record.department.clone() }
                                    DetailItem { label: "Salary", value: salary }
                                    DetailItem { label: "Hire Date", value: hire_date }
                                }
                            }
                        }
                    }
                }
            }
            None => rsx! {
                FlashBanner { flash }
                div { class: "profile-error", "Employee not found" }
            },
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-page", {body} }
    }
}

/// Fetch one employee record into the page signals. A missing record
/// clears the current one so the page falls back to its not-found state;
/// any other failure leaves the record as it was.
fn load_profile(
    api: ApiClient,
    target: i64,
    mut employee: Signal<Option<Employee>>,
    mut loading: Signal<bool>,
    mut flash: Flash,
) {
    spawn(async move {
        loading.set(true);
        match api.fetch_profile(target).await {
            Ok(record) => employee.set(Some(record)),
            Err(err) if err.is_not_found() => {
                flash.error(err.user_message("Employee not found"));
                employee.set(None);
            }
            Err(err) => flash.error(err.user_message("Failed to fetch employee profile")),
        }
        loading.set(false);
    });
}
