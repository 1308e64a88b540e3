use api_client::{ApiClient, ClientError, CONNECTION_ERROR};
use dioxus::prelude::*;
use shared_types::{filter_employees, Employee};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, Input, LoadingState, PageHeader, PageSubtitle,
    PageTitle, SearchBar, SearchMeta,
};

use crate::auth::use_is_admin;
use crate::flash::{use_flash, Flash, FlashBanner};
use crate::format_helpers::{format_currency, format_date_short};
use crate::routes::Route;

/// Roster page: searchable employee table with admin-only deletion.
#[component]
pub fn EmployeesPage() -> Element {
    let api = use_context::<ApiClient>();
    let is_admin = use_is_admin();
    let mut flash = use_flash();

    let employees = use_signal(Vec::<Employee>::new);
    let loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut pending_delete = use_signal(|| Option::<Employee>::None);

    {
        let api = api.clone();
        use_hook(move || load_roster(api, employees, loading, flash));
    }

    let confirm_delete = move |_: MouseEvent| {
        let Some(target) = pending_delete.read().clone() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_employee(target.id).await {
                Ok(()) => {
                    flash.success("Employee deleted successfully!");
                    load_roster(api.clone(), employees, loading, flash);
                }
                Err(err) => flash.error(err.user_message("Failed to delete employee")),
            }
            pending_delete.set(None);
        });
    };

    let all = employees.read();
    let term = search_term.read();
    let filtered = filter_employees(&all, &term);
    let shown = filtered.len();
    let total = all.len();

    let confirm_text = pending_delete
        .read()
        .as_ref()
        .map(|employee| format!("Are you sure you want to delete {}?", employee.name))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./list.css") }

        div { class: "employees-page",
            PageHeader {
                PageTitle { "Employee Management" }
                PageSubtitle { "View and manage employee records" }
            }

            Card {
                CardContent {
                    FlashBanner { flash }

                    SearchBar {
                        Input {
                            placeholder: "Search employees by ID, name, email, position, or department...",
                            value: search_term(),
                            on_input: move |evt: FormEvent| search_term.set(evt.value()),
                        }
                        if !search_term.read().is_empty() {
                            SearchMeta {
                                span { "Showing {shown} of {total} employees" }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    button_type: "button",
                                    onclick: move |_| search_term.set(String::new()),
                                    "Clear"
                                }
                            }
                        }
                    }

                    if loading() {
                        LoadingState { message: "Loading employees..." }
                    } else if filtered.is_empty() {
                        EmptyState { title: "No employees found",
                            if search_term.read().is_empty() {
                                p { "No employees have been added yet." }
                            } else {
                                p { "No employees match your search: \"{search_term}\"" }
                            }
                        }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "ID" }
                                DataTableColumn { "Name" }
                                DataTableColumn { "Email" }
                                DataTableColumn { "Position" }
                                DataTableColumn { "Department" }
                                DataTableColumn { "Salary" }
                                DataTableColumn { "Hire Date" }
                                DataTableColumn { "Actions" }
                            }
                            DataTableBody {
                                for employee in filtered {
                                    EmployeeRow {
                                        employee,
                                        is_admin,
                                        on_delete: move |employee| pending_delete.set(Some(employee)),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            AlertDialogRoot { open: pending_delete.read().is_some(),
                AlertDialogContent {
                    AlertDialogTitle { "Delete Employee" }
                    AlertDialogDescription { "{confirm_text}" }
                    AlertDialogActions {
                        AlertDialogCancel {
                            onclick: move |_| pending_delete.set(None),
                            "Cancel"
                        }
                        AlertDialogAction { onclick: confirm_delete, "Delete" }
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(employee: Employee, is_admin: bool, on_delete: EventHandler<Employee>) -> Element {
    let salary = format_currency(employee.salary);
    let hire_date = format_date_short(&employee.hire_date);
    let employee_for_delete = employee.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "#{employee.id}" }
            DataTableCell {
                Link {
                    to: Route::EmployeeProfile { id: employee.id },
                    class: "employee-name-link",
                    "{employee.name}"
                }
            }
            DataTableCell { "{employee.email}" }
            DataTableCell { "{employee.position}" }
            DataTableCell { "{employee.department}" }
            DataTableCell { "{salary}" }
            DataTableCell { "{hire_date}" }
            DataTableCell {
                if is_admin {
                    Button {
                        variant: ButtonVariant::Destructive,
                        button_type: "button",
                        onclick: move |_| on_delete.call(employee_for_delete.clone()),
                        "Delete"
                    }
                } else {
                    Badge { variant: BadgeVariant::Muted, "Read Only" }
                }
            }
        }
    }
}

/// Fetch the roster into the signals. Failures leave whatever rows were
/// already on screen in place and surface a flash instead.
fn load_roster(
    api: ApiClient,
    mut employees: Signal<Vec<Employee>>,
    mut loading: Signal<bool>,
    mut flash: Flash,
) {
    spawn(async move {
        loading.set(true);
        match api.list_employees().await {
            Ok(roster) => employees.set(roster),
            Err(err) => {
                let text = match &err {
                    ClientError::Http(_) | ClientError::Decode(_) => CONNECTION_ERROR.to_string(),
                    _ => "Failed to fetch employees".to_string(),
                };
                tracing::warn!("roster fetch failed: {err}");
                flash.error(text);
            }
        }
        loading.set(false);
    });
}
