use std::collections::HashMap;

use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{EmployeeDraft, ALL_DEPARTMENTS};
use shared_ui::{
    Alert, AlertKind, Button, ButtonVariant, Form, FormActions, FormRow, FormSelect, Input,
};

#[derive(Props, Clone, PartialEq)]
pub struct EmployeeFormProps {
    /// Collect a username and password and submit them with the record,
    /// so the new employee arrives with a login attached.
    #[props(default = false)]
    pub with_credentials: bool,
    /// Invoked after a record has been created.
    #[props(default)]
    pub on_created: Option<EventHandler<()>>,
    /// When present the secondary action reads "Cancel" and invokes
    /// this; otherwise it clears the draft in place.
    #[props(default)]
    pub on_cancel: Option<EventHandler<()>>,
}

/// Employee creation form.
///
/// Validation runs all fields at once on submit; a field's error clears
/// as soon as it is edited again. The outcome banner stays up until the
/// next submission replaces it.
#[component]
pub fn EmployeeForm(props: EmployeeFormProps) -> Element {
    let api = use_context::<ApiClient>();
    let mut draft = use_signal(EmployeeDraft::default);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut message = use_signal(|| Option::<(AlertKind, String)>::None);
    let mut submitting = use_signal(|| false);

    let with_credentials = props.with_credentials;
    let on_created = props.on_created;

    let handle_submit = move |_: FormEvent| {
        let current = draft.read().clone();
        let validation = current.validate(with_credentials);
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        submitting.set(true);

        let api = api.clone();
        let request = current.to_request(with_credentials);
        spawn(async move {
            match api.create_employee(&request).await {
                Ok(created) => {
                    message.set(Some((
                        AlertKind::Success,
                        format!("Employee added successfully! ID: #{}", created.id),
                    )));
                    draft.set(EmployeeDraft::default());
                    if let Some(handler) = on_created {
                        handler.call(());
                    }
                }
                Err(err) => {
                    message.set(Some((
                        AlertKind::Error,
                        err.user_message("Failed to add employee"),
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let fields = draft.read().clone();
    let field_errors = errors.read().clone();

    rsx! {
        if let Some((kind, text)) = message() {
            Alert { kind, "{text}" }
        }

        Form { onsubmit: handle_submit,
            FormRow {
                Input {
                    label: "Full Name *",
                    id: "name",
                    placeholder: "Enter full name",
                    value: fields.name.clone(),
                    error: field_errors.get("name").cloned().unwrap_or_default(),
                    on_input: move |evt: FormEvent| {
                        draft.write().name = evt.value();
                        errors.write().remove("name");
                    },
                }
                Input {
                    label: "Email Address *",
                    id: "email",
                    input_type: "email",
                    placeholder: "Enter email address",
                    value: fields.email.clone(),
                    error: field_errors.get("email").cloned().unwrap_or_default(),
                    on_input: move |evt: FormEvent| {
                        draft.write().email = evt.value();
                        errors.write().remove("email");
                    },
                }
            }
            FormRow {
                Input {
                    label: "Position *",
                    id: "position",
                    placeholder: "Enter job position",
                    value: fields.position.clone(),
                    error: field_errors.get("position").cloned().unwrap_or_default(),
                    on_input: move |evt: FormEvent| {
                        draft.write().position = evt.value();
                        errors.write().remove("position");
                    },
                }
                FormSelect {
                    label: "Department *",
                    value: fields.department.clone(),
                    error: field_errors.get("department").cloned().unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        draft.write().department = evt.value();
                        errors.write().remove("department");
                    },
                    option { value: "", "Select Department" }
                    for dept in ALL_DEPARTMENTS {
                        option { value: dept.as_str(), {dept.as_str()} }
                    }
                }
            }
            FormRow {
                Input {
                    label: "Annual Salary ($) *",
                    id: "salary",
                    input_type: "number",
                    min: "0",
                    step: "0.01",
                    placeholder: "Enter annual salary",
                    value: fields.salary.clone(),
                    error: field_errors.get("salary").cloned().unwrap_or_default(),
                    on_input: move |evt: FormEvent| {
                        draft.write().salary = evt.value();
                        errors.write().remove("salary");
                    },
                }
                Input {
                    label: "Hire Date *",
                    id: "hire_date",
                    input_type: "date",
                    value: fields.hire_date.clone(),
                    error: field_errors.get("hire_date").cloned().unwrap_or_default(),
                    on_input: move |evt: FormEvent| {
                        draft.write().hire_date = evt.value();
                        errors.write().remove("hire_date");
                    },
                }
            }
            if with_credentials {
                div { class: "form-section",
                    h3 { "Login Credentials" }
                    FormRow {
                        Input {
                            label: "Username *",
                            id: "username",
                            placeholder: "Enter username for employee",
                            value: fields.username.clone(),
                            error: field_errors.get("username").cloned().unwrap_or_default(),
                            on_input: move |evt: FormEvent| {
                                draft.write().username = evt.value();
                                errors.write().remove("username");
                            },
                        }
                        Input {
                            label: "Password *",
                            id: "password",
                            input_type: "password",
                            placeholder: "Enter password for employee",
                            value: fields.password.clone(),
                            error: field_errors.get("password").cloned().unwrap_or_default(),
                            on_input: move |evt: FormEvent| {
                                draft.write().password = evt.value();
                                errors.write().remove("password");
                            },
                        }
                    }
                }
            }
            FormActions {
                Button {
                    disabled: submitting(),
                    if submitting() { "Adding Employee..." } else { "Add Employee" }
                }
                {match props.on_cancel {
                    Some(handler) => rsx! {
                        Button {
                            variant: ButtonVariant::Secondary,
                            button_type: "button",
                            onclick: move |_| handler.call(()),
                            "Cancel"
                        }
                    },
                    None => rsx! {
                        Button {
                            variant: ButtonVariant::Secondary,
                            button_type: "button",
                            onclick: move |_| {
                                draft.set(EmployeeDraft::default());
                                errors.set(HashMap::new());
                                message.set(None);
                            },
                            "Clear Form"
                        }
                    },
                }}
            }
        }
    }
}
