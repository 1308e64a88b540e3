use api_client::ApiClient;
use dioxus::prelude::*;
use shared_ui::{Alert, AlertKind, Button, Card, CardContent, Form, Input};

use crate::auth::use_auth;
use crate::routes::Route;

/// Sign-in page. Anonymous visitors land here; an authenticated visitor
/// is sent straight back to the dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_context::<ApiClient>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Home {});
        return rsx! {};
    }

    let handle_login = move |_: FormEvent| {
        if username.read().is_empty() || password.read().is_empty() {
            error_msg.set(Some("Please enter both username and password".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);

        let api = api.clone();
        let mut auth = auth.clone();
        let user = username.read().clone();
        let pass = password.read().clone();
        spawn(async move {
            match api.login(&user, &pass).await {
                Ok(session) => {
                    auth.set_user(session);
                    navigator().push(Route::Home {});
                }
                Err(err) => {
                    error_msg.set(Some(err.user_message("Login failed")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card {
                CardContent {
                    div { class: "login-header",
                        h1 { "Employer Dashboard" }
                        p { "Sign in to your account" }
                    }

                    if let Some(err) = error_msg() {
                        Alert { kind: AlertKind::Error, "{err}" }
                    }

                    Form { onsubmit: handle_login,
                        Input {
                            label: "Username",
                            id: "username",
                            placeholder: "Enter your username",
                            value: username(),
                            on_input: move |evt: FormEvent| {
                                username.set(evt.value());
                                error_msg.set(None);
                            },
                        }
                        Input {
                            label: "Password",
                            id: "password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |evt: FormEvent| {
                                password.set(evt.value());
                                error_msg.set(None);
                            },
                        }
                        Button {
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }

                    div { class: "login-info",
                        h3 { "Demo Accounts" }
                        div { class: "demo-accounts",
                            div {
                                strong { "Admin:" }
                                " username: admin, password: admin123"
                            }
                            div {
                                strong { "Employee:" }
                                " Create employee account after admin login"
                            }
                        }
                    }
                }
            }
        }
    }
}
