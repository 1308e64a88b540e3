use api_client::ApiClient;
use dioxus::prelude::*;

mod auth;
mod components;
mod flash;
mod format_helpers;
mod routes;
mod storage;

use auth::AuthState;
use routes::Route;

/// Origin of the employee REST API.
pub const API_BASE: &str = "http://localhost:8000";

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(API_BASE));

    // Restore any stored session before the router decides where to land.
    use_context_provider(|| AuthState::restore(storage::session_store()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
