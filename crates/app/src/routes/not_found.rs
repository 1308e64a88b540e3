use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for unknown paths. There is no 404 page; anything
/// unrecognized lands back on the dashboard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!("unknown path {path}, returning to dashboard");

    navigator().replace(Route::Home {});

    rsx! {}
}
