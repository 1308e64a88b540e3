use dioxus::prelude::*;

/// Centered loading indicator with a caption.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-state",
            div { class: "loading-spinner" }
            p { "{message}" }
        }
    }
}
