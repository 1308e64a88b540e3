use dioxus::prelude::*;

/// Single dashboard statistic: a large value above its caption.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            h3 { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}
