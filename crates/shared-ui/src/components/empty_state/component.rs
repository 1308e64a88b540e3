use dioxus::prelude::*;

/// Placeholder shown when a collection has nothing to display.
///
/// Children render below the title as the explanatory line.
#[component]
pub fn EmptyState(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            h3 { "{title}" }
            {children}
        }
    }
}
