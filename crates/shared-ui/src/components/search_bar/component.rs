use dioxus::prelude::*;

/// Filter block above a collection, holding the search input and any
/// companions such as a result summary.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}

/// Result summary line under the search input, e.g. match counts and
/// a clear control.
#[component]
pub fn SearchMeta(children: Element) -> Element {
    rsx! {
        div { class: "search-meta",
            {children}
        }
    }
}
