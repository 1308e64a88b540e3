use dioxus::prelude::*;

/// Surface container for a section of page content.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "card",
            {children}
        }
    }
}

/// Header section of a [`Card`].
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header",
            {children}
        }
    }
}

/// Title element within a [`CardHeader`].
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a [`CardHeader`].
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a [`Card`].
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content",
            {children}
        }
    }
}

/// Footer section of a [`Card`], typically for action buttons.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer",
            {children}
        }
    }
}
