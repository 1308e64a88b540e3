use dioxus::prelude::*;

/// Top navigation bar shell. The app supplies the brand, links, and
/// user controls as children of the section components below.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            {children}
        }
    }
}

/// Brand block on the left edge of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Main link group.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        div { class: "navbar-nav", {children} }
    }
}

/// Right-aligned area for the signed-in user and sign-out control.
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "navbar-actions", {children} }
    }
}
