use dioxus::prelude::*;

/// Form wrapper that suppresses native submission before invoking the
/// handler, so the page stays put and the handler drives the request.
#[component]
pub fn Form(#[props(default)] onsubmit: EventHandler<FormEvent>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "form",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}

/// Two-column row inside a [`Form`]. Collapses to a single column on
/// narrow screens via the stylesheet.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row",
            {children}
        }
    }
}

/// Button row at the end of a [`Form`].
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions",
            {children}
        }
    }
}
