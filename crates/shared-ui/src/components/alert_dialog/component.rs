use dioxus::prelude::*;

/// Modal confirmation dialog.
///
/// Renders nothing while `open` is false. When open, the root draws a
/// dimmed overlay and centers its children; compose Content, Title,
/// Description, and Actions inside it.
#[component]
pub fn AlertDialogRoot(open: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if open {
            div { class: "alert-dialog-overlay",
                {children}
            }
        }
    }
}

/// The dialog panel itself.
#[component]
pub fn AlertDialogContent(children: Element) -> Element {
    rsx! {
        div { class: "alert-dialog-content", role: "alertdialog",
            {children}
        }
    }
}

/// Dialog heading.
#[component]
pub fn AlertDialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "alert-dialog-title", {children} }
    }
}

/// Supporting text under the title.
#[component]
pub fn AlertDialogDescription(children: Element) -> Element {
    rsx! {
        p { class: "alert-dialog-description", {children} }
    }
}

/// Button row at the bottom of the dialog.
#[component]
pub fn AlertDialogActions(children: Element) -> Element {
    rsx! {
        div { class: "alert-dialog-actions", {children} }
    }
}

/// Dismiss button. The caller decides what closing means.
#[component]
pub fn AlertDialogCancel(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "alert-dialog-cancel",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Confirm button for the dialog's destructive action.
#[component]
pub fn AlertDialogAction(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "alert-dialog-action",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
