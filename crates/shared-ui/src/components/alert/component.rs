use dioxus::prelude::*;

/// Tone of an [`Alert`] banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertKind {
    #[default]
    Success,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }
}

/// Inline banner for operation feedback, success or failure.
#[component]
pub fn Alert(#[props(default)] kind: AlertKind, children: Element) -> Element {
    let tone = kind.class();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert {tone}",
            {children}
        }
    }
}
