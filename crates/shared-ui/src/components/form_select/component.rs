use dioxus::prelude::*;

/// A native select styled to sit alongside [`Input`](super::super::input::Input).
///
/// Children should be `option { value: "...", "Label" }` elements. An
/// optional inline error renders below the control, matching the way
/// input fields report validation failures.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default)] label: String,
    #[props(default)] error: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: if error.is_empty() { "form-select" } else { "form-select invalid" },
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if !error.is_empty() {
                span { class: "form-select-error", "{error}" }
            }
        }
    }
}
