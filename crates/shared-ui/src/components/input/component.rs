use dioxus::prelude::*;

/// Labeled text input with an optional inline error.
///
/// `min` and `step` only make sense for numeric inputs and are omitted
/// from the markup when left empty, as are `label`, `id`, and `error`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: String,
    #[props(default)] min: String,
    #[props(default)] step: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label {
                    class: "input-label",
                    r#for: if !id.is_empty() { id.clone() },
                    "{label}"
                }
            }
            input {
                class: if error.is_empty() { "input" } else { "input invalid" },
                id: if !id.is_empty() { id.clone() },
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                min: if !min.is_empty() { min.clone() },
                step: if !step.is_empty() { step.clone() },
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
            if !error.is_empty() {
                span { class: "input-error", "{error}" }
            }
        }
    }
}
