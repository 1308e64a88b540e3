use dioxus::prelude::*;

/// Vertical list of label/value rows for a record view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// One label/value row inside a [`DetailList`].
///
/// Pass plain text through `value`, or children when the value needs
/// markup such as a badge.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}
