use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Solid accent badge, used for role labels.
    #[default]
    Primary,
    /// Quiet gray badge, used for informational tags.
    Muted,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Muted => "muted",
        }
    }
}

/// Small inline label for roles and statuses.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    let style = variant.class();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-style": style,
            {children}
        }
    }
}
