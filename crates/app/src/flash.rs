//! Transient status banners for the roster and profile views.

use dioxus::prelude::*;
use shared_ui::{Alert, AlertKind};

/// How long a flash stays visible before it clears itself.
pub const FLASH_DISMISS_MS: u32 = 5_000;

/// A self-dismissing status message owned by a single view.
///
/// Each `show` bumps a sequence token; the timer only clears the banner
/// if no newer flash has replaced it in the meantime.
#[derive(Clone, Copy, PartialEq)]
pub struct Flash {
    message: Signal<Option<(AlertKind, String)>>,
    seq: Signal<u32>,
}

impl Flash {
    pub fn success(&mut self, text: impl Into<String>) {
        self.show(AlertKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(AlertKind::Error, text.into());
    }

    fn show(&mut self, kind: AlertKind, text: String) {
        let token = self.seq.peek().wrapping_add(1);
        self.seq.set(token);
        self.message.set(Some((kind, text)));

        let seq = self.seq;
        let mut message = self.message;
        spawn(async move {
            delay(FLASH_DISMISS_MS).await;
            if *seq.peek() == token {
                message.set(None);
            }
        });
    }
}

/// Hook giving the calling view its own flash slot.
pub fn use_flash() -> Flash {
    let message = use_signal(|| Option::<(AlertKind, String)>::None);
    let seq = use_signal(|| 0u32);
    Flash { message, seq }
}

/// Renders the current flash, or nothing when the slot is empty.
#[component]
pub fn FlashBanner(flash: Flash) -> Element {
    match flash.message.read().clone() {
        Some((kind, text)) => rsx! {
            Alert { kind, "{text}" }
        },
        None => rsx! {},
    }
}

/// Sleep helper for UI timers. Outside the browser there is no event
/// loop timer to come back on, so the future never resolves; tasks
/// holding it are dropped with their scope.
pub async fn delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ms;
        std::future::pending::<()>().await;
    }
}
