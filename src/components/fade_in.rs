//! Fade-in reveal for hero blocks.

use std::time::Duration;

use dioxus::prelude::*;

/// Fades and lifts its children into view after `delay_ms`.
#[component]
pub fn FadeIn(#[props(default = 0)] delay_ms: u64, children: Element) -> Element {
    let mut visible = use_signal(|| false);

    // One-shot timer; the task is dropped with the component
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            visible.set(true);
        });
    });

    rsx! {
        div { class: if visible() { "fade-in visible" } else { "fade-in" },
            {children}
        }
    }
}
