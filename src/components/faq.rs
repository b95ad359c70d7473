//! FAQ accordion. Each item opens and closes on its own.

use dioxus::prelude::*;
use landing_core::content::{FaqEntry, FAQ};
use landing_core::Disclosure;

#[component]
pub fn FaqSection() -> Element {
    rsx! {
        section { id: "faq", class: "section section-muted",
            div { class: "container narrow",
                h2 { class: "section-title center",
                    "Dúvidas "
                    span { class: "text-gradient", "Frequentes" }
                }
                div { class: "faq-list",
                    for entry in FAQ {
                        FaqItem { entry }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FaqItem(entry: FaqEntry) -> Element {
    let mut state = use_signal(Disclosure::default);
    let open = state.read().is_open();
    let chevron = state.read().chevron();

    rsx! {
        div { class: "faq-item",
            button {
                class: if open { "faq-question open" } else { "faq-question" },
                "aria-expanded": if open { "true" } else { "false" },
                onclick: move |_| state.write().toggle(),
                span { "{entry.question}" }
                span { class: "faq-chevron", "{chevron}" }
            }
            if open {
                div { class: "faq-answer", "{entry.answer}" }
            }
        }
    }
}
