//! AI agent spotlight with a canned chat preview.

use dioxus::prelude::*;
use landing_core::content::{Icon, AI_BULLETS, AI_CHAT};
use landing_ui::{CheckList, IconGlyph, Input};

#[component]
pub fn AiSpotlight() -> Element {
    rsx! {
        section { class: "section section-muted",
            div { class: "container split",
                div {
                    span { class: "eyebrow", "Diferencial Premium" }
                    h2 { class: "section-title",
                        "Seu SaaS já nasce com "
                        br {}
                        span { class: "text-gradient", "Inteligência Artificial" }
                    }
                    p { class: "section-lead left",
                        "Esqueça apenas números frios. Com o agente de IA integrado ao FinanSaaS, seus clientes recebem insights automáticos sobre a saúde do negócio. É o diferencial tecnológico que permite cobrar tickets mais altos."
                    }
                    CheckList { items: AI_BULLETS.iter().map(|s| s.to_string()).collect::<Vec<_>>() }
                }

                div { class: "chat-card",
                    div { class: "chat-header",
                        div { class: "chat-agent",
                            div { class: "chat-avatar",
                                IconGlyph { icon: Icon::Bot }
                            }
                            div {
                                p { class: "chat-name", "Agente FinanSaaS" }
                                p { class: "chat-status", "Online agora" }
                            }
                        }
                        IconGlyph { icon: Icon::Sparkles, class: "accent".to_string() }
                    }
                    div { class: "chat-log",
                        for message in AI_CHAT {
                            div {
                                class: if message.from_user { "chat-bubble user" } else { "chat-bubble agent" },
                                "{message.text}"
                            }
                        }
                    }
                    div { class: "chat-compose",
                        Input {
                            value: String::new(),
                            oninput: move |_| {},
                            placeholder: "Pergunte algo sobre sua gestão...".to_string(),
                            id: "chat-preview-input".to_string(),
                            readonly: true,
                            class: "chat-input".to_string(),
                        }
                        button { class: "chat-send", "aria-label": "Enviar", "\u{27A4}" }
                    }
                }
            }
        }
    }
}
