//! Target audience grid and the architecture section.

use dioxus::prelude::*;
use landing_core::content::{Icon, ARCHITECTURE, AUDIENCE};
use landing_ui::IconGlyph;

use super::{CardTile, SectionHeading};

#[component]
pub fn TargetAudience() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Para Quem é o".to_string(),
                    highlight: "FinanSaaS?".to_string(),
                    lead: "Ideal para quem quer empreender no mundo do software sem precisar começar do absoluto zero.".to_string(),
                }
                div { class: "card-grid",
                    for card in AUDIENCE {
                        CardTile { card }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ArchitectureSection() -> Element {
    rsx! {
        section { class: "section section-muted",
            div { class: "container split",
                // Desktop and phone wireframes
                div { class: "devices",
                    div { class: "device desktop",
                        IconGlyph { icon: Icon::Monitor, class: "device-icon".to_string() }
                        h4 { "Desktop View" }
                        div { class: "wire-line wide" }
                        div { class: "wire-line" }
                        div { class: "wire-blocks",
                            div { class: "wire-block" }
                            div { class: "wire-block" }
                            div { class: "wire-block" }
                        }
                    }
                    div { class: "device phone",
                        IconGlyph { icon: Icon::Smartphone, class: "device-icon".to_string() }
                        div { class: "wire-line" }
                        div { class: "wire-line" }
                        div { class: "wire-line short" }
                    }
                }

                div {
                    span { class: "eyebrow", "Tecnologia & Escala" }
                    h2 { class: "section-title",
                        "Arquitetura Pensada "
                        br {}
                        span { class: "text-gradient", "para Escalar" }
                    }
                    div { class: "arch-list",
                        for item in ARCHITECTURE {
                            div { class: "arch-item",
                                div { class: "arch-icon",
                                    IconGlyph { icon: item.icon }
                                }
                                div {
                                    p { class: "arch-title", "{item.title}" }
                                    p { class: "arch-text", "{item.text}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
