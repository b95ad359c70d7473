//! Feature grid and trust stats.

use dioxus::prelude::*;
use landing_core::content::{Card, FEATURES, TRUST_STATS};
use landing_ui::IconGlyph;

/// Section header with a gradient-highlighted tail
#[component]
pub fn SectionHeading(
    #[props(default)] eyebrow: Option<String>,
    title: String,
    highlight: String,
    #[props(default)] lead: Option<String>,
) -> Element {
    rsx! {
        div { class: "section-heading",
            if let Some(eyebrow) = eyebrow {
                span { class: "eyebrow", "{eyebrow}" }
            }
            h2 { class: "section-title",
                "{title} "
                span { class: "text-gradient", "{highlight}" }
            }
            if let Some(lead) = lead {
                p { class: "section-lead", "{lead}" }
            }
        }
    }
}

/// A single icon card
#[component]
pub fn CardTile(card: Card) -> Element {
    rsx! {
        div { class: "card-tile",
            div { class: "card-icon",
                IconGlyph { icon: card.icon }
            }
            if !card.label.is_empty() {
                span { class: "card-label", "{card.label}" }
            }
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-text", "{card.text}" }
        }
    }
}

#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        section { id: "funcionalidades", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Tecnologia de".to_string(),
                    highlight: "Próxima Geração".to_string(),
                    lead: "O sistema mais robusto do mercado, pronto para ser a espinha dorsal do seu negócio ou da sua nova software house.".to_string(),
                }
                div { class: "card-grid",
                    for card in FEATURES {
                        CardTile { card }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrustStats() -> Element {
    rsx! {
        section { class: "section-band",
            div { class: "container stats-grid",
                for stat in TRUST_STATS {
                    div { class: "stat",
                        div { class: "stat-value text-gradient", "{stat.value}" }
                        div { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}
