//! Interface showcase - the carousel framed as a browser window.

use dioxus::prelude::*;
use landing_core::content::BROWSER_URL;

use super::{ImageSlider, SectionHeading};
use crate::context::use_settings;

#[component]
pub fn InterfaceShowcase() -> Element {
    let settings = use_settings();

    rsx! {
        section { id: "dashboard", class: "section",
            div { class: "container",
                SectionHeading {
                    eyebrow: "Tecnologia 100% Responsiva".to_string(),
                    title: "Interface de".to_string(),
                    highlight: "Alta Performance".to_string(),
                    lead: "Visualize cada detalhe do faturamento em um painel projetado para clareza e velocidade de decisão.".to_string(),
                }
                div { class: "browser-frame glass-card",
                    div { class: "browser",
                        div { class: "browser-bar",
                            div { class: "traffic-lights",
                                span { class: "light red" }
                                span { class: "light yellow" }
                                span { class: "light green" }
                            }
                            div { class: "browser-url", "{BROWSER_URL}" }
                        }
                        div { class: "browser-body",
                            ImageSlider {
                                slides: settings.slides.clone(),
                                interval: settings.slide_interval,
                            }
                        }
                    }
                }
            }
        }
    }
}
