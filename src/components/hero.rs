//! Hero banner with headline, calls to action and the presentation video.

use dioxus::prelude::*;
use landing_core::content::{
    HERO_BADGE, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, HERO_TITLE, HERO_TITLE_HIGHLIGHT,
    HERO_VIDEO_URL,
};
use landing_core::Section;
use landing_ui::{Button, ButtonVariant};

use super::FadeIn;
use crate::context::scroll_to;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-glow" }
            div { class: "container hero-content",
                FadeIn {
                    span { class: "hero-badge", "{HERO_BADGE}" }
                    h1 { class: "hero-title",
                        "{HERO_TITLE}"
                        br {}
                        span { class: "text-gradient", "{HERO_TITLE_HIGHLIGHT}" }
                    }
                    p { class: "hero-subtitle",
                        "Pare de pagar mensalidades. Acesse a tecnologia "
                        span { class: "highlight", "White-Label completa" }
                        " com Agente de IA e automações. Receba 100% do código para "
                        span { class: "accent", "uso próprio ou para lucrar alto revendendo" }
                        " como se fosse seu."
                    }
                    div { class: "hero-actions",
                        Button {
                            variant: ButtonVariant::Hero,
                            onclick: move |_| scroll_to(Section::Checkout),
                            "{HERO_PRIMARY_CTA} \u{2192}"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| scroll_to(Section::Features),
                            "{HERO_SECONDARY_CTA}"
                        }
                    }
                }

                FadeIn { delay_ms: 200,
                    div { class: "video-frame",
                        iframe {
                            class: "video-embed",
                            src: HERO_VIDEO_URL,
                            title: "Apresentação FinanSaaS Pro",
                            "frameborder": "0",
                            "allow": "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                            "allowfullscreen": "true",
                        }
                    }
                }
            }
        }
    }
}
