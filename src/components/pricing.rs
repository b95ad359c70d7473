//! Pricing card.
//!
//! The checkout button has no handler. Payment happens on an external
//! provider configured outside this page.

use dioxus::prelude::*;
use landing_core::content::{Icon, OFFER};
use landing_ui::{Button, ButtonVariant, CheckList, IconGlyph};

use super::SectionHeading;

#[component]
pub fn Pricing() -> Element {
    let offer = OFFER;

    rsx! {
        section { id: "checkout", class: "section",
            div { class: "container narrow",
                SectionHeading {
                    eyebrow: "Oferta Exclusiva de Lançamento".to_string(),
                    title: "Acesse agora por".to_string(),
                    highlight: "um preço simbólico".to_string(),
                    lead: "Acesso vitalício ao código-fonte, licença de revenda ilimitada e toda a inteligência do FinanSaaS.".to_string(),
                }

                div { class: "pricing-card",
                    div { class: "pricing-ribbon", "{offer.ribbon}" }
                    div { class: "pricing-head",
                        h3 { "{offer.name}" }
                        p { class: "pricing-tagline", "{offer.tagline}" }
                        div { class: "pricing-amount",
                            span { class: "pricing-currency", "{offer.currency}" }
                            span { class: "pricing-price", "{offer.price}" }
                        }
                        p { class: "pricing-terms", "{offer.terms}" }
                    }

                    CheckList {
                        items: offer.includes.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                        class: "pricing-includes".to_string(),
                    }

                    Button { variant: ButtonVariant::Checkout,
                        "{offer.cta} \u{203A}"
                    }

                    p { class: "pricing-note",
                        IconGlyph { icon: Icon::Shield }
                        " {offer.payment_note}"
                    }
                    div { class: "payment-badges",
                        for badge in offer.badges {
                            img { class: "payment-badge", src: badge.logo, alt: badge.name }
                        }
                    }
                }

                p { class: "pricing-guarantee", "{offer.guarantee}" }
            }
        }
    }
}
