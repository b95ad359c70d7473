//! Page footer.

use dioxus::prelude::*;
use landing_core::content::{Icon, FOOTER_BLURB, FOOTER_LINKS, PRODUCT_NAME};
use landing_ui::{Button, ButtonVariant, IconGlyph};

use crate::context::scroll_to;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-about",
                        div { class: "brand",
                            div { class: "brand-mark",
                                IconGlyph { icon: Icon::Trending }
                            }
                            span { class: "brand-name", "{PRODUCT_NAME}" }
                        }
                        p { class: "footer-blurb", "{FOOTER_BLURB}" }
                        div { class: "footer-social",
                            a { href: "#", "aria-label": "Instagram", IconGlyph { icon: Icon::Instagram } }
                            a { href: "#", "aria-label": "YouTube", IconGlyph { icon: Icon::Youtube } }
                        }
                    }
                    div {
                        h5 { class: "footer-heading", "Plataforma" }
                        ul { class: "footer-links",
                            for section in FOOTER_LINKS {
                                {
                                    let label = section.label();
                                    rsx! {
                                        li {
                                            Button {
                                                variant: ButtonVariant::Link,
                                                onclick: move |_| scroll_to(section),
                                                "{label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { "\u{00A9} 2026 {PRODUCT_NAME} - Todos os direitos reservados." }
                    div { class: "footer-secure",
                        IconGlyph { icon: Icon::Shield }
                        span { "Ambiente 100% Seguro" }
                    }
                }
            }
        }
    }
}
