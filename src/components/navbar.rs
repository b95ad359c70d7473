//! Fixed navigation bar with section links.

use dioxus::prelude::*;
use landing_core::content::{Icon, NAV_CTA, PRODUCT_NAME};
use landing_core::Section;
use landing_ui::{Button, ButtonVariant, IconGlyph};

use crate::context::scroll_to;

#[component]
pub fn Navbar() -> Element {
    let (cta_label, cta_target) = NAV_CTA;

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div {
                    class: "brand",
                    onclick: move |_| scroll_to(Section::Top),
                    div { class: "brand-mark",
                        IconGlyph { icon: Icon::Trending }
                    }
                    span { class: "brand-name", "{PRODUCT_NAME}" }
                }

                div { class: "navbar-links",
                    for section in Section::NAV {
                        {
                            let label = section.label();
                            rsx! {
                                Button {
                                    variant: ButtonVariant::Link,
                                    onclick: move |_| scroll_to(section),
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "navbar-cta".to_string(),
                    onclick: move |_| scroll_to(cta_target),
                    "{cta_label}"
                }
            }
        }
    }
}
