//! Check List Component
//!
//! Vertical list of items each preceded by a green check badge. Used by
//! the AI spotlight, the white-label perks and the pricing card.

use dioxus::prelude::*;
use landing_core::content::Icon;

use crate::IconGlyph;

/// Properties for the CheckList component
#[derive(Clone, PartialEq, Props)]
pub struct CheckListProps {
    /// Item titles, in order
    pub items: Vec<String>,
    /// Optional second line per item (same length as `items` when present)
    #[props(default)]
    pub details: Option<Vec<String>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Displays a check-marked list
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CheckList {
///         items: OFFER.includes.iter().map(|s| s.to_string()).collect(),
///         class: "pricing-includes".to_string()
///     }
/// }
/// ```
#[component]
pub fn CheckList(props: CheckListProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) => format!("check-list {}", extra),
        None => "check-list".to_string(),
    };

    rsx! {
        ul { class: "{class}",
            for (i, item) in props.items.iter().enumerate() {
                li { class: "check-item",
                    span { class: "check-badge",
                        IconGlyph { icon: Icon::Check }
                    }
                    div { class: "check-text",
                        p { class: "check-title", "{item}" }
                        if let Some(detail) = props.details.as_ref().and_then(|d| d.get(i)) {
                            p { class: "check-detail", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}
