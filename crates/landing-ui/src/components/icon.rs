//! Icon glyphs
//!
//! Maps the page's [`Icon`] set onto Unicode glyphs so the desktop build
//! needs no icon font.

use dioxus::prelude::*;
use landing_core::content::Icon;

/// Glyph for an icon
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Bot => "\u{1F916}",
        Icon::Workflow => "\u{2699}",
        Icon::Message => "\u{1F4AC}",
        Icon::Book => "\u{1F4D6}",
        Icon::PieChart => "\u{1F4CA}",
        Icon::Palette => "\u{1F3A8}",
        Icon::Zap => "\u{26A1}",
        Icon::Users => "\u{1F465}",
        Icon::Smartphone => "\u{1F4F1}",
        Icon::Youtube => "\u{25B6}",
        Icon::Instagram => "\u{1F4F7}",
        Icon::Layout => "\u{25A6}",
        Icon::Trending => "\u{1F4C8}",
        Icon::Check => "\u{2713}",
        Icon::Shield => "\u{1F6E1}",
        Icon::Sparkles => "\u{2728}",
        Icon::Monitor => "\u{1F5A5}",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconGlyphProps {
    pub icon: Icon,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Inline icon, hidden from screen readers
#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let symbol = glyph(props.icon);
    let class = match props.class.as_deref() {
        Some(extra) => format!("icon {}", extra),
        None => "icon".to_string(),
    };

    rsx! {
        span {
            class: "{class}",
            "aria-hidden": "true",
            "{symbol}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_glyph() {
        assert_eq!(glyph(Icon::Check), "\u{2713}");
    }

    #[test]
    fn every_glyph_is_non_empty() {
        let icons = [
            Icon::Bot,
            Icon::Workflow,
            Icon::Message,
            Icon::Book,
            Icon::PieChart,
            Icon::Palette,
            Icon::Zap,
            Icon::Users,
            Icon::Smartphone,
            Icon::Youtube,
            Icon::Instagram,
            Icon::Layout,
            Icon::Trending,
            Icon::Check,
            Icon::Shield,
            Icon::Sparkles,
            Icon::Monitor,
        ];
        for icon in icons {
            assert!(!glyph(icon).is_empty(), "{:?}", icon);
        }
    }
}
