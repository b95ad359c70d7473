//! Section anchors and the smooth-scroll helper.
//!
//! Scrolling takes two round trips to the webview: [`measure_script`]
//! reports where the anchor sits, the target is computed here with
//! [`target_offset`], then [`scroll_to_script`] moves the page. A missing
//! anchor measures as `null` and nothing scrolls.

use serde::Deserialize;

/// Height of the fixed navbar; targets land just below it.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

/// Named sections of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Top of the page (brand logo click)
    Top,
    Features,
    Dashboard,
    Opportunity,
    Faq,
    Checkout,
}

impl Section {
    /// Sections reachable from the navbar, in display order
    pub const NAV: [Section; 4] = [
        Section::Features,
        Section::Dashboard,
        Section::Opportunity,
        Section::Faq,
    ];

    /// DOM id of the section, `None` for [`Section::Top`]
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Section::Top => None,
            Section::Features => Some("funcionalidades"),
            Section::Dashboard => Some("dashboard"),
            Section::Opportunity => Some("oportunidade"),
            Section::Faq => Some("faq"),
            Section::Checkout => Some("checkout"),
        }
    }

    /// Link label used in the navbar and footer
    pub fn label(&self) -> &'static str {
        match self {
            Section::Top => "Início",
            Section::Features => "Funcionalidades",
            Section::Dashboard => "Interface",
            Section::Opportunity => "Oportunidade",
            Section::Faq => "FAQ",
            Section::Checkout => "Preço",
        }
    }
}

/// Absolute scroll position for an element whose viewport-relative top is
/// `element_top` while the page is scrolled to `page_y_offset`.
pub fn target_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - NAVBAR_OFFSET_PX
}

/// Anchor geometry reported by [`measure_script`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnchorPosition {
    /// `getBoundingClientRect().top` of the anchor
    pub top: f64,
    /// `window.pageYOffset` at measurement time
    pub page_y: f64,
}

impl AnchorPosition {
    /// Scroll position that puts the anchor just below the navbar
    pub fn target(&self) -> f64 {
        target_offset(self.top, self.page_y)
    }
}

/// JavaScript returning the [`AnchorPosition`] of `anchor`, or `null` when
/// the element is not in the DOM.
pub fn measure_script(anchor: &str) -> String {
    format!(
        "const el = document.getElementById('{anchor}');\n\
         if (!el) return null;\n\
         return {{ top: el.getBoundingClientRect().top, page_y: window.pageYOffset }};",
        anchor = anchor,
    )
}

/// JavaScript that smooth-scrolls the page to absolute position `top`.
pub fn scroll_to_script(top: f64) -> String {
    format!("window.scrollTo({{ top: {}, behavior: 'smooth' }});", top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_offset_subtracts_navbar() {
        assert_eq!(target_offset(500.0, 1200.0), 1620.0);
        assert_eq!(target_offset(0.0, 0.0), -80.0);
    }

    #[test]
    fn test_nav_sections_have_anchors() {
        for section in Section::NAV {
            assert!(section.anchor().is_some(), "{:?}", section);
        }
        assert_eq!(Section::Top.anchor(), None);
        assert_eq!(Section::Checkout.anchor(), Some("checkout"));
    }

    #[test]
    fn test_measure_script_guards_missing_anchor() {
        let script = measure_script("faq");
        assert!(script.contains("getElementById('faq')"));
        assert!(script.contains("if (!el) return null;"));
        assert!(script.contains("page_y: window.pageYOffset"));
    }

    #[test]
    fn test_measured_position_gives_target() {
        let json = serde_json::json!({ "top": 500.0, "page_y": 1200.0 });
        let position: Option<AnchorPosition> = serde_json::from_value(json).unwrap();
        assert_eq!(position.map(|p| p.target()), Some(1620.0));
    }

    #[test]
    fn test_missing_anchor_measures_as_none() {
        let position: Option<AnchorPosition> =
            serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(position, None);
    }

    #[test]
    fn test_scroll_to_script() {
        assert_eq!(
            scroll_to_script(1620.0),
            "window.scrollTo({ top: 1620, behavior: 'smooth' });"
        );
        assert_eq!(
            scroll_to_script(0.0),
            "window.scrollTo({ top: 0, behavior: 'smooth' });"
        );
    }
}
