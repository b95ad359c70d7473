//! Settings context and page-level helpers.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_settings);
//!
//! // In child components
//! let settings = use_settings();
//! scroll_to(Section::Faq);
//! ```

use dioxus::prelude::*;
use landing_core::scroll::{measure_script, scroll_to_script, AnchorPosition};
use landing_core::{LandingSettings, Section};

/// Get the settings resolved at startup.
pub fn get_settings() -> LandingSettings {
    crate::get_settings()
}

/// Hook to access the landing settings from context.
pub fn use_settings() -> LandingSettings {
    use_context::<LandingSettings>()
}

/// Smooth-scroll the webview to a section.
///
/// The anchor is measured in the webview first; when it is not in the DOM
/// nothing happens.
pub fn scroll_to(section: Section) {
    tracing::debug!("Scrolling to {:?}", section);
    spawn(async move {
        let top = match section.anchor() {
            None => 0.0,
            Some(anchor) => {
                let measured = document::eval(&measure_script(anchor))
                    .join::<Option<AnchorPosition>>()
                    .await;
                match measured {
                    Ok(Some(position)) => position.target(),
                    Ok(None) => {
                        tracing::debug!("Anchor #{} not in the page, not scrolling", anchor);
                        return;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to measure anchor #{}: {:?}", anchor, e);
                        return;
                    }
                }
            }
        };
        let _ = document::eval(&scroll_to_script(top));
    });
}
