use dioxus::prelude::*;

use crate::context::get_settings;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, settings context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_settings);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
