//! Landing page - the single page of the FinanSaaS Pro site.
//!
//! Sections top to bottom: hero, features, stats, interface carousel,
//! AI spotlight, white-label simulator, audience, architecture, pricing,
//! FAQ, footer.

use dioxus::prelude::*;

use crate::components::{
    AiSpotlight, ArchitectureSection, FaqSection, FeatureGrid, Footer, Hero, InterfaceShowcase,
    Navbar, Pricing, TargetAudience, TrustStats, WhiteLabelSimulator,
};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            Navbar {}
            main {
                Hero {}
                FeatureGrid {}
                TrustStats {}
                InterfaceShowcase {}
                AiSpotlight {}
                WhiteLabelSimulator {}
                TargetAudience {}
                ArchitectureSection {}
                Pricing {}
                FaqSection {}
            }
            Footer {}
        }
    }
}
