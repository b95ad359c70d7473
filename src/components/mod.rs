//! Landing page sections.
//!
//! Each section is self-contained; the only shared input is the settings
//! context (slides, slide interval, initial brand).

mod ai_spotlight;
mod audience;
mod fade_in;
mod faq;
mod features;
mod footer;
mod hero;
mod image_slider;
mod navbar;
mod pricing;
mod showcase;
mod simulator;

pub use ai_spotlight::AiSpotlight;
pub use audience::{ArchitectureSection, TargetAudience};
pub use fade_in::FadeIn;
pub use faq::FaqSection;
pub use features::{CardTile, FeatureGrid, SectionHeading, TrustStats};
pub use footer::Footer;
pub use hero::Hero;
pub use image_slider::ImageSlider;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use showcase::InterfaceShowcase;
pub use simulator::WhiteLabelSimulator;
