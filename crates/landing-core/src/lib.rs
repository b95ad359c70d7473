//! FinanSaaS Landing Core Library
//!
//! UI-independent state and content for the FinanSaaS Pro landing page.
//!
//! ## Overview
//!
//! The page is mostly static copy. The pieces that carry state live here so
//! they can be tested without a webview:
//!
//! - **Carousel**: fixed slide set, a single current index, wrap-around
//!   navigation and a cancellable auto-advance timer
//! - **Branding**: the white-label simulator (brand name and identity color)
//! - **Disclosure**: open/closed state of one FAQ item
//! - **Scroll**: section anchors and the smooth-scroll helper
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use landing_core::{AutoAdvance, Carousel, SlideSet};
//! use parking_lot::Mutex;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let slides = SlideSet::new(vec!["a.png".into(), "b.png".into()])?;
//!     let carousel = Arc::new(Mutex::new(Carousel::new(slides)));
//!
//!     // Ticks every 5 seconds until `timer` is dropped
//!     let timer = AutoAdvance::attach(carousel.clone(), Duration::from_secs(5))?;
//!
//!     carousel.lock().next();
//!     drop(timer);
//!     Ok(())
//! }
//! ```

pub mod auto_advance;
pub mod branding;
pub mod carousel;
pub mod config;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod scroll;

// Re-exports
pub use auto_advance::{AutoAdvance, DEFAULT_SLIDE_INTERVAL};
pub use branding::{BrandColor, BrandProfile, PALETTE};
pub use carousel::{Carousel, Slide, SlideSet};
pub use config::{ContentConfig, LandingSettings};
pub use disclosure::Disclosure;
pub use error::{LandingError, LandingResult};
pub use scroll::{Section, NAVBAR_OFFSET_PX};
