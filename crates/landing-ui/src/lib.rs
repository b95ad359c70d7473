//! FinanSaaS Landing UI Components
//!
//! Dioxus primitives shared by the landing page sections.
//!
//! ## Design Language
//!
//! Light, clean marketing surface:
//! - **Green (#22c55e)**: primary actions, highlights, active states
//! - **Slate (#0f172a .. #f8fafc)**: text and neutral surfaces
//! - **Gradient**: the primary call to action (green to emerald)

pub mod components;

pub use components::*;
