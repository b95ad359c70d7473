//! Reusable UI components for the landing page
//!
//! Buttons, labeled inputs, color swatches, check lists and icons.

mod button;
mod check_list;
mod color_swatches;
mod icon;
mod input;

pub use button::*;
pub use check_list::*;
pub use color_swatches::*;
pub use icon::*;
pub use input::*;
