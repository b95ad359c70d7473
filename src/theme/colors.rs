//! Fixed colors used by inline SVG, where CSS variables are not available.
//!
//! Brand-dependent colors come from the white-label simulator instead.

// === NEUTRALS ===
pub const SLATE_100: &str = "#f1f5f9";
pub const SLATE_200: &str = "#e2e8f0";

// === CHART SERIES ===
pub const SERIES_BLUE: &str = "#3b82f6";
pub const SERIES_AMBER: &str = "#f59e0b";
