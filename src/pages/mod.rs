//! Page components for the FinanSaaS landing.

mod landing;

pub use landing::Landing;
