//! Content configuration.
//!
//! The page ships with built-in copy and screenshots. A JSON file can
//! override the carousel slides, the auto-advance period and the initial
//! white-label brand:
//!
//! ```json
//! {
//!   "slides": ["https://example.com/a.png", "https://example.com/b.png"],
//!   "slide_interval_ms": 4000,
//!   "brand_name": "Minha Marca",
//!   "brand_color": "#3b82f6"
//! }
//! ```
//!
//! Every field is optional.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auto_advance::DEFAULT_SLIDE_INTERVAL;
use crate::branding::{BrandColor, BrandProfile};
use crate::carousel::{Slide, SlideSet};
use crate::error::{LandingError, LandingResult};

/// Raw, unvalidated config as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    pub slides: Option<Vec<Slide>>,
    pub slide_interval_ms: Option<u64>,
    pub brand_name: Option<String>,
    pub brand_color: Option<String>,
}

impl ContentConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> LandingResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        tracing::info!("Loaded content config from {:?}", path);
        Ok(config)
    }

    /// Validate and fill in defaults.
    pub fn into_settings(self) -> LandingResult<LandingSettings> {
        let slides = match self.slides {
            Some(slides) => SlideSet::new(slides)?,
            None => SlideSet::default(),
        };

        let slide_interval = match self.slide_interval_ms {
            Some(0) => return Err(LandingError::ZeroInterval),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_SLIDE_INTERVAL,
        };

        let mut brand = BrandProfile::default();
        if let Some(name) = self.brand_name {
            brand.set_name(name);
        }
        if let Some(color) = self.brand_color {
            brand.set_color(BrandColor::parse(&color)?);
        }

        Ok(LandingSettings {
            slides,
            slide_interval,
            brand,
        })
    }
}

/// Effective settings handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingSettings {
    pub slides: SlideSet,
    pub slide_interval: Duration,
    /// Initial white-label brand; edits in the simulator are not written back
    pub brand: BrandProfile,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            slides: SlideSet::default(),
            slide_interval: DEFAULT_SLIDE_INTERVAL,
            brand: BrandProfile::default(),
        }
    }
}

impl LandingSettings {
    /// Replace the auto-advance period (command line takes precedence over the file).
    pub fn with_slide_interval_ms(mut self, ms: u64) -> LandingResult<Self> {
        if ms == 0 {
            return Err(LandingError::ZeroInterval);
        }
        self.slide_interval = Duration::from_millis(ms);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = ContentConfig::default().into_settings().unwrap();
        assert_eq!(settings, LandingSettings::default());
        assert_eq!(settings.slide_interval, Duration::from_millis(5000));
    }

    #[test]
    fn test_parse_full_config() {
        let json = r##"{
            "slides": ["a.png", "b.png"],
            "slide_interval_ms": 3000,
            "brand_name": "Acme",
            "brand_color": "#F43F5E"
        }"##;
        let config: ContentConfig = serde_json::from_str(json).unwrap();
        let settings = config.into_settings().unwrap();

        assert_eq!(settings.slides.len(), 2);
        assert_eq!(settings.slide_interval, Duration::from_millis(3000));
        assert_eq!(settings.brand.name(), "Acme");
        assert_eq!(settings.brand.color().as_str(), "#f43f5e");
    }

    #[test]
    fn test_empty_slides_rejected() {
        let config: ContentConfig = serde_json::from_str(r#"{ "slides": [] }"#).unwrap();
        assert!(matches!(
            config.into_settings(),
            Err(LandingError::EmptySlideSet)
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = ContentConfig {
            slide_interval_ms: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.into_settings(),
            Err(LandingError::ZeroInterval)
        ));
        assert!(LandingSettings::default().with_slide_interval_ms(0).is_err());
    }

    #[test]
    fn test_bad_color_rejected() {
        let config = ContentConfig {
            brand_color: Some("green".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.into_settings(),
            Err(LandingError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = serde_json::from_str::<ContentConfig>(r#"{ "slide": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landing.json");
        std::fs::write(&path, r#"{ "slide_interval_ms": 750 }"#).unwrap();

        let settings = ContentConfig::load(&path)
            .unwrap()
            .into_settings()
            .unwrap();
        assert_eq!(settings.slide_interval, Duration::from_millis(750));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ContentConfig::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(LandingError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ContentConfig::load(&path),
            Err(LandingError::Config(_))
        ));
    }
}
