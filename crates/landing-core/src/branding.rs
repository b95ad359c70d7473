//! White-label simulator state.
//!
//! The visitor types a brand name and picks an identity color; the mock
//! dashboard repaints itself with both. Values live only as long as the
//! page and are never validated beyond what the color picker offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, LandingResult};

/// `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandColor(String);

impl BrandColor {
    /// Parse a `#rrggbb` hex color. Stored lowercase.
    pub fn parse(s: &str) -> LandingResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| LandingError::InvalidColor(s.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LandingError::InvalidColor(s.to_string()));
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digits without the leading `#`
    pub fn hex(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for BrandColor {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BrandColor {
    type Error = LandingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<BrandColor> for String {
    fn from(color: BrandColor) -> Self {
        color.0
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity colors offered by the simulator
pub const PALETTE: [&str; 6] = [
    "#22c55e", "#3b82f6", "#10b981", "#f43f5e", "#8b5cf6", "#0ea5e9",
];

pub const DEFAULT_BRAND_NAME: &str = "FinanSaaS Pro";

/// Brand name and color shown in the simulated dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandProfile {
    name: String,
    color: BrandColor,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_BRAND_NAME.to_string(),
            color: BrandColor(PALETTE[0].to_string()),
        }
    }
}

impl BrandProfile {
    pub fn new(name: impl Into<String>, color: BrandColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &BrandColor {
        &self.color
    }

    /// Overwrite the brand name as typed, empty included.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: BrandColor) {
        self.color = color;
    }

    /// The palette as parsed colors
    pub fn palette() -> Vec<BrandColor> {
        PALETTE.iter().map(|c| BrandColor(c.to_string())).collect()
    }

    /// Whether `color` is the one currently selected
    pub fn is_selected(&self, color: &BrandColor) -> bool {
        &self.color == color
    }

    /// Domain the white-labeled product would live at.
    pub fn domain_preview(&self) -> String {
        let slug: String = self
            .name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("app.{}.com.br", slug)
    }

    pub fn search_placeholder(&self) -> String {
        format!("Buscar em {}...", self.name)
    }

    /// SVG gradient id, unique per color so switching colors repaints the chart
    pub fn gradient_id(&self) -> String {
        format!("gradient-{}", self.color.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let brand = BrandProfile::default();
        assert_eq!(brand.name(), "FinanSaaS Pro");
        assert_eq!(brand.color().as_str(), "#22c55e");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(BrandColor::parse("#3B82F6").unwrap().as_str(), "#3b82f6");
        assert!(BrandColor::parse("3b82f6").is_err());
        assert!(BrandColor::parse("#3b82f").is_err());
        assert!(BrandColor::parse("#zzzzzz").is_err());
        assert!(matches!(
            "red".parse::<BrandColor>(),
            Err(LandingError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_palette_is_valid() {
        for color in PALETTE {
            assert!(BrandColor::parse(color).is_ok(), "{color}");
        }
        assert_eq!(BrandProfile::palette().len(), 6);
    }

    #[test]
    fn test_domain_preview_strips_whitespace() {
        let mut brand = BrandProfile::default();
        assert_eq!(brand.domain_preview(), "app.finansaaspro.com.br");

        brand.set_name("Minha  Marca\tNova");
        assert_eq!(brand.domain_preview(), "app.minhamarcanova.com.br");
    }

    #[test]
    fn test_set_name_accepts_empty() {
        let mut brand = BrandProfile::default();
        brand.set_name("");
        assert_eq!(brand.name(), "");
        assert_eq!(brand.domain_preview(), "app..com.br");
    }

    #[test]
    fn test_color_selection() {
        let mut brand = BrandProfile::default();
        let violet = BrandColor::parse("#8b5cf6").unwrap();
        assert!(!brand.is_selected(&violet));

        brand.set_color(violet.clone());
        assert!(brand.is_selected(&violet));
        assert_eq!(brand.gradient_id(), "gradient-8b5cf6");
    }

    #[test]
    fn test_search_placeholder() {
        let brand = BrandProfile::new("Acme", BrandColor::parse("#0ea5e9").unwrap());
        assert_eq!(brand.search_placeholder(), "Buscar em Acme...");
    }
}
