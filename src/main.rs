#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use landing_core::{ContentConfig, LandingSettings};
use tracing_subscriber::EnvFilter;

/// Effective settings, resolved once from the command line
static SETTINGS: OnceLock<LandingSettings> = OnceLock::new();

/// Get the landing settings (set from command line or default)
pub fn get_settings() -> LandingSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// FinanSaaS Pro - Landing Page
#[derive(Parser, Debug)]
#[command(name = "finansaas-landing")]
#[command(about = "FinanSaaS Pro landing page (desktop preview)")]
struct Args {
    /// JSON file overriding slides, slide interval and initial brand
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Carousel auto-advance period in milliseconds (overrides the config file)
    #[arg(long)]
    slide_interval_ms: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "FinanSaaS Pro")]
    title: String,
}

/// Merge the config file (if any) with command line overrides.
fn resolve_settings(args: &Args) -> anyhow::Result<LandingSettings> {
    let config = match &args.config {
        Some(path) => ContentConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => ContentConfig::default(),
    };

    let mut settings = config.into_settings().context("Invalid content config")?;
    if let Some(ms) = args.slide_interval_ms {
        settings = settings
            .with_slide_interval_ms(ms)
            .context("Invalid --slide-interval-ms")?;
    }
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;

    tracing::info!(
        "Starting '{}' with {} slides every {:?}",
        args.title,
        settings.slides.len(),
        settings.slide_interval
    );

    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["finansaas-landing"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_settings(&args(&[])).unwrap();
        assert_eq!(settings, LandingSettings::default());
    }

    #[test]
    fn test_cli_interval_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landing.json");
        std::fs::write(&path, r#"{ "slide_interval_ms": 3000 }"#).unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let settings =
            resolve_settings(&args(&["--config", &path_arg, "--slide-interval-ms", "1500"]))
                .unwrap();
        assert_eq!(settings.slide_interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_interval_is_an_error() {
        let result = resolve_settings(&args(&["--slide-interval-ms", "0"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_reports_path() {
        let err = resolve_settings(&args(&["--config", "/definitely/not/here.json"]))
            .unwrap_err();
        assert!(err.to_string().contains("here.json"));
    }
}
