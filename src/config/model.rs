//! Configuration data model.
//!
//! Deserialized from the TOML config file, which is never written back. Every
//! field has a sensible default so the application works out of the box.

use serde::Deserialize;
use std::time::Duration;

use crate::cycler::{CyclerError, TaglineList, Timing, Variant, DEFAULT_TAGLINES};

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub cycler: CyclerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which taglines to show and how fast to cycle them.
#[derive(Debug, Clone, Deserialize)]
pub struct CyclerConfig {
    /// Variant mounted at startup.
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_taglines")]
    pub taglines: Vec<String>,
    /// Overrides the variant's default period for every variant.
    #[serde(default)]
    pub period_ms: Option<u64>,
    /// Overrides the hide delay of the fade-style variants.
    #[serde(default)]
    pub hide_delay_ms: Option<u64>,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            taglines: default_taglines(),
            period_ms: None,
            hide_delay_ms: None,
        }
    }
}

impl CyclerConfig {
    pub fn tagline_list(&self) -> Result<TaglineList, CyclerError> {
        TaglineList::new(self.taglines.iter().cloned())
    }

    pub fn timing_for(&self, variant: Variant) -> Result<Timing, CyclerError> {
        Timing::with_overrides(
            variant,
            self.period_ms.map(Duration::from_millis),
            self.hide_delay_ms.map(Duration::from_millis),
        )
    }

    /// Check the list and the timing of every variant the user can switch to.
    pub fn validate(&self) -> Result<(), CyclerError> {
        self.tagline_list()?;
        for variant in Variant::ALL {
            self.timing_for(variant)?;
        }
        Ok(())
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Animation ticks per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: None,
            show_status_bar: true,
            frame_rate: default_frame_rate(),
        }
    }
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.clamp(1, 120)))
    }
}

/// Diagnostic logging settings. Logs go to a daily file, never the terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_taglines() -> Vec<String> {
    DEFAULT_TAGLINES.iter().map(|s| s.to_string()).collect()
}
fn default_true() -> bool {
    true
}
fn default_title() -> String {
    "Amore".to_string()
}
fn default_frame_rate() -> u32 {
    20
}
fn default_log_dir() -> String {
    "~/.local/share/herotag/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.cycler.variant, Variant::Fade);
        assert_eq!(cfg.cycler.taglines.len(), 12);
        assert_eq!(cfg.ui.title, "Amore");
        assert!(cfg.ui.show_status_bar);
        assert!(!cfg.logging.enabled);
        assert!(cfg.cycler.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [cycler]
            variant = "gradient"
            taglines = ["one", "two"]
            period_ms = 2000
            hide_delay_ms = 300

            [ui]
            title = "Hello"
            subtitle = "world"
            frame_rate = 30

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.cycler.variant, Variant::Gradient);
        assert_eq!(cfg.cycler.tagline_list().unwrap().len(), 2);
        let timing = cfg.cycler.timing_for(Variant::Gradient).unwrap();
        assert_eq!(timing.period, Duration::from_millis(2000));
        assert_eq!(timing.hide_delay, Some(Duration::from_millis(300)));
        assert_eq!(cfg.ui.subtitle.as_deref(), Some("world"));
        assert_eq!(cfg.ui.tick_interval(), Duration::from_millis(33));
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.log_dir, "~/.local/share/herotag/logs");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = CyclerConfig {
            taglines: Vec::new(),
            ..CyclerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(CyclerError::EmptyTaglines));

        cfg.taglines = vec!["x".into()];
        cfg.period_ms = Some(550);
        // fine for fade (500) but not for gradient (600)
        assert!(cfg.timing_for(Variant::Fade).is_ok());
        assert!(matches!(
            cfg.validate(),
            Err(CyclerError::HideDelayTooLong { .. })
        ));
    }
}
