use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::carousel::ScrollBehavior;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Deck file (JSON or TOML). The built-in sample deck is used when unset.
    #[serde(default)]
    pub deck: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            deck: None,
        }
    }
}

/// Carousel behaviour. Passed explicitly into [`crate::carousel::Carousel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Fraction of the viewport width one swipe scrolls by
    /// (card width plus its margins and the strip gap)
    #[serde(default = "default_swipe_fraction")]
    pub swipe_fraction: f64,
    /// How scroll commands are animated
    #[serde(default)]
    pub animation: ScrollBehavior,
    /// Only show the carousel when the viewport is at most this wide.
    /// `None` always shows it.
    #[serde(default)]
    pub mobile_breakpoint: Option<u16>,
    /// Horizontal distance a gesture must cover to count as a swipe.
    /// 0 means any nonzero movement triggers a move.
    #[serde(default)]
    pub min_swipe_distance: f64,
    /// Distance of the synthetic swipe issued by keyboard navigation
    #[serde(default = "default_swipe_step")]
    pub swipe_step: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_fraction: default_swipe_fraction(),
            animation: ScrollBehavior::default(),
            mobile_breakpoint: None,
            min_swipe_distance: 0.0,
            swipe_step: default_swipe_step(),
        }
    }
}

impl CarouselConfig {
    /// Reject values that would break the swipe unit invariant
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.swipe_fraction > 0.0 && self.swipe_fraction.is_finite()) {
            return Err(crate::Error::Config(format!(
                "carousel.swipe_fraction must be positive, got {}",
                self.swipe_fraction
            )));
        }
        if self.min_swipe_distance < 0.0 || !self.min_swipe_distance.is_finite() {
            return Err(crate::Error::Config(format!(
                "carousel.min_swipe_distance must be >= 0, got {}",
                self.min_swipe_distance
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth scroll animation settings
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used by the smooth scroll animator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolls (when false every scroll jumps)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardswipe")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_swipe_fraction() -> f64 {
    0.85 // 80% card + 2 x 2.5% margin
}

fn default_swipe_step() -> f64 {
    4.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/cardswipe/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("cardswipe")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("cardswipe.log")
    }

    /// Configured deck path (with tilde expansion)
    pub fn deck_path(&self) -> Option<PathBuf> {
        self.general.deck.as_deref().map(expand_tilde)
    }
}
