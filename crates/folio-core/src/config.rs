use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::segment::DEFAULT_CLAMP_MARGIN;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub showcase: ShowcaseConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Portfolio content file; defaults to portfolio.toml next to config.toml
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            portfolio_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name ("midnight", "gruvbox-dark", "paper")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Smooth scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Intro typing animation
    #[serde(default)]
    pub intro: IntroConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
            scroll: ScrollConfig::default(),
            intro: IntroConfig::default(),
        }
    }
}

/// Easing curve used by scroll and intro animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end
    None,
    Linear,
    #[default]
    Cubic,
    Quartic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per j/k press when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Play the intro on startup
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Delay before the first character is typed
    #[serde(default = "default_intro_start_delay")]
    pub start_delay_ms: u64,
    /// Time per typed character
    #[serde(default = "default_intro_type_speed")]
    pub type_speed_ms: u64,
    /// Pause between two code lines
    #[serde(default = "default_intro_line_delay")]
    pub line_delay_ms: u64,
    /// Loading bar duration
    #[serde(default = "default_intro_loading")]
    pub loading_ms: u64,
    /// Fade-out after the loading bar completes
    #[serde(default = "default_intro_reveal")]
    pub reveal_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            start_delay_ms: default_intro_start_delay(),
            type_speed_ms: default_intro_type_speed(),
            line_delay_ms: default_intro_line_delay(),
            loading_ms: default_intro_loading(),
            reveal_ms: default_intro_reveal(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Scroll rows allotted to each project in the pinned showcase
    #[serde(default = "default_rows_per_project")]
    pub rows_per_project: u16,
    /// Margin below 1.0 that scroll progress is clamped to
    #[serde(default = "default_clamp_margin")]
    pub clamp_margin: f64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            rows_per_project: default_rows_per_project(),
            clamp_margin: default_clamp_margin(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "G", "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll one step down
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll one step up
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Scroll full page down
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    /// Scroll full page up
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to the top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Jump to the projects section
    #[serde(default = "default_key_goto_projects")]
    pub goto_projects: String,
    /// Jump to the skills section
    #[serde(default = "default_key_goto_skills")]
    pub goto_skills: String,
    /// Jump to the contact section
    #[serde(default = "default_key_goto_contact")]
    pub goto_contact: String,
    /// Jump to the next project in the showcase
    #[serde(default = "default_key_next_project")]
    pub next_project: String,
    /// Jump to the previous project in the showcase
    #[serde(default = "default_key_prev_project")]
    pub prev_project: String,
    /// Open the active project's GitHub link
    #[serde(default = "default_key_open_github")]
    pub open_github: String,
    /// Open the active project's live demo
    #[serde(default = "default_key_open_demo")]
    pub open_demo: String,
    /// Show the help popup
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            goto_projects: default_key_goto_projects(),
            goto_skills: default_key_goto_skills(),
            goto_contact: default_key_goto_contact(),
            next_project: default_key_next_project(),
            prev_project: default_key_prev_project(),
            open_github: default_key_open_github(),
            open_demo: default_key_open_demo(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_goto_projects() -> String { "1".to_string() }
fn default_key_goto_skills() -> String { "2".to_string() }
fn default_key_goto_contact() -> String { "3".to_string() }
fn default_key_next_project() -> String { "n".to_string() }
fn default_key_prev_project() -> String { "p".to_string() }
fn default_key_open_github() -> String { "o".to_string() }
fn default_key_open_demo() -> String { "O".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_intro_start_delay() -> u64 {
    600
}

fn default_intro_type_speed() -> u64 {
    35
}

fn default_intro_line_delay() -> u64 {
    300
}

fn default_intro_loading() -> u64 {
    2800
}

fn default_intro_reveal() -> u64 {
    900
}

fn default_rows_per_project() -> u16 {
    12
}

fn default_clamp_margin() -> f64 {
    DEFAULT_CLAMP_MARGIN
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
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Configuration directory
    /// Always uses ~/.config/folio on all platforms
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the portfolio content path (with tilde expansion)
    pub fn portfolio_path(&self) -> PathBuf {
        match &self.general.portfolio_path {
            Some(path) => expand_tilde(path),
            None => Self::config_dir().join("portfolio.toml"),
        }
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme, "midnight");
        assert_eq!(config.showcase.rows_per_project, 12);
        assert_eq!(config.showcase.clamp_margin, DEFAULT_CLAMP_MARGIN);
        assert_eq!(config.ui.intro.type_speed_ms, 35);
        assert_eq!(config.keymap.jump_to_top, "gg");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            theme = "paper"

            [ui.scroll]
            easing = "quartic"
            smooth_enabled = false

            [showcase]
            rows_per_project = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, "paper");
        assert_eq!(config.ui.scroll.easing, EasingType::Quartic);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_duration_ms, 150);
        assert_eq!(config.showcase.rows_per_project, 20);
        assert!(config.ui.intro.enabled);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\ntheme = 1").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.ui.theme = "gruvbox-dark".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.ui.theme, "gruvbox-dark");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("folio-definitely-missing/config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_expand_tilde() {
        let plain = PathBuf::from("/tmp/folio");
        assert_eq!(expand_tilde(&plain), plain);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(&PathBuf::from("~/x")), home.join("x"));
        }
    }
}
