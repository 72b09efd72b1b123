//! Configuration constants and utilities for livewidget
//!
//! Settings come from an INI file (if present), then command line flags.
//!
//! ```ini
//! [activity]
//! host = https://github-contributions-api.jogruber.de
//! username = amoschenzixuan
//! window = 98
//!
//! [now_playing]
//! origin = http://localhost:3000
//! path = /api/spotify
//!
//! [dashboard]
//! refresh_secs = 0
//! ```

use crate::cmd_args::{CommandLineArgs, WidgetSelection};
use crate::widgets::events::WidgetId;
use crate::widgets::view_models::DEFAULT_WINDOW_DAYS;
use anyhow::{bail, Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default config file path for livewidget
pub const DEFAULT_CONFIG_PATH: &str = "~/.livewidget/config";

/// Environment variable name for overriding the config path
pub const CONFIG_PATH_ENV_VAR: &str = "LIVEWIDGET_CONFIG_PATH";

/// Environment variable name for the log level
pub const LOG_LEVEL_ENV_VAR: &str = "LIVEWIDGET_LOG_LEVEL";

pub const DEFAULT_ACTIVITY_HOST: &str = "https://github-contributions-api.jogruber.de";
pub const DEFAULT_USERNAME: &str = "amoschenzixuan";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_NOW_PLAYING_PATH: &str = "/api/spotify";

/// Get the config file path, checking environment variable first, then falling back to default
pub fn get_config_path() -> String {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityConfig {
    pub host: String,
    pub username: String,
    pub window: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ACTIVITY_HOST.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            window: DEFAULT_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlayingConfig {
    pub origin: String,
    pub path: String,
}

impl Default for NowPlayingConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            path: DEFAULT_NOW_PLAYING_PATH.to_string(),
        }
    }
}

/// Resolved settings for one dashboard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub activity: ActivityConfig,
    pub now_playing: NowPlayingConfig,
    /// Periodic refresh interval; `None` fetches once per mount
    pub refresh: Option<Duration>,
    /// Widgets to mount, in display order
    pub widgets: Vec<WidgetId>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            activity: ActivityConfig::default(),
            now_playing: NowPlayingConfig::default(),
            refresh: None,
            widgets: WidgetId::ALL.to_vec(),
        }
    }
}

impl WidgetConfig {
    /// Load settings from an INI file, or defaults when the file does not exist
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let file = Path::new(expanded.as_ref());

        if !file.exists() {
            tracing::debug!("Config file '{}' not found, using defaults", file.display());
            return Ok(Self::default());
        }

        tracing::debug!("Loading config from '{}'", file.display());
        let ini = Ini::load_from_file(file)
            .with_context(|| format!("Failed to read config file '{}'", file.display()))?;
        Self::from_ini(&ini)
    }

    /// Read settings from parsed INI sections, keeping defaults for missing keys
    pub fn from_ini(ini: &Ini) -> Result<Self> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("activity")) {
            if let Some(host) = section.get("host") {
                config.activity.host = host.to_string();
            }
            if let Some(username) = section.get("username") {
                config.activity.username = username.to_string();
            }
            if let Some(window) = section.get("window") {
                let window = window
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid activity window '{window}'"))?;
                config.activity.window = validate_window(window)?;
            }
        }

        if let Some(section) = ini.section(Some("now_playing")) {
            if let Some(origin) = section.get("origin") {
                config.now_playing.origin = origin.to_string();
            }
            if let Some(path) = section.get("path") {
                config.now_playing.path = path.to_string();
            }
        }

        if let Some(section) = ini.section(Some("dashboard")) {
            if let Some(secs) = section.get("refresh_secs") {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid refresh_secs '{secs}'"))?;
                config.refresh = refresh_interval(secs);
            }
        }

        Ok(config)
    }

    /// Let command line flags override file settings
    pub fn apply_args(&mut self, args: &CommandLineArgs) -> Result<()> {
        if let Some(username) = args.username() {
            self.activity.username = username.clone();
        }
        if let Some(window) = args.window() {
            self.activity.window = validate_window(window)?;
        }
        if let Some(origin) = args.origin() {
            self.now_playing.origin = origin.clone();
        }
        if let Some(secs) = args.refresh_secs() {
            self.refresh = refresh_interval(secs);
        }
        if let Some(only) = args.only() {
            self.widgets = vec![match only {
                WidgetSelection::Activity => WidgetId::Activity,
                WidgetSelection::NowPlaying => WidgetId::NowPlaying,
            }];
        }
        Ok(())
    }

    pub fn is_enabled(&self, widget: WidgetId) -> bool {
        self.widgets.contains(&widget)
    }
}

fn validate_window(window: usize) -> Result<usize> {
    if window == 0 {
        bail!("Activity window must be at least one day");
    }
    Ok(window)
}

fn refresh_interval(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
