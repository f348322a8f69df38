use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use sdkui_platform::AppPaths;
use sdkui_sdkman::Timeouts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeSetting,

    #[serde(default = "default_candidate")]
    pub candidate: String,

    #[serde(default)]
    pub sdkman_dir: Option<PathBuf>,

    #[serde(default)]
    pub candidates_api: Option<String>,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default)]
    pub window_geometry: Option<WindowGeometry>,

    #[serde(default = "default_install_timeout")]
    pub install_timeout_secs: u64,

    #[serde(default = "default_operation_timeout")]
    pub operation_timeout_secs: u64,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    #[serde(default = "default_toast_timeout")]
    pub toast_timeout_secs: u64,

    #[serde(default = "default_max_visible_toasts")]
    pub max_visible_toasts: usize,

    #[serde(default = "default_max_log_size")]
    pub max_log_size_bytes: u64,
}

fn default_candidate() -> String {
    "java".to_string()
}

fn default_install_timeout() -> u64 {
    600
}

fn default_operation_timeout() -> u64 {
    60
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_http_timeout() -> u64 {
    10
}

fn default_toast_timeout() -> u64 {
    5
}

fn default_max_visible_toasts() -> usize {
    3
}

fn default_max_log_size() -> u64 {
    5 * 1024 * 1024
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::default(),
            candidate: default_candidate(),
            sdkman_dir: None,
            candidates_api: None,
            debug_logging: false,
            window_geometry: None,
            install_timeout_secs: default_install_timeout(),
            operation_timeout_secs: default_operation_timeout(),
            fetch_timeout_secs: default_fetch_timeout(),
            http_timeout_secs: default_http_timeout(),
            toast_timeout_secs: default_toast_timeout(),
            max_visible_toasts: default_max_visible_toasts(),
            max_log_size_bytes: default_max_log_size(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let Ok(paths) = AppPaths::new() else {
            return Self::default();
        };
        Self::load_from(&paths.settings_file())
    }

    fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let paths = AppPaths::new().map_err(std::io::Error::other)?;
        paths.ensure_dirs()?;

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), content)?;
        Ok(())
    }

    pub fn backend_timeouts(&self) -> Timeouts {
        Timeouts {
            install: Duration::from_secs(self.install_timeout_secs),
            operation: Duration::from_secs(self.operation_timeout_secs),
            fetch: Duration::from_secs(self.fetch_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl WindowGeometry {
    pub fn is_likely_visible(&self) -> bool {
        const MIN_VISIBLE: f32 = -50.0;
        const MAX_COORD: f32 = 16_384.0;
        const MIN_SIZE: f32 = 100.0;

        self.x > MIN_VISIBLE
            && self.y > MIN_VISIBLE
            && self.x < MAX_COORD
            && self.y < MAX_COORD
            && self.width >= MIN_SIZE
            && self.height >= MIN_SIZE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ThemeSetting {
    #[default]
    System,
    Light,
    Dark,
}
