//! Game configuration (window, pacing, world seed). Loaded from config.ron at startup.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Startup settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels. The play-field is always 1000×750 and is stretched to fit.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Enable vsync (recommended to avoid tearing).
    #[serde(default = "default_true")]
    pub vsync: bool,
    /// Frame cap used when vsync is off. Orbit speeds are per frame, so this is also the sim rate.
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
    /// Fixed galaxy seed. `None` rolls a new galaxy every run.
    #[serde(default)]
    pub world_seed: Option<u64>,
    /// Draw the frame rate in the top-right corner.
    #[serde(default)]
    pub show_fps: bool,
}

fn default_window_width() -> u32 {
    1000
}
fn default_window_height() -> u32 {
    750
}
fn default_true() -> bool {
    true
}
fn default_target_fps() -> u32 {
    engine_core::TARGET_FPS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            vsync: default_true(),
            target_fps: default_target_fps(),
            world_seed: None,
            show_fps: false,
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, warning and falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("No config at {:?} ({}), using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Parse a RON document; absent fields take their defaults.
    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = GameConfig::parse("(world_seed: Some(42), show_fps: true)").unwrap();
        assert_eq!(config.world_seed, Some(42));
        assert!(config.show_fps);
        assert_eq!(config.window_width, 1000);
        assert_eq!(config.window_height, 750);
        assert!(config.vsync);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn empty_struct_is_default() {
        assert_eq!(GameConfig::parse("()").unwrap(), GameConfig::default());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(GameConfig::parse("(window_width: \"wide\")").is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("galaxy-explorer-no-such-dir").join("config.ron");
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }

    #[test]
    fn invalid_file_loads_defaults() {
        let path = std::env::temp_dir().join(format!("galaxy-explorer-bad-{}.ron", std::process::id()));
        std::fs::write(&path, "(vsync: 3)").unwrap();
        let config = GameConfig::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
