//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for input settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::device::HostOs;
use crate::error::ConfigError;
use crate::player::DeriveSettings;
use crate::schema::KeyboardPreset;

const CONFIG_FILE: &str = "config.toml";

/// What to do with a device no catalog entry recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Always use the unknown standard mapping model
    #[default]
    Always,
    /// Use it only for devices that report the standard mapping
    StandardOnly,
    /// Leave the device unassigned
    Never,
}

/// Input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Assign the keyboard to the first free player (default: true)
    #[serde(default = "default_true")]
    pub handle_keyboard: bool,
    /// Active keyboard layout (default: QWERTY)
    #[serde(default)]
    pub keyboard_preset: KeyboardPreset,
    /// OS used for specific device matches (default: detected from the build target)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<HostOs>,
    /// Handling of unrecognized devices (default: always)
    #[serde(default)]
    pub unknown_device_fallback: FallbackPolicy,
    /// Unbound stick directions add a fixed nudge (default: true)
    #[serde(default = "default_true")]
    pub unbound_stick_bias: bool,
    /// Clamp analog triggers below their deadzone to 0 (default: false)
    #[serde(default)]
    pub clamp_trigger_below_deadzone: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            handle_keyboard: default_true(),
            keyboard_preset: KeyboardPreset::default(),
            os: None,
            unknown_device_fallback: FallbackPolicy::default(),
            unbound_stick_bias: default_true(),
            clamp_trigger_below_deadzone: false,
        }
    }
}

impl InputConfig {
    /// Configured OS, or the build target's
    pub fn host_os(&self) -> HostOs {
        self.os.unwrap_or_else(HostOs::current)
    }

    pub fn derive_settings(&self) -> DeriveSettings {
        DeriveSettings {
            unbound_stick_bias: self.unbound_stick_bias,
            clamp_trigger_below_deadzone: self.clamp_trigger_below_deadzone,
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\gameinput\GameInput\config`
/// On macOS: `~/Library/Application Support/io.gameinput.GameInput`
/// On Linux: `~/.config/gameinput`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "gameinput", "GameInput")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of `config.toml` in the platform configuration directory
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from disk.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> InputConfig {
    let Some(path) = config_path() else {
        return InputConfig::default();
    };
    if !path.exists() {
        return InputConfig::default();
    }
    load_from(&path).unwrap_or_else(|e| {
        tracing::warn!("{}; using default input config", e);
        InputConfig::default()
    })
}

/// Loads the configuration from `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<InputConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(InputConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the configuration to the platform configuration directory.
///
/// Creates the directory if it doesn't exist.
pub fn save(config: &InputConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Saves the configuration to `path`, creating parent directories.
pub fn save_to(config: &InputConfig, path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = InputConfig::default();
        assert!(config.handle_keyboard);
        assert_eq!(config.keyboard_preset, KeyboardPreset::Qwerty);
        assert_eq!(config.os, None);
        assert_eq!(config.unknown_device_fallback, FallbackPolicy::Always);
        assert!(config.unbound_stick_bias);
        assert!(!config.clamp_trigger_below_deadzone);
    }

    #[test]
    fn test_config_empty_toml_uses_defaults() {
        let config: InputConfig = toml::from_str("").unwrap();
        assert_eq!(config, InputConfig::default());
    }

    #[test]
    fn test_config_partial_toml() {
        let toml_str = r#"
keyboard_preset = "Dvorak"
os = "macOS"
unknown_device_fallback = "standard_only"
"#;
        let config: InputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.keyboard_preset, KeyboardPreset::Dvorak);
        assert_eq!(config.os, Some(HostOs::MacOs));
        assert_eq!(config.host_os(), HostOs::MacOs);
        assert_eq!(config.unknown_device_fallback, FallbackPolicy::StandardOnly);
        assert!(config.handle_keyboard);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = InputConfig {
            handle_keyboard: false,
            keyboard_preset: KeyboardPreset::Azerty,
            os: Some(HostOs::Windows),
            unknown_device_fallback: FallbackPolicy::Never,
            unbound_stick_bias: false,
            clamp_trigger_below_deadzone: true,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("\"AZERTY\""));
        let parsed: InputConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = InputConfig {
            keyboard_preset: KeyboardPreset::Blank,
            ..InputConfig::default()
        };
        save_to(&config, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, InputConfig::default());
    }

    #[test]
    fn test_config_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "keyboard_preset = \"Colemak\"").unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_config_path_file_name() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }

    #[test]
    fn test_derive_settings() {
        let config = InputConfig {
            unbound_stick_bias: false,
            ..InputConfig::default()
        };
        assert!(!config.derive_settings().unbound_stick_bias);
    }
}
