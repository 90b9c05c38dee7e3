//! Error types surfaced by the input core

use std::path::PathBuf;

use crate::slot::SlotName;

/// A schema or binding could not be constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Axis indices are 1-based and signed, so zero carries no direction
    #[error("axis index must be non-zero (1-based, signed by direction)")]
    ZeroAxisIndex,

    /// Button indices are 1-based
    #[error("button index must be non-zero (1-based)")]
    ZeroButtonIndex,

    /// Threshold or deadzone was NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteParameter { field: &'static str, value: f32 },

    /// A keyboard schema slot held a button or axis binding
    #[error("keyboard schema slot `{slot}` must be a key binding or unbound")]
    NonKeyInKeyboardSchema { slot: SlotName },

    /// A gamepad schema slot held a key binding
    #[error("gamepad schema slot `{slot}` cannot hold a key binding")]
    KeyInGamepadSchema { slot: SlotName },

    /// Device models only accept gamepad schemas
    #[error("device models require a gamepad schema, got keyboard schema `{0}`")]
    KeyboardSchemaForDevice(String),

    /// Only exact ids and id patterns can be registered
    #[error("model `{0}` cannot be registered; only exact ids and id patterns can")]
    UnregistrableModel(String),

    /// Device id pattern failed to compile
    #[error("invalid device id pattern: {0}")]
    InvalidPattern(String),
}

/// The caller passed an argument outside the accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown slot name `{0}`")]
    UnknownSlot(String),

    #[error("invalid stick/trigger side `{0}` (must be l or r)")]
    InvalidSide(String),

    #[error("player index {0} out of range (must be 0-3)")]
    PlayerOutOfRange(usize),

    #[error("unknown keyboard preset `{0}` (expected QWERTY, AZERTY, Dvorak or Blank)")]
    UnknownKeyboardPreset(String),

    #[error("unknown operating system `{0}`")]
    UnknownOs(String),
}

/// Reading or writing `config.toml` failed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no platform configuration directory available")]
    NoConfigDir,
}
