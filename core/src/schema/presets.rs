//! Built-in gamepad schemas and keyboard layout presets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keys;
use super::{AxisBinding, ButtonBinding, DEFAULT_AXIS_THRESHOLD, InputBinding, Schema, SchemaKind};
use crate::control_type::Theme;
use crate::error::UsageError;
use crate::slot::SlotName;

fn button(index: usize) -> InputBinding {
    InputBinding::Button(ButtonBinding { index })
}

fn axis(signed_index: i32) -> InputBinding {
    InputBinding::Axis(AxisBinding::normalized(
        signed_index,
        DEFAULT_AXIS_THRESHOLD,
        0.0,
    ))
}

fn with_sticks(builder: super::SchemaBuilder) -> super::SchemaBuilder {
    builder
        .bind(SlotName::LUp, axis(-2))
        .bind(SlotName::LDown, axis(2))
        .bind(SlotName::LLeft, axis(-1))
        .bind(SlotName::LRight, axis(1))
        .bind(SlotName::RUp, axis(-4))
        .bind(SlotName::RDown, axis(4))
        .bind(SlotName::RLeft, axis(-3))
        .bind(SlotName::RRight, axis(3))
}

/// Layout reported by devices that follow the standard gamepad mapping.
pub fn standard_gamepad() -> Schema {
    with_sticks(
        Schema::builder()
            .bind(SlotName::DUp, button(13))
            .bind(SlotName::DDown, button(14))
            .bind(SlotName::DLeft, button(15))
            .bind(SlotName::DRight, button(16))
            .bind(SlotName::Menu, button(10))
            .bind(SlotName::Button0, button(1))
            .bind(SlotName::Button1, button(2))
            .bind(SlotName::Button2, button(3))
            .bind(SlotName::Button3, button(4)),
    )
    .bind(SlotName::LButton, button(5))
    .bind(SlotName::RButton, button(6))
    .bind(SlotName::LTrigger, button(7))
    .bind(SlotName::RTrigger, button(8))
    .finish(SchemaKind::Gamepad)
}

/// Logitech Rumblepad 2 / Dual Action in DirectInput mode.
///
/// Shoulders and triggers are left unbound.
pub fn logitech_dual_action() -> Schema {
    with_sticks(
        Schema::builder()
            .bind(SlotName::DUp, button(12))
            .bind(SlotName::DDown, button(13))
            .bind(SlotName::DLeft, button(14))
            .bind(SlotName::DRight, button(15))
            .bind(SlotName::Menu, button(10))
            .bind(SlotName::Button0, button(2))
            .bind(SlotName::Button1, button(3))
            .bind(SlotName::Button2, button(1))
            .bind(SlotName::Button3, button(4)),
    )
    .finish(SchemaKind::Gamepad)
}

/// Named keyboard layouts the keyboard player can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyboardPreset {
    #[default]
    #[serde(rename = "QWERTY")]
    Qwerty,
    #[serde(rename = "AZERTY")]
    Azerty,
    #[serde(rename = "Dvorak")]
    Dvorak,
    #[serde(rename = "Blank")]
    Blank,
}

impl KeyboardPreset {
    pub const ALL: [KeyboardPreset; 4] = [
        KeyboardPreset::Qwerty,
        KeyboardPreset::Azerty,
        KeyboardPreset::Dvorak,
        KeyboardPreset::Blank,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            KeyboardPreset::Qwerty => "QWERTY",
            KeyboardPreset::Azerty => "AZERTY",
            KeyboardPreset::Dvorak => "Dvorak",
            KeyboardPreset::Blank => "Blank",
        }
    }

    /// Theme applied to the keyboard player while this preset is active
    pub fn theme(self) -> Theme {
        Theme::new(self.name())
    }

    /// Key bindings for this layout. Stick directions are never bound.
    pub fn schema(self) -> Schema {
        let builder = Schema::builder();
        let [b0, b1, b2, b3, lb, rb, lt, rt] = match self {
            KeyboardPreset::Qwerty => [
                keys::KEY_A,
                keys::KEY_S,
                keys::KEY_D,
                keys::KEY_F,
                keys::KEY_Q,
                keys::KEY_W,
                keys::KEY_E,
                keys::KEY_R,
            ],
            KeyboardPreset::Azerty => [
                keys::KEY_Q,
                keys::KEY_S,
                keys::KEY_D,
                keys::KEY_F,
                keys::KEY_A,
                keys::KEY_Z,
                keys::KEY_E,
                keys::KEY_R,
            ],
            KeyboardPreset::Dvorak => [
                keys::KEY_A,
                keys::KEY_O,
                keys::KEY_E,
                keys::KEY_U,
                keys::SINGLE_QUOTE,
                keys::COMMA,
                keys::PERIOD,
                keys::KEY_P,
            ],
            KeyboardPreset::Blank => {
                return builder.finish(SchemaKind::Keyboard {
                    name: self.name().to_string(),
                });
            }
        };

        builder
            .bind(SlotName::DUp, keys::UP_ARROW)
            .bind(SlotName::DDown, keys::DOWN_ARROW)
            .bind(SlotName::DLeft, keys::LEFT_ARROW)
            .bind(SlotName::DRight, keys::RIGHT_ARROW)
            .bind(SlotName::Menu, keys::ENTER)
            .bind(SlotName::Button0, b0)
            .bind(SlotName::Button1, b1)
            .bind(SlotName::Button2, b2)
            .bind(SlotName::Button3, b3)
            .bind(SlotName::LButton, lb)
            .bind(SlotName::RButton, rb)
            .bind(SlotName::LTrigger, lt)
            .bind(SlotName::RTrigger, rt)
            .finish(SchemaKind::Keyboard {
                name: self.name().to_string(),
            })
    }
}

impl fmt::Display for KeyboardPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardPreset {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyboardPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UsageError::UnknownKeyboardPreset(s.to_string()))
    }
}
