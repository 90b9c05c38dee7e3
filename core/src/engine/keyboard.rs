//! Keyboard transitions and layout switching

use std::sync::Arc;

use tracing::{debug, info};

use super::GameInput;
use crate::control_type::ControlType;
use crate::events::ReshufflePhase;
use crate::schema::{KeyboardPreset, Schema};
use crate::slot::SlotName;

impl GameInput {
    /// Record one physical key transition.
    ///
    /// Returns the slot the active layout binds `code` to. Presses of
    /// unbound keys are not recorded; releases always are, even while
    /// keyboard handling is off. Presses are ignored while it is off.
    pub fn key_event(&mut self, code: u32, pressed: bool) -> Option<SlotName> {
        if !pressed {
            self.held_keys.remove(&code);
        }
        if !self.config.handle_keyboard {
            return None;
        }
        let slot = self.keyboard_schema.lookup(code);
        if pressed && slot.is_some() {
            self.held_keys.insert(code);
        }
        debug!(
            "Key {} {} -> {:?}",
            code,
            if pressed { "down" } else { "up" },
            slot
        );
        slot
    }

    pub fn keyboard_preset(&self) -> KeyboardPreset {
        self.config.keyboard_preset
    }

    /// Schema of the active keyboard preset
    pub fn keyboard_schema(&self) -> &Arc<Schema> {
        &self.keyboard_schema
    }

    /// Switch the keyboard layout.
    ///
    /// If a player is on the keyboard its schema and theme change in place
    /// and one reshuffle notification fires.
    pub fn set_keyboard_preset(&mut self, preset: KeyboardPreset) {
        self.config.keyboard_preset = preset;
        self.keyboard_schema = Arc::new(preset.schema());
        self.keyboard_type = Arc::new(ControlType::keyboard(preset.theme()));
        info!("Keyboard preset set to {}", preset);

        let Some(index) = self.keyboard_player else {
            return;
        };
        let model = self.keyboard_model();
        self.players[index].replace_keyboard_layout(&model);
        self.notify_reshuffle(ReshufflePhase::KeyboardPreset);
    }
}
