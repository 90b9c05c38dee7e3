//! Stick vectors, trigger values and button labels derived from current state

use glam::Vec2;

use super::Player;
use crate::control_type::symbol_as_word;
use crate::schema::{InputBinding, Schema};
use crate::slot::{Side, SlotName};

/// Offset a digital or unbound stick direction adds on its axis.
pub const DIGITAL_STICK_NUDGE: f32 = 0.7;

impl Player {
    /// Raw stick vector; up and left are negative
    ///
    /// With `unbound_stick_bias` each unbound direction nudges its own axis,
    /// so a stick with no bindings at all reads zero rather than (0.7, -0.7).
    pub fn stick_vector(&self, side: Side) -> Vec2 {
        let Some(schema) = self.schema() else {
            return Vec2::ZERO;
        };
        let [up, down, left, right] = side.stick_slots();
        Vec2::new(
            self.direction_amount(schema, right) - self.direction_amount(schema, left),
            self.direction_amount(schema, down) - self.direction_amount(schema, up),
        )
    }

    /// Stick vector with the radial deadzone removed and rescaled to [0, 1]
    pub fn normalized_stick_vector(&self, side: Side) -> Vec2 {
        let raw = self.stick_vector(side);
        let deadzone = self.radial_deadzone(side);
        let magnitude = raw.length();
        if magnitude < deadzone || magnitude == 0.0 {
            return Vec2::ZERO;
        }
        if deadzone >= 1.0 {
            return raw.normalize_or_zero();
        }
        let scale = ((magnitude - deadzone) / (1.0 - deadzone)).min(1.0);
        raw.normalize_or_zero() * scale
    }

    /// Trigger position mapped from [deadzone, 1] to [0, 1]
    pub fn trigger_value(&self, side: Side) -> f32 {
        let slot = side.trigger_slot();
        let Some(binding) = self.schema().and_then(|schema| schema.get(slot)) else {
            return 0.0;
        };
        match binding {
            InputBinding::Key(_) | InputBinding::Button(_) => {
                if self.is_pressed(slot) {
                    1.0
                } else {
                    0.0
                }
            }
            InputBinding::Axis(axis) => {
                let raw = self.analog(slot).unwrap_or(0.0);
                let deadzone = axis.deadzone();
                let value = if deadzone >= 1.0 {
                    if raw >= deadzone { 1.0 } else { 0.0 }
                } else {
                    (raw - deadzone) / (1.0 - deadzone)
                };
                if self.settings.clamp_trigger_below_deadzone {
                    value.max(0.0)
                } else {
                    value
                }
            }
        }
    }

    /// Display label for a slot on this player's device
    ///
    /// Keyboard players show the bound key's label. Gamepad players show the
    /// control type's label, spelled out as a word when `symbols_as_words`
    /// is set. Unassigned players and unbound keys have no label.
    pub fn button_text(&self, slot: SlotName, symbols_as_words: bool) -> Option<&str> {
        let assignment = self.assignment()?;
        if assignment.control_type.is_keyboard() {
            return match assignment.schema.get(slot)? {
                InputBinding::Key(key) => Some(key.label()),
                _ => None,
            };
        }
        let label = assignment.control_type.label(slot);
        Some(if symbols_as_words {
            symbol_as_word(label)
        } else {
            label
        })
    }

    fn direction_amount(&self, schema: &Schema, slot: SlotName) -> f32 {
        match schema.get(slot) {
            None if self.settings.unbound_stick_bias => DIGITAL_STICK_NUDGE,
            None => 0.0,
            Some(InputBinding::Key(_) | InputBinding::Button(_)) => {
                if self.is_pressed(slot) {
                    DIGITAL_STICK_NUDGE
                } else {
                    0.0
                }
            }
            Some(InputBinding::Axis(axis)) => match self.analog(slot) {
                Some(value) if axis.is_past_deadzone(value) => value.abs(),
                _ => 0.0,
            },
        }
    }

    fn radial_deadzone(&self, side: Side) -> f32 {
        let Some(schema) = self.schema() else {
            return 0.0;
        };
        side.stick_slots()
            .into_iter()
            .filter_map(|slot| match schema.get(slot) {
                Some(InputBinding::Axis(axis)) => Some(axis.deadzone().abs()),
                _ => None,
            })
            .fold(0.0, f32::max)
    }
}
