//! Per-tick sampling and button edge dispatch

use hashbrown::HashSet;
use tracing::trace;

use super::GameInput;
use crate::device::RawDeviceSnapshot;
use crate::events::{ButtonEvent, Edge};
use crate::player::Player;
use crate::schema::InputBinding;

impl GameInput {
    /// Refresh every assigned player's state and fire button edges.
    ///
    /// Returns the fired transitions in dispatch order.
    pub fn sample(&mut self) -> Vec<ButtonEvent> {
        for player in &mut self.players {
            if !player.is_assigned() {
                continue;
            }
            player.begin_frame();
            if player.has_keyboard() {
                sample_keys(player, &self.held_keys);
            } else if let Some(device) = &self.devices[player.index()] {
                sample_device(player, device);
            }
        }

        let any_digital = self
            .players
            .iter()
            .any(|player| player.current().has_digital());
        if !any_digital {
            return Vec::new();
        }
        if !self.first_input_seen {
            self.first_input_seen = true;
            trace!("Baseline input tick; edges suppressed");
            return Vec::new();
        }

        let mut events = Vec::new();
        for index in 0..self.players.len() {
            let edges: Vec<_> = self.players[index].edges().collect();
            for (slot, edge) in edges {
                trace!("Player {} {:?} {}", index + 1, edge, slot);
                let global = match edge {
                    Edge::Down => &mut self.button_down,
                    Edge::Up => &mut self.button_up,
                };
                for callback in global.iter_mut() {
                    callback(index, slot);
                }
                self.players[index].fire(edge, slot);
                events.push(ButtonEvent {
                    player: index,
                    slot,
                    edge,
                });
            }
        }
        events
    }
}

fn sample_keys(player: &mut Player, held_keys: &HashSet<u32>) {
    let Some(schema) = player.schema().cloned() else {
        return;
    };
    for (slot, binding) in schema.iter() {
        if let InputBinding::Key(key) = binding {
            let pressed = held_keys.contains(&key.code());
            player.record(slot, pressed, if pressed { 1.0 } else { 0.0 });
        }
    }
}

fn sample_device(player: &mut Player, device: &RawDeviceSnapshot) {
    let Some(schema) = player.schema().cloned() else {
        return;
    };
    for (slot, binding) in schema.iter() {
        match binding {
            InputBinding::Button(button) => {
                if let Some(raw) = device.button(button.index()) {
                    player.record(slot, raw.pressed, if raw.pressed { 1.0 } else { 0.0 });
                }
            }
            InputBinding::Axis(axis) => {
                if let Some(value) = device.axis(axis.index()) {
                    player.record(slot, axis.is_pressed(value), value);
                }
            }
            InputBinding::Key(_) => {}
        }
    }
}
