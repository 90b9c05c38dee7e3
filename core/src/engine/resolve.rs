//! Device resolution passes

use tracing::{info, warn};

use super::GameInput;
use crate::device::DeviceSlots;
use crate::events::ReshufflePhase;
use crate::player::Assignment;

impl GameInput {
    /// Store new snapshots and run a resolution pass if the identities changed.
    ///
    /// Returns whether a pass ran.
    pub fn refresh_devices(&mut self, devices: DeviceSlots) -> bool {
        let identities = devices
            .each_ref()
            .map(|device| device.as_ref().map(|d| d.id.clone()));
        self.devices = devices;
        if self.last_identities.as_ref() == Some(&identities) {
            return false;
        }
        self.last_identities = Some(identities);
        self.resolve();
        true
    }

    /// Clear every assignment and rebuild it from the stored snapshots
    pub fn resolve(&mut self) {
        self.notify_reshuffle(ReshufflePhase::Before);

        for player in &mut self.players {
            player.clear_assignment();
        }
        self.keyboard_player = None;

        let connected = self.devices.iter().flatten().count();
        if connected == 0 || !self.had_devices {
            self.first_input_seen = false;
        }
        self.had_devices = connected > 0;

        let policy = self.config.unknown_device_fallback;
        for (index, device) in self.devices.iter().enumerate() {
            let Some(device) = device else {
                continue;
            };
            match self.catalog.find(device, self.os, policy) {
                Some(found) => {
                    self.players[index].assign(Assignment::from_model(found.model));
                }
                None => {
                    warn!(
                        "Device '{}' at position {} not recognized; player {} left unassigned",
                        device.id,
                        index,
                        index + 1
                    );
                }
            }
        }

        if self.config.handle_keyboard {
            let model = self.keyboard_model();
            if let Some(player) = self.players.iter_mut().find(|p| !p.is_assigned()) {
                player.assign(Assignment::from_model(&model));
                self.keyboard_player = Some(player.index());
            }
        }

        for player in self.players.iter().filter(|p| p.is_assigned()) {
            if let Some(model) = player.model() {
                info!(
                    "Player {}: {} ({}, {})",
                    player.number(),
                    model.describe(),
                    model.icon_name(),
                    model.control_type().name()
                );
            }
        }
        info!(
            "Resolved {} device(s), keyboard player: {:?}",
            connected,
            self.keyboard_player.map(|i| i + 1)
        );

        self.notify_reshuffle(ReshufflePhase::After);
    }
}
