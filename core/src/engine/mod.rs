//! The `GameInput` context: device resolution, sampling and event dispatch
//!
//! One context owns the player array, the device catalog and the keyboard
//! state. The embedding application drives it by calling [`GameInput::update`]
//! once per frame, or [`GameInput::refresh_devices`] and
//! [`GameInput::sample`] separately, and feeds it key transitions through
//! [`GameInput::key_event`].

mod keyboard;
mod resolve;
mod sample;

use std::sync::Arc;

use hashbrown::HashSet;

use crate::catalog::{DeviceCatalog, DeviceModel};
use crate::config::InputConfig;
use crate::control_type::ControlType;
use crate::device::{DeviceSlots, DeviceSource, HostOs};
use crate::error::UsageError;
use crate::events::{
    ButtonCallback, ButtonEvent, Edge, Observers, ReshuffleCallback, ReshufflePhase,
    SubscriptionId,
};
use crate::player::{MAX_PLAYERS, Player};
use crate::schema::Schema;
use crate::slot::SlotName;

/// Outcome of one [`GameInput::update`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Whether the device set changed and a resolution pass ran
    pub resolved: bool,
    /// Button transitions fired this tick, in dispatch order
    pub events: Vec<ButtonEvent>,
}

pub struct GameInput {
    config: InputConfig,
    os: HostOs,
    catalog: DeviceCatalog,
    players: [Player; MAX_PLAYERS],

    keyboard_type: Arc<ControlType>,
    keyboard_schema: Arc<Schema>,
    keyboard_player: Option<usize>,
    /// Key codes currently held, fed by `key_event`
    held_keys: HashSet<u32>,

    /// Latest snapshots, read by sampling
    devices: DeviceSlots,
    /// Identity per position at the last resolution pass
    last_identities: Option<[Option<String>; MAX_PLAYERS]>,
    had_devices: bool,
    /// Edge events stay suppressed until one tick has set a baseline
    first_input_seen: bool,

    button_down: Observers<ButtonCallback>,
    button_up: Observers<ButtonCallback>,
    reshuffle: Observers<ReshuffleCallback>,
    next_subscription: u64,
}

impl Default for GameInput {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl GameInput {
    /// Create a context with the built-in device catalog
    pub fn new(config: InputConfig) -> Self {
        Self::with_catalog(config, DeviceCatalog::with_builtin_models())
    }

    pub fn with_catalog(config: InputConfig, catalog: DeviceCatalog) -> Self {
        let settings = config.derive_settings();
        Self {
            os: config.host_os(),
            keyboard_schema: Arc::new(config.keyboard_preset.schema()),
            keyboard_type: Arc::new(ControlType::keyboard(config.keyboard_preset.theme())),
            config,
            catalog,
            players: std::array::from_fn(|index| Player::new(index, settings)),
            keyboard_player: None,
            held_keys: HashSet::new(),
            devices: Default::default(),
            last_identities: None,
            had_devices: false,
            first_input_seen: false,
            button_down: Observers::default(),
            button_up: Observers::default(),
            reshuffle: Observers::default(),
            next_subscription: 0,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Apply a new configuration.
    ///
    /// A preset change switches the keyboard layout. Keyboard handling, OS
    /// and fallback changes take effect on the next resolution pass, which
    /// the next `update` forces.
    pub fn update_config(&mut self, config: InputConfig) {
        let settings = config.derive_settings();
        for player in &mut self.players {
            player.set_settings(settings);
        }
        let preset_changed = config.keyboard_preset != self.config.keyboard_preset;
        let needs_resolve = config.handle_keyboard != self.config.handle_keyboard
            || config.host_os() != self.os
            || config.unknown_device_fallback != self.config.unknown_device_fallback;

        self.os = config.host_os();
        let preset = config.keyboard_preset;
        self.config = config;
        if preset_changed {
            self.set_keyboard_preset(preset);
        }
        if needs_resolve {
            self.last_identities = None;
        }
    }

    pub fn os(&self) -> HostOs {
        self.os
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    /// Catalog for host registration during setup
    pub fn catalog_mut(&mut self) -> &mut DeviceCatalog {
        &mut self.catalog
    }

    pub fn player(&self, index: usize) -> Result<&Player, UsageError> {
        self.players
            .get(index)
            .ok_or(UsageError::PlayerOutOfRange(index))
    }

    pub fn player_mut(&mut self, index: usize) -> Result<&mut Player, UsageError> {
        self.players
            .get_mut(index)
            .ok_or(UsageError::PlayerOutOfRange(index))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player currently on the keyboard
    pub fn keyboard_player(&self) -> Option<usize> {
        self.keyboard_player
    }

    /// Whether the first baseline tick has happened since devices last changed
    pub fn first_input_seen(&self) -> bool {
        self.first_input_seen
    }

    fn next_id(&mut self) -> SubscriptionId {
        self.next_subscription += 1;
        SubscriptionId(self.next_subscription)
    }

    /// Fires for every player and slot press
    pub fn on_button_down(&mut self, callback: impl FnMut(usize, SlotName) + 'static) -> SubscriptionId {
        let id = self.next_id();
        self.button_down.push(id, Box::new(callback));
        id
    }

    /// Fires for every player and slot release
    pub fn on_button_up(&mut self, callback: impl FnMut(usize, SlotName) + 'static) -> SubscriptionId {
        let id = self.next_id();
        self.button_up.push(id, Box::new(callback));
        id
    }

    /// Fires when `slot` is pressed on one player, after the global subscribers
    pub fn on_player_button_down(
        &mut self,
        player: usize,
        slot: SlotName,
        callback: impl FnMut() + 'static,
    ) -> Result<SubscriptionId, UsageError> {
        self.subscribe_slot(player, slot, Edge::Down, Box::new(callback))
    }

    /// Fires when `slot` is released on one player, after the global subscribers
    pub fn on_player_button_up(
        &mut self,
        player: usize,
        slot: SlotName,
        callback: impl FnMut() + 'static,
    ) -> Result<SubscriptionId, UsageError> {
        self.subscribe_slot(player, slot, Edge::Up, Box::new(callback))
    }

    fn subscribe_slot(
        &mut self,
        player: usize,
        slot: SlotName,
        edge: Edge,
        callback: Box<dyn FnMut()>,
    ) -> Result<SubscriptionId, UsageError> {
        if player >= MAX_PLAYERS {
            return Err(UsageError::PlayerOutOfRange(player));
        }
        let id = self.next_id();
        self.players[player].observers_mut(edge, slot).push(id, callback);
        Ok(id)
    }

    /// Fires before and after every resolution pass and on keyboard preset switches
    pub fn on_reshuffle_players(
        &mut self,
        callback: impl FnMut(ReshufflePhase, &[Player]) + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.reshuffle.push(id, Box::new(callback));
        id
    }

    /// Detach a subscriber; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.button_down.remove(id)
            || self.button_up.remove(id)
            || self.reshuffle.remove(id)
            || self.players.iter_mut().any(|player| player.unsubscribe(id))
    }

    fn notify_reshuffle(&mut self, phase: ReshufflePhase) {
        for callback in self.reshuffle.iter_mut() {
            callback(phase, &self.players);
        }
    }

    fn keyboard_model(&self) -> DeviceModel {
        DeviceModel::keyboard(
            Arc::clone(&self.keyboard_type),
            Arc::clone(&self.keyboard_schema),
        )
    }

    /// Poll `source`, resolve if the device set changed, then sample every player
    pub fn update(&mut self, source: &mut (impl DeviceSource + ?Sized)) -> TickReport {
        let resolved = self.refresh_devices(source.poll_devices());
        let events = self.sample();
        TickReport { resolved, events }
    }
}
