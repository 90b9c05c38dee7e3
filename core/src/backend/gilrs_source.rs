//! Gamepad snapshots from gilrs

use gilrs::{Axis, Button, GamepadId, Gilrs, MappingSource};

use crate::device::{DeviceMapping, DeviceSlots, DeviceSource, RawButton, RawDeviceSnapshot};
use crate::player::MAX_PLAYERS;

/// Buttons in standard gamepad order, so index 1 is the south face button
const STANDARD_BUTTONS: [Button; 17] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::Mode,
];

/// Device source backed by gilrs.
///
/// Gamepads keep the position they connected at until they disconnect.
pub struct GilrsDeviceSource {
    /// None if initialization failed
    gilrs: Option<Gilrs>,
    slots: [Option<GamepadId>; MAX_PLAYERS],
}

impl Default for GilrsDeviceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GilrsDeviceSource {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize gamepad support: {}. Gamepads will not be available.",
                    e
                );
                None
            }
        };

        let mut source = Self {
            gilrs,
            slots: [None; MAX_PLAYERS],
        };
        let connected: Vec<GamepadId> = source
            .gilrs
            .iter()
            .flat_map(|gilrs| gilrs.gamepads().map(|(id, _)| id))
            .collect();
        for id in connected {
            source.attach(id);
        }
        source
    }

    /// Whether gilrs initialized
    pub fn is_available(&self) -> bool {
        self.gilrs.is_some()
    }

    fn attach(&mut self, id: GamepadId) {
        if self.slots.contains(&Some(id)) {
            return;
        }
        match first_free_slot(&self.slots) {
            Some(slot) => {
                self.slots[slot] = Some(id);
                tracing::info!("Gamepad {} connected at position {}", id, slot);
            }
            None => {
                tracing::warn!("Gamepad {} connected but no free positions", id);
            }
        }
    }

    fn detach(&mut self, id: GamepadId) {
        if let Some(slot) = self.slots.iter().position(|s| *s == Some(id)) {
            self.slots[slot] = None;
            tracing::info!("Gamepad {} (position {}) disconnected", id, slot);
        }
    }

    fn pump_events(&mut self) {
        let mut changes = Vec::new();
        if let Some(gilrs) = self.gilrs.as_mut() {
            while let Some(event) = gilrs.next_event() {
                match event.event {
                    gilrs::EventType::Connected => changes.push((event.id, true)),
                    gilrs::EventType::Disconnected => changes.push((event.id, false)),
                    _ => {}
                }
            }
        }
        for (id, connected) in changes {
            if connected {
                self.attach(id);
            } else {
                self.detach(id);
            }
        }
    }
}

impl DeviceSource for GilrsDeviceSource {
    fn poll_devices(&mut self) -> DeviceSlots {
        self.pump_events();
        let Some(gilrs) = self.gilrs.as_ref() else {
            return Default::default();
        };
        self.slots.map(|slot| {
            let gamepad = gilrs.connected_gamepad(slot?)?;
            Some(snapshot(&gamepad))
        })
    }
}

fn snapshot(gamepad: &gilrs::Gamepad<'_>) -> RawDeviceSnapshot {
    let mapping = match gamepad.mapping_source() {
        MappingSource::None => DeviceMapping::NonStandard,
        _ => DeviceMapping::Standard,
    };
    let buttons = STANDARD_BUTTONS.iter().map(|&button| {
        let pressed = gamepad.is_pressed(button);
        let value = gamepad
            .button_data(button)
            .map(|data| data.value())
            .unwrap_or(if pressed { 1.0 } else { 0.0 });
        RawButton::new(pressed, value)
    });
    // gilrs reports up as positive Y; snapshots use down-positive
    let axes = [
        gamepad.value(Axis::LeftStickX),
        -gamepad.value(Axis::LeftStickY),
        gamepad.value(Axis::RightStickX),
        -gamepad.value(Axis::RightStickY),
    ];
    RawDeviceSnapshot::new(gamepad.name())
        .with_mapping(mapping)
        .with_buttons(buttons)
        .with_axes(axes)
}

/// Lowest free position, if any
fn first_free_slot<T>(slots: &[Option<T>]) -> Option<usize> {
    slots.iter().position(Option::is_none)
}
