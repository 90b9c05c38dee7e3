//! Per-player assignment and frame state
//!
//! A player is one of four fixed slots. Resolution passes change its
//! assignment, sample ticks change its frames. Edge detection compares the
//! current frame against the previous one.

mod derive;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use hashbrown::HashMap;

use crate::catalog::DeviceModel;
use crate::control_type::{ControlType, Theme};
use crate::events::{Edge, Observers, SlotCallback, SubscriptionId};
use crate::schema::Schema;
use crate::slot::{SLOT_COUNT, SlotName};

pub use derive::DIGITAL_STICK_NUDGE;

/// Number of player slots.
pub const MAX_PLAYERS: usize = 4;

/// Digital and analog values for the bound slots of one tick.
///
/// Unbound slots are absent, not false.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFrame {
    digital: HashMap<SlotName, bool>,
    analog: HashMap<SlotName, f32>,
}

impl PlayerFrame {
    pub fn digital(&self, slot: SlotName) -> Option<bool> {
        self.digital.get(&slot).copied()
    }

    pub fn analog(&self, slot: SlotName) -> Option<f32> {
        self.analog.get(&slot).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.digital.is_empty() && self.analog.is_empty()
    }

    pub(crate) fn has_digital(&self) -> bool {
        !self.digital.is_empty()
    }

    pub(crate) fn set(&mut self, slot: SlotName, pressed: bool, value: f32) {
        self.digital.insert(slot, pressed);
        self.analog.insert(slot, value);
    }

    fn clear(&mut self) {
        self.digital.clear();
        self.analog.clear();
    }
}

/// Everything a resolution pass hands a player.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub control_type: Arc<ControlType>,
    pub model: DeviceModel,
    pub schema: Arc<Schema>,
    pub theme: Theme,
}

impl Assignment {
    /// Assignment for a catalog model, themed by its control type
    pub fn from_model(model: &DeviceModel) -> Self {
        Self {
            control_type: Arc::clone(model.control_type()),
            schema: Arc::clone(model.schema()),
            theme: model.control_type().theme().clone(),
            model: model.clone(),
        }
    }
}

/// Switches for the derived stick and trigger queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeriveSettings {
    /// Unbound stick directions add a fixed nudge on their own axis
    pub unbound_stick_bias: bool,
    /// Analog triggers below their deadzone read 0 instead of negative
    pub clamp_trigger_below_deadzone: bool,
}

impl Default for DeriveSettings {
    fn default() -> Self {
        Self {
            unbound_stick_bias: true,
            clamp_trigger_below_deadzone: false,
        }
    }
}

#[derive(Debug)]
pub struct Player {
    index: usize,
    assignment: Option<Assignment>,
    current: PlayerFrame,
    previous: PlayerFrame,
    settings: DeriveSettings,
    down_observers: [Observers<SlotCallback>; SLOT_COUNT],
    up_observers: [Observers<SlotCallback>; SLOT_COUNT],
}

impl Player {
    pub(crate) fn new(index: usize, settings: DeriveSettings) -> Self {
        Self {
            index,
            assignment: None,
            current: PlayerFrame::default(),
            previous: PlayerFrame::default(),
            settings,
            down_observers: std::array::from_fn(|_| Observers::default()),
            up_observers: std::array::from_fn(|_| Observers::default()),
        }
    }

    /// 0-based position
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based player number
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    pub fn control_type(&self) -> Option<&Arc<ControlType>> {
        self.assignment.as_ref().map(|a| &a.control_type)
    }

    pub fn model(&self) -> Option<&DeviceModel> {
        self.assignment.as_ref().map(|a| &a.model)
    }

    pub fn schema(&self) -> Option<&Arc<Schema>> {
        self.assignment.as_ref().map(|a| &a.schema)
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.assignment.as_ref().map(|a| &a.theme)
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    pub fn has_gamepad(&self) -> bool {
        self.control_type().is_some_and(|t| !t.is_keyboard())
    }

    pub fn has_keyboard(&self) -> bool {
        self.control_type().is_some_and(|t| t.is_keyboard())
    }

    pub fn current(&self) -> &PlayerFrame {
        &self.current
    }

    pub fn previous(&self) -> &PlayerFrame {
        &self.previous
    }

    /// Whether the slot is held this tick; absent slots read as released
    pub fn is_pressed(&self, slot: SlotName) -> bool {
        self.current.digital(slot).unwrap_or(false)
    }

    pub fn analog(&self, slot: SlotName) -> Option<f32> {
        self.current.analog(slot)
    }

    pub fn settings(&self) -> DeriveSettings {
        self.settings
    }

    pub(crate) fn set_settings(&mut self, settings: DeriveSettings) {
        self.settings = settings;
    }

    /// Takes a new assignment and resets both frames so the next tick fires no edges
    pub(crate) fn assign(&mut self, assignment: Assignment) {
        self.assignment = Some(assignment);
        self.reset_frames();
    }

    pub(crate) fn clear_assignment(&mut self) {
        self.assignment = None;
        self.reset_frames();
    }

    /// Swaps the keyboard schema in place; frames are kept
    /// Swap in a new keyboard model without touching the frames
    pub(crate) fn replace_keyboard_layout(&mut self, model: &DeviceModel) {
        if let Some(assignment) = self.assignment.as_mut() {
            *assignment = Assignment::from_model(model);
        }
    }

    fn reset_frames(&mut self) {
        self.current.clear();
        self.previous.clear();
    }

    /// Moves current into previous and starts an empty current frame
    pub(crate) fn begin_frame(&mut self) {
        self.previous = std::mem::take(&mut self.current);
    }

    pub(crate) fn record(&mut self, slot: SlotName, pressed: bool, value: f32) {
        self.current.set(slot, pressed, value);
    }

    /// Transitions between the previous and current frame, in slot order.
    ///
    /// A slot fires only when it was present in the previous frame with the
    /// opposite value.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (SlotName, Edge)> + '_ {
        SlotName::ALL.into_iter().filter_map(|slot| {
            let now = self.current.digital(slot)?;
            let before = self.previous.digital(slot)?;
            match (before, now) {
                (false, true) => Some((slot, Edge::Down)),
                (true, false) => Some((slot, Edge::Up)),
                _ => None,
            }
        })
    }

    pub(crate) fn observers_mut(&mut self, edge: Edge, slot: SlotName) -> &mut Observers<SlotCallback> {
        match edge {
            Edge::Down => &mut self.down_observers[slot.index()],
            Edge::Up => &mut self.up_observers[slot.index()],
        }
    }

    pub(crate) fn fire(&mut self, edge: Edge, slot: SlotName) {
        for callback in self.observers_mut(edge, slot).iter_mut() {
            callback();
        }
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.down_observers
            .iter_mut()
            .chain(self.up_observers.iter_mut())
            .any(|observers| observers.remove(id))
    }
}
