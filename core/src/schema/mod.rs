//! Input bindings and the 21-slot schemas built from them
//!
//! A [`Schema`] is either gamepad-flavored (button and axis bindings) or
//! keyboard-flavored (key bindings plus a display name such as "QWERTY").
//! Both share the same slot layout; the flavor decides which binding kinds
//! construction accepts.

pub mod keys;
mod presets;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::error::ValidationError;
use crate::slot::{SLOT_COUNT, SlotName};

pub use presets::{KeyboardPreset, logitech_dual_action, standard_gamepad};

/// Default trigger threshold magnitude for axis bindings.
pub const DEFAULT_AXIS_THRESHOLD: f32 = 0.5;

/// Direction of travel an axis binding responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    pub const fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Positive => 1.0,
        }
    }
}

/// A keyboard key code with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    code: u32,
    label: Cow<'static, str>,
}

impl KeyBinding {
    pub fn new(code: u32, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            label: label.into(),
        }
    }

    pub const fn from_static(code: u32, label: &'static str) -> Self {
        Self {
            code,
            label: Cow::Borrowed(label),
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// 1-based index into a device's digital button array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonBinding {
    index: usize,
}

impl ButtonBinding {
    pub fn new(index: usize) -> Result<Self, ValidationError> {
        if index == 0 {
            return Err(ValidationError::ZeroButtonIndex);
        }
        Ok(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// An analog axis read as a button.
///
/// Threshold and deadzone always carry the sign of the direction, whatever
/// signs were passed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBinding {
    index: usize,
    direction: Direction,
    threshold: f32,
    deadzone: f32,
}

impl AxisBinding {
    /// Axis binding with the default threshold and no deadzone.
    ///
    /// `signed_index` is 1-based; a negative value binds the negative
    /// direction of travel.
    pub fn new(signed_index: i32) -> Result<Self, ValidationError> {
        Self::with_params(signed_index, DEFAULT_AXIS_THRESHOLD, 0.0)
    }

    pub fn with_params(
        signed_index: i32,
        threshold: f32,
        deadzone: f32,
    ) -> Result<Self, ValidationError> {
        if signed_index == 0 {
            return Err(ValidationError::ZeroAxisIndex);
        }
        if !threshold.is_finite() {
            return Err(ValidationError::NonFiniteParameter {
                field: "threshold",
                value: threshold,
            });
        }
        if !deadzone.is_finite() {
            return Err(ValidationError::NonFiniteParameter {
                field: "deadzone",
                value: deadzone,
            });
        }
        Ok(Self::normalized(signed_index, threshold, deadzone))
    }

    /// Builds the binding without validation; callers guarantee a non-zero
    /// index and finite parameters.
    pub(crate) fn normalized(signed_index: i32, threshold: f32, deadzone: f32) -> Self {
        let direction = if signed_index < 0 {
            Direction::Negative
        } else {
            Direction::Positive
        };
        let sign = direction.sign();
        Self {
            index: signed_index.unsigned_abs() as usize,
            direction,
            threshold: sign * threshold.abs(),
            deadzone: sign * deadzone.abs(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Whether `value` is past the trigger threshold in this binding's direction
    pub fn is_pressed(&self, value: f32) -> bool {
        match self.direction {
            Direction::Negative => value < self.threshold,
            Direction::Positive => value > self.threshold,
        }
    }

    /// Whether `value` is past the deadzone in this binding's direction
    pub fn is_past_deadzone(&self, value: f32) -> bool {
        match self.direction {
            Direction::Negative => value < self.deadzone,
            Direction::Positive => value > self.deadzone,
        }
    }
}

/// The raw physical input assigned to a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum InputBinding {
    Key(KeyBinding),
    Button(ButtonBinding),
    Axis(AxisBinding),
}

impl InputBinding {
    pub fn is_key(&self) -> bool {
        matches!(self, InputBinding::Key(_))
    }
}

impl From<KeyBinding> for InputBinding {
    fn from(key: KeyBinding) -> Self {
        InputBinding::Key(key)
    }
}

impl From<ButtonBinding> for InputBinding {
    fn from(button: ButtonBinding) -> Self {
        InputBinding::Button(button)
    }
}

impl From<AxisBinding> for InputBinding {
    fn from(axis: AxisBinding) -> Self {
        InputBinding::Axis(axis)
    }
}

/// Which kind of device a schema describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    Gamepad,
    Keyboard { name: String },
}

/// Slot to binding assignments for one device type.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: SchemaKind,
    bindings: [Option<InputBinding>; SLOT_COUNT],
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self.kind, SchemaKind::Keyboard { .. })
    }

    /// Display name of a keyboard schema
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            SchemaKind::Keyboard { name } => Some(name),
            SchemaKind::Gamepad => None,
        }
    }

    pub fn get(&self, slot: SlotName) -> Option<&InputBinding> {
        self.bindings[slot.index()].as_ref()
    }

    /// Bound slots in schema order
    pub fn iter(&self) -> impl Iterator<Item = (SlotName, &InputBinding)> + '_ {
        SlotName::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|binding| (slot, binding)))
    }

    /// Slot bound to the given key code, if any
    pub fn lookup(&self, key_code: u32) -> Option<SlotName> {
        self.iter().find_map(|(slot, binding)| match binding {
            InputBinding::Key(key) if key.code() == key_code => Some(slot),
            _ => None,
        })
    }
}

/// Collects slot bindings and validates them against a schema flavor.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    bindings: [Option<InputBinding>; SLOT_COUNT],
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            bindings: std::array::from_fn(|_| None),
        }
    }

    pub fn bind(mut self, slot: SlotName, binding: impl Into<InputBinding>) -> Self {
        self.bindings[slot.index()] = Some(binding.into());
        self
    }

    pub fn unbind(mut self, slot: SlotName) -> Self {
        self.bindings[slot.index()] = None;
        self
    }

    /// Finish as a gamepad schema; fails if any slot holds a key binding.
    pub fn gamepad(self) -> Result<Schema, ValidationError> {
        if let Some(slot) = self.first_slot_where(InputBinding::is_key) {
            return Err(ValidationError::KeyInGamepadSchema { slot });
        }
        Ok(self.finish(SchemaKind::Gamepad))
    }

    /// Finish as a named keyboard schema; fails if any slot holds a
    /// button or axis binding.
    pub fn keyboard(self, name: impl Into<String>) -> Result<Schema, ValidationError> {
        if let Some(slot) = self.first_slot_where(|binding| !binding.is_key()) {
            return Err(ValidationError::NonKeyInKeyboardSchema { slot });
        }
        Ok(self.finish(SchemaKind::Keyboard { name: name.into() }))
    }

    pub(crate) fn finish(self, kind: SchemaKind) -> Schema {
        Schema {
            kind,
            bindings: self.bindings,
        }
    }

    fn first_slot_where(&self, pred: impl Fn(&InputBinding) -> bool) -> Option<SlotName> {
        SlotName::ALL.into_iter().find(|slot| {
            self.bindings[slot.index()]
                .as_ref()
                .is_some_and(|binding| pred(binding))
        })
    }
}
