//! GameInput Core - Controller identity and schema resolution
//!
//! Normalizes keyboards and gamepads into one 21-slot logical control schema
//! per player, tracks edge-triggered button state, and derives stick and
//! trigger values.
//!
//! # Architecture
//!
//! - [`Schema`] - Slot to binding layout for one device type
//! - [`DeviceCatalog`] - Maps device identities to control types and schemas
//! - [`Player`] - Assignment and per-tick state for one of four players
//! - [`GameInput`] - Resolution, sampling and event dispatch context
//! - [`DeviceSource`] - Supplies raw device snapshots each tick

pub mod backend;
pub mod catalog;
pub mod config;
pub mod control_type;
pub mod device;
pub mod engine;
pub mod error;
pub mod events;
pub mod keycode;
pub mod player;
pub mod schema;
pub mod slot;

// Re-export core types
pub use catalog::{CatalogMatch, DeviceCatalog, DeviceModel, IdPattern, MatchKind, ModelIdentity};
pub use config::{FallbackPolicy, InputConfig};
pub use control_type::{ControlType, Theme};
pub use device::{
    DeviceMapping, DeviceSlots, DeviceSource, HostOs, RawButton, RawDeviceSnapshot,
};
pub use engine::{GameInput, TickReport};
pub use error::{ConfigError, UsageError, ValidationError};
pub use events::{ButtonEvent, Edge, ReshufflePhase, SubscriptionId};
pub use player::{Assignment, DeriveSettings, MAX_PLAYERS, Player, PlayerFrame};
pub use schema::{
    AxisBinding, ButtonBinding, Direction, InputBinding, KeyBinding, KeyboardPreset, Schema,
    SchemaBuilder, SchemaKind,
};
pub use slot::{SLOT_COUNT, Side, SlotName};

// Re-export the vector type used by stick queries
pub use glam::Vec2;

#[cfg(feature = "gamepad")]
pub use backend::GilrsDeviceSource;
