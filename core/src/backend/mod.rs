//! Device sources for real hardware

#[cfg(feature = "gamepad")]
mod gilrs_source;

#[cfg(feature = "gamepad")]
pub use gilrs_source::GilrsDeviceSource;
