//! Raw device snapshots supplied by the environment

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;
use crate::player::MAX_PLAYERS;

/// One digital button as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawButton {
    pub pressed: bool,
    pub value: f32,
}

impl RawButton {
    pub fn new(pressed: bool, value: f32) -> Self {
        Self { pressed, value }
    }

    /// A fully pressed or fully released digital button
    pub fn digital(pressed: bool) -> Self {
        Self {
            pressed,
            value: if pressed { 1.0 } else { 0.0 },
        }
    }
}

/// Whether the device reports the standard gamepad layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceMapping {
    Standard,
    #[default]
    NonStandard,
}

/// Read-only view of one connected device at poll time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDeviceSnapshot {
    pub id: String,
    pub mapping: DeviceMapping,
    pub buttons: Vec<RawButton>,
    pub axes: Vec<f32>,
}

impl RawDeviceSnapshot {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_mapping(mut self, mapping: DeviceMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = RawButton>) -> Self {
        self.buttons = buttons.into_iter().collect();
        self
    }

    pub fn with_axes(mut self, axes: impl IntoIterator<Item = f32>) -> Self {
        self.axes = axes.into_iter().collect();
        self
    }

    /// Button by 1-based index
    pub fn button(&self, index: usize) -> Option<&RawButton> {
        index.checked_sub(1).and_then(|i| self.buttons.get(i))
    }

    /// Axis reading by 1-based index
    pub fn axis(&self, index: usize) -> Option<f32> {
        index.checked_sub(1).and_then(|i| self.axes.get(i)).copied()
    }

    pub fn is_standard(&self) -> bool {
        self.mapping == DeviceMapping::Standard
    }
}

/// Per-position device snapshots; `None` means nothing is connected there.
pub type DeviceSlots = [Option<RawDeviceSnapshot>; MAX_PLAYERS];

/// Supplies raw device snapshots on demand.
pub trait DeviceSource {
    fn poll_devices(&mut self) -> DeviceSlots;
}

/// A fixed set of snapshots, handy for scripted drivers and tests.
impl DeviceSource for DeviceSlots {
    fn poll_devices(&mut self) -> DeviceSlots {
        self.clone()
    }
}

/// Operating system used to qualify specific device matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostOs {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
    Other,
}

impl HostOs {
    pub const ALL: [HostOs; 6] = [
        HostOs::Android,
        HostOs::Ios,
        HostOs::Windows,
        HostOs::MacOs,
        HostOs::Linux,
        HostOs::Other,
    ];

    /// OS of the build target
    pub fn current() -> Self {
        match std::env::consts::OS {
            "android" => HostOs::Android,
            "ios" => HostOs::Ios,
            "windows" => HostOs::Windows,
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HostOs::Android => "Android",
            HostOs::Ios => "iOS",
            HostOs::Windows => "Windows",
            HostOs::MacOs => "macOS",
            HostOs::Linux => "Linux",
            HostOs::Other => "Other",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostOs {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HostOs::ALL
            .into_iter()
            .find(|os| os.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UsageError::UnknownOs(s.to_string()))
    }
}

/// Device identity with non-ASCII characters stripped, for exact comparisons
pub(crate) fn ascii_identity(id: &str) -> String {
    id.chars().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_lookup() {
        let snapshot = RawDeviceSnapshot::new("pad")
            .with_buttons([RawButton::digital(true), RawButton::digital(false)])
            .with_axes([0.25, -1.0]);
        assert_eq!(snapshot.button(0), None);
        assert_eq!(snapshot.button(1), Some(&RawButton::digital(true)));
        assert_eq!(snapshot.button(3), None);
        assert_eq!(snapshot.axis(2), Some(-1.0));
        assert_eq!(snapshot.axis(3), None);
    }

    #[test]
    fn test_digital_button_value() {
        assert_eq!(RawButton::digital(true).value, 1.0);
        assert_eq!(RawButton::digital(false).value, 0.0);
    }

    #[test]
    fn test_host_os_parse() {
        assert_eq!("windows".parse::<HostOs>(), Ok(HostOs::Windows));
        assert_eq!("macOS".parse::<HostOs>(), Ok(HostOs::MacOs));
        assert_eq!("iOS".parse::<HostOs>(), Ok(HostOs::Ios));
        assert_eq!(
            "Plan9".parse::<HostOs>(),
            Err(UsageError::UnknownOs("Plan9".to_string()))
        );
    }

    #[test]
    fn test_ascii_identity() {
        assert_eq!(ascii_identity("Vendor™ 123"), "Vendor 123");
        assert_eq!(ascii_identity("plain"), "plain");
    }

    #[test]
    fn test_slots_source_returns_snapshots() {
        let mut slots: DeviceSlots = Default::default();
        slots[2] = Some(RawDeviceSnapshot::new("pad"));
        let polled = slots.poll_devices();
        assert!(polled[0].is_none());
        assert_eq!(polled[2].as_ref().map(|d| d.id.as_str()), Some("pad"));
    }
}
