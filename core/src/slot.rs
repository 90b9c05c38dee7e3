//! The 21 logical control slots every schema is laid out over

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;

/// Number of logical control slots in a schema.
pub const SLOT_COUNT: usize = 21;

/// One logical control position.
///
/// The string form (`d_up`, `button0`, `l_trigger`, ...) is what hosts
/// use when they address slots by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotName {
    DUp,
    DDown,
    DLeft,
    DRight,
    Menu,
    Button0,
    Button1,
    Button2,
    Button3,
    LUp,
    LDown,
    LLeft,
    LRight,
    RUp,
    RDown,
    RLeft,
    RRight,
    LButton,
    RButton,
    LTrigger,
    RTrigger,
}

impl SlotName {
    /// Every slot, in schema order.
    pub const ALL: [SlotName; SLOT_COUNT] = [
        SlotName::DUp,
        SlotName::DDown,
        SlotName::DLeft,
        SlotName::DRight,
        SlotName::Menu,
        SlotName::Button0,
        SlotName::Button1,
        SlotName::Button2,
        SlotName::Button3,
        SlotName::LUp,
        SlotName::LDown,
        SlotName::LLeft,
        SlotName::LRight,
        SlotName::RUp,
        SlotName::RDown,
        SlotName::RLeft,
        SlotName::RRight,
        SlotName::LButton,
        SlotName::RButton,
        SlotName::LTrigger,
        SlotName::RTrigger,
    ];

    /// Position of this slot in schema order (0-20)
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SlotName::DUp => "d_up",
            SlotName::DDown => "d_down",
            SlotName::DLeft => "d_left",
            SlotName::DRight => "d_right",
            SlotName::Menu => "menu",
            SlotName::Button0 => "button0",
            SlotName::Button1 => "button1",
            SlotName::Button2 => "button2",
            SlotName::Button3 => "button3",
            SlotName::LUp => "l_up",
            SlotName::LDown => "l_down",
            SlotName::LLeft => "l_left",
            SlotName::LRight => "l_right",
            SlotName::RUp => "r_up",
            SlotName::RDown => "r_down",
            SlotName::RLeft => "r_left",
            SlotName::RRight => "r_right",
            SlotName::LButton => "l_button",
            SlotName::RButton => "r_button",
            SlotName::LTrigger => "l_trigger",
            SlotName::RTrigger => "r_trigger",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotName {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotName::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UsageError::UnknownSlot(s.to_string()))
    }
}

/// Left or right stick/trigger/shoulder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Stick direction slots as `[up, down, left, right]`
    pub const fn stick_slots(self) -> [SlotName; 4] {
        match self {
            Side::Left => [SlotName::LUp, SlotName::LDown, SlotName::LLeft, SlotName::LRight],
            Side::Right => [SlotName::RUp, SlotName::RDown, SlotName::RLeft, SlotName::RRight],
        }
    }

    pub const fn trigger_slot(self) -> SlotName {
        match self {
            Side::Left => SlotName::LTrigger,
            Side::Right => SlotName::RTrigger,
        }
    }

}

impl FromStr for Side {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("l") || s.eq_ignore_ascii_case("left") {
            Ok(Side::Left)
        } else if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("right") {
            Ok(Side::Right)
        } else {
            Err(UsageError::InvalidSide(s.to_string()))
        }
    }
}
