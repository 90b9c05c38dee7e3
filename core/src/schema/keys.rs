//! Keyboard key constants using legacy DOM key codes

use super::KeyBinding;

pub const ENTER: KeyBinding = KeyBinding::from_static(13, "Return");
pub const ESCAPE: KeyBinding = KeyBinding::from_static(27, "Esc");
pub const LEFT_ARROW: KeyBinding = KeyBinding::from_static(37, "←");
pub const UP_ARROW: KeyBinding = KeyBinding::from_static(38, "↑");
pub const RIGHT_ARROW: KeyBinding = KeyBinding::from_static(39, "→");
pub const DOWN_ARROW: KeyBinding = KeyBinding::from_static(40, "↓");
pub const NUM_0: KeyBinding = KeyBinding::from_static(96, "NUM 0");
pub const NUM_1: KeyBinding = KeyBinding::from_static(97, "NUM 1");
pub const NUM_2: KeyBinding = KeyBinding::from_static(98, "NUM 2");
pub const NUM_3: KeyBinding = KeyBinding::from_static(99, "NUM 3");
pub const NUM_4: KeyBinding = KeyBinding::from_static(100, "NUM 4");
pub const NUM_5: KeyBinding = KeyBinding::from_static(101, "NUM 5");
pub const NUM_6: KeyBinding = KeyBinding::from_static(102, "NUM 6");
pub const NUM_7: KeyBinding = KeyBinding::from_static(103, "NUM 7");
pub const NUM_8: KeyBinding = KeyBinding::from_static(104, "NUM 8");
pub const NUM_9: KeyBinding = KeyBinding::from_static(105, "NUM 9");
pub const KEY_0: KeyBinding = KeyBinding::from_static(48, "0");
pub const KEY_1: KeyBinding = KeyBinding::from_static(49, "1");
pub const KEY_2: KeyBinding = KeyBinding::from_static(50, "2");
pub const KEY_3: KeyBinding = KeyBinding::from_static(51, "3");
pub const KEY_4: KeyBinding = KeyBinding::from_static(52, "4");
pub const KEY_5: KeyBinding = KeyBinding::from_static(53, "5");
pub const KEY_6: KeyBinding = KeyBinding::from_static(54, "6");
pub const KEY_7: KeyBinding = KeyBinding::from_static(55, "7");
pub const KEY_8: KeyBinding = KeyBinding::from_static(56, "8");
pub const KEY_9: KeyBinding = KeyBinding::from_static(57, "9");
pub const KEY_A: KeyBinding = KeyBinding::from_static(65, "A");
pub const KEY_B: KeyBinding = KeyBinding::from_static(66, "B");
pub const KEY_C: KeyBinding = KeyBinding::from_static(67, "C");
pub const KEY_D: KeyBinding = KeyBinding::from_static(68, "D");
pub const KEY_E: KeyBinding = KeyBinding::from_static(69, "E");
pub const KEY_F: KeyBinding = KeyBinding::from_static(70, "F");
pub const KEY_G: KeyBinding = KeyBinding::from_static(71, "G");
pub const KEY_H: KeyBinding = KeyBinding::from_static(72, "H");
pub const KEY_I: KeyBinding = KeyBinding::from_static(73, "I");
pub const KEY_J: KeyBinding = KeyBinding::from_static(74, "J");
pub const KEY_K: KeyBinding = KeyBinding::from_static(75, "K");
pub const KEY_L: KeyBinding = KeyBinding::from_static(76, "L");
pub const KEY_M: KeyBinding = KeyBinding::from_static(77, "M");
pub const KEY_N: KeyBinding = KeyBinding::from_static(78, "N");
pub const KEY_O: KeyBinding = KeyBinding::from_static(79, "O");
pub const KEY_P: KeyBinding = KeyBinding::from_static(80, "P");
pub const KEY_Q: KeyBinding = KeyBinding::from_static(81, "Q");
pub const KEY_R: KeyBinding = KeyBinding::from_static(82, "R");
pub const KEY_S: KeyBinding = KeyBinding::from_static(83, "S");
pub const KEY_T: KeyBinding = KeyBinding::from_static(84, "T");
pub const KEY_U: KeyBinding = KeyBinding::from_static(85, "U");
pub const KEY_V: KeyBinding = KeyBinding::from_static(86, "V");
pub const KEY_W: KeyBinding = KeyBinding::from_static(87, "W");
pub const KEY_X: KeyBinding = KeyBinding::from_static(88, "X");
pub const KEY_Y: KeyBinding = KeyBinding::from_static(89, "Y");
pub const KEY_Z: KeyBinding = KeyBinding::from_static(90, "Z");
pub const OPEN_BRACKET: KeyBinding = KeyBinding::from_static(219, "[");
pub const CLOSE_BRACKET: KeyBinding = KeyBinding::from_static(221, "]");
pub const SEMICOLON: KeyBinding = KeyBinding::from_static(186, ";");
pub const EQUALS: KeyBinding = KeyBinding::from_static(187, "=");
pub const COMMA: KeyBinding = KeyBinding::from_static(188, ",");
pub const DASH: KeyBinding = KeyBinding::from_static(189, "-");
pub const PERIOD: KeyBinding = KeyBinding::from_static(190, ".");
pub const FORWARD_SLASH: KeyBinding = KeyBinding::from_static(191, "/");
pub const GRAVE_ACCENT: KeyBinding = KeyBinding::from_static(192, "`");
pub const BACK_SLASH: KeyBinding = KeyBinding::from_static(220, "\\");
pub const SINGLE_QUOTE: KeyBinding = KeyBinding::from_static(222, "'");

/// Every named key, for lookups by code.
pub static ALL: [KeyBinding; 63] = [
    ENTER,
    ESCAPE,
    LEFT_ARROW,
    UP_ARROW,
    RIGHT_ARROW,
    DOWN_ARROW,
    NUM_0,
    NUM_1,
    NUM_2,
    NUM_3,
    NUM_4,
    NUM_5,
    NUM_6,
    NUM_7,
    NUM_8,
    NUM_9,
    KEY_0,
    KEY_1,
    KEY_2,
    KEY_3,
    KEY_4,
    KEY_5,
    KEY_6,
    KEY_7,
    KEY_8,
    KEY_9,
    KEY_A,
    KEY_B,
    KEY_C,
    KEY_D,
    KEY_E,
    KEY_F,
    KEY_G,
    KEY_H,
    KEY_I,
    KEY_J,
    KEY_K,
    KEY_L,
    KEY_M,
    KEY_N,
    KEY_O,
    KEY_P,
    KEY_Q,
    KEY_R,
    KEY_S,
    KEY_T,
    KEY_U,
    KEY_V,
    KEY_W,
    KEY_X,
    KEY_Y,
    KEY_Z,
    OPEN_BRACKET,
    CLOSE_BRACKET,
    SEMICOLON,
    EQUALS,
    COMMA,
    DASH,
    PERIOD,
    FORWARD_SLASH,
    GRAVE_ACCENT,
    BACK_SLASH,
    SINGLE_QUOTE,
];

/// Named key for a legacy key code
pub fn by_code(code: u32) -> Option<&'static KeyBinding> {
    ALL.iter().find(|key| key.code() == code)
}
