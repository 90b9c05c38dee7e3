//! Controller skins: a theme plus per-slot display labels

use std::borrow::Cow;
use std::fmt;

use crate::slot::{SLOT_COUNT, SlotName};

/// Visual theme identifier handed to theming collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme {
    name: Cow<'static, str>,
}

impl Theme {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A controller "skin" such as a console-style set of face-button labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlType {
    name: Cow<'static, str>,
    theme: Theme,
    labels: [Option<Cow<'static, str>>; SLOT_COUNT],
    keyboard: bool,
}

impl ControlType {
    /// Gamepad type whose labels are `overrides` layered over the default glyphs
    pub fn gamepad<I, L>(name: impl Into<Cow<'static, str>>, theme: Theme, overrides: I) -> Self
    where
        I: IntoIterator<Item = (SlotName, L)>,
        L: Into<Cow<'static, str>>,
    {
        let mut labels: [Option<Cow<'static, str>>; SLOT_COUNT] = std::array::from_fn(|_| None);
        for (slot, label) in overrides {
            labels[slot.index()] = Some(label.into());
        }
        Self {
            name: name.into(),
            theme,
            labels,
            keyboard: false,
        }
    }

    /// The keyboard type, themed after the active layout. Its labels come
    /// from the bound keys.
    pub fn keyboard(theme: Theme) -> Self {
        Self {
            name: Cow::Borrowed("Keyboard"),
            theme,
            labels: std::array::from_fn(|_| None),
            keyboard: true,
        }
    }

    pub fn hedgehog() -> Self {
        Self::gamepad("Hedgehog", Theme::new("HedgeHog"), XBOX_LABELS)
    }

    pub fn plumber() -> Self {
        Self::gamepad("Plumber", Theme::new("Plumber"), XBOX_LABELS)
    }

    pub fn ragdoll() -> Self {
        Self::gamepad("Ragdoll", Theme::new("Ragdoll"), PLAYSTATION_LABELS)
    }

    /// Ragdoll with the later "options" menu button
    pub fn ragdoll4() -> Self {
        Self::gamepad(
            "Ragdoll4",
            Theme::new("Ragdoll"),
            PLAYSTATION_LABELS
                .into_iter()
                .chain([(SlotName::Menu, "options")]),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }

    /// Display label for a slot: the override if present, else the default glyph
    pub fn label(&self, slot: SlotName) -> &str {
        self.labels[slot.index()]
            .as_deref()
            .unwrap_or_else(|| default_glyph(slot))
    }
}

const XBOX_LABELS: [(SlotName, &str); 8] = [
    (SlotName::Button0, "A"),
    (SlotName::Button1, "B"),
    (SlotName::Button2, "X"),
    (SlotName::Button3, "Y"),
    (SlotName::LButton, "LB"),
    (SlotName::RButton, "RB"),
    (SlotName::LTrigger, "LT"),
    (SlotName::RTrigger, "RT"),
];

const PLAYSTATION_LABELS: [(SlotName, &str); 8] = [
    (SlotName::Button0, "x"),
    (SlotName::Button1, "o"),
    (SlotName::Button2, "□"),
    (SlotName::Button3, "△"),
    (SlotName::LButton, "L1"),
    (SlotName::RButton, "R1"),
    (SlotName::LTrigger, "L2"),
    (SlotName::RTrigger, "R2"),
];

/// Generic label used when a control type has no override for `slot`
pub fn default_glyph(slot: SlotName) -> &'static str {
    match slot {
        SlotName::DUp | SlotName::LUp | SlotName::RUp => "↑",
        SlotName::DDown | SlotName::LDown | SlotName::RDown => "↓",
        SlotName::DLeft | SlotName::LLeft | SlotName::RLeft => "←",
        SlotName::DRight | SlotName::LRight | SlotName::RRight => "→",
        SlotName::Menu => "▶",
        other => other.as_str(),
    }
}

/// Spoken form of a symbol glyph; other labels pass through unchanged.
pub fn symbol_as_word(label: &str) -> &str {
    match label {
        "▶" => "start",
        "x" => "cross",
        "o" => "circle",
        "□" => "square",
        "△" => "triangle",
        other => other,
    }
}
