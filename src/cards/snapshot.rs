//! Keyboard event snapshot and key location

use serde::Serialize;

/// Where on the keyboard a key sits, numbered like `KeyboardEvent.location`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u8")]
#[repr(u8)]
pub enum KeyLocation {
    #[default]
    Standard = 0,
    Left = 1,
    Right = 2,
    Numpad = 3,
    Mobile = 4,
    Joystick = 5,
}

impl KeyLocation {
    /// Human readable name of the location
    pub fn label(self) -> &'static str {
        match self {
            KeyLocation::Standard => "Standard",
            KeyLocation::Left => "Left",
            KeyLocation::Right => "Right",
            KeyLocation::Numpad => "Numpad",
            KeyLocation::Mobile => "Mobile",
            KeyLocation::Joystick => "Joystick",
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<KeyLocation> for u8 {
    fn from(location: KeyLocation) -> Self {
        location.index()
    }
}

impl TryFrom<u32> for KeyLocation {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(KeyLocation::Standard),
            1 => Ok(KeyLocation::Left),
            2 => Ok(KeyLocation::Right),
            3 => Ok(KeyLocation::Numpad),
            4 => Ok(KeyLocation::Mobile),
            5 => Ok(KeyLocation::Joystick),
            other => Err(other),
        }
    }
}

/// Attributes read from a single keyboard event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEventSnapshot {
    /// Key value, e.g. `a`, `A`, `Enter`
    pub key: String,
    /// Physical key code, e.g. `KeyA`, `Numpad1`
    pub code: String,
    /// Legacy numeric key code
    pub which: u32,
    pub location: KeyLocation,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
    pub repeat: bool,
    pub detail: u32,
    /// `keydown` or `keyup`
    pub event_type: String,
}

impl KeyEventSnapshot {
    pub fn is_keydown(&self) -> bool {
        self.event_type == "keydown"
    }
}
