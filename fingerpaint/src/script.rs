//! # Gesture scripts
//!
//! A recorded session for the headless host: the view's initial size, then every pointer event and
//! control action in the order the platform would have delivered them.
//!
//! ```toml
//! width = 320
//! height = 240
//!
//! [[events]]
//! action = "color"
//! value = "red"
//!
//! [[events]]
//! action = "down"
//! x = 10.0
//! y = 12.0
//! ```

use fingerpaint_core::{color::ColorInput, input::PointerAction, units::Length};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A color as the UI control hands it over: either text or a packed `0xAARRGGBB` value.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorValue {
    Text(String),
    Raw(u32),
}
impl ColorValue {
    #[must_use]
    pub fn as_input(&self) -> ColorInput<'_> {
        match self {
            Self::Text(text) => ColorInput::Name(text),
            Self::Raw(raw) => ColorInput::from(*raw),
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down(Position),
    Move(Position),
    Up(Position),
    Cancel(Position),
    PointerDown(Position),
    PointerUp(Position),
    Hover(Position),
    Color {
        value: ColorValue,
    },
    Size {
        #[serde(with = "crate::global::parse_str")]
        value: Length,
    },
    Undo,
    Resize {
        width: u32,
        height: u32,
    },
}
impl ScriptEvent {
    /// The raw pointer event this represents, if it is one.
    #[must_use]
    pub fn as_pointer(&self) -> Option<(PointerAction, Position)> {
        let (action, position) = match self {
            Self::Down(pos) => (PointerAction::Down, pos),
            Self::Move(pos) => (PointerAction::Move, pos),
            Self::Up(pos) => (PointerAction::Up, pos),
            Self::Cancel(pos) => (PointerAction::Cancel, pos),
            Self::PointerDown(pos) => (PointerAction::PointerDown, pos),
            Self::PointerUp(pos) => (PointerAction::PointerUp, pos),
            Self::Hover(pos) => (PointerAction::Hover, pos),
            Self::Color { .. } | Self::Size { .. } | Self::Undo | Self::Resize { .. } => {
                return None
            }
        };
        Some((action, *position))
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Script {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}
impl Script {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let string = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&string)?)
    }
}
