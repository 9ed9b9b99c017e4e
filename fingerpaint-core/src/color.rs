//! # Color
//!
//! Brush colors, and resolution of the textual color formats accepted by the brush API.

/// A straight (non-premultiplied) sRGB color, eight bits per channel, in `[r, g, b, a]` order.
#[repr(transparent)]
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable, Debug, Default,
)]
pub struct Color(pub [u8; 4]);
impl Color {
    pub const TRANSPARENT: Self = Self([0; 4]);
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255; 4]);
    pub const RED: Self = Self([255, 0, 0, 255]);

    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
    /// Unpack from the platform's `0xAARRGGBB` integer layout.
    #[must_use]
    pub const fn from_argb(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes();
        Self([r, g, b, a])
    }
    /// Pack into the platform's `0xAARRGGBB` integer layout.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0[3]
    }
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}
impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_argb(value)
    }
}
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format {0:?}")]
    InvalidColorFormat(String),
}

/// The symbolic names accepted in place of a hex color. Matched without regard to ascii case.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum::EnumString, strum::IntoStaticStr, strum::EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedColor {
    Black,
    DarkGray,
    Gray,
    LightGray,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Aqua,
    Fuchsia,
    DarkGrey,
    Grey,
    LightGrey,
    Lime,
    Maroon,
    Navy,
    Olive,
    Purple,
    Silver,
    Teal,
}
impl NamedColor {
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_argb(match self {
            Self::Black => 0xFF00_0000,
            Self::DarkGray | Self::DarkGrey => 0xFF44_4444,
            Self::Gray | Self::Grey => 0xFF88_8888,
            Self::LightGray | Self::LightGrey => 0xFFCC_CCCC,
            Self::White => 0xFFFF_FFFF,
            Self::Red => 0xFFFF_0000,
            // Yes, "green" and "lime" are the same. Platform compat.
            Self::Green | Self::Lime => 0xFF00_FF00,
            Self::Blue => 0xFF00_00FF,
            Self::Yellow => 0xFFFF_FF00,
            Self::Cyan | Self::Aqua => 0xFF00_FFFF,
            Self::Magenta | Self::Fuchsia => 0xFFFF_00FF,
            Self::Maroon => 0xFF80_0000,
            Self::Navy => 0xFF00_0080,
            Self::Olive => 0xFF80_8000,
            Self::Purple => 0xFF80_0080,
            Self::Silver => 0xFFC0_C0C0,
            Self::Teal => 0xFF00_8080,
        })
    }
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        value.color()
    }
}

/// Parse `#RRGGBB`, `#AARRGGBB`, or a [`NamedColor`].
impl std::str::FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidColorFormat(s.to_owned());
        if let Some(hex) = s.strip_prefix('#') {
            // `from_str_radix` tolerates a leading sign, we don't.
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            match hex.len() {
                6 => Ok(Color::from_argb(0xFF00_0000 | value)),
                8 => Ok(Color::from_argb(value)),
                _ => Err(invalid()),
            }
        } else {
            s.parse::<NamedColor>()
                .map(NamedColor::color)
                .map_err(|_| invalid())
        }
    }
}

/// Anything the brush color can be set from. Resolved at the call boundary by
/// [`ColorInput::resolve`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ColorInput<'a> {
    /// A hex string or a color name.
    Name(&'a str),
    Raw(Color),
}
impl ColorInput<'_> {
    pub fn resolve(self) -> Result<Color, ColorError> {
        match self {
            Self::Name(name) => name.parse(),
            Self::Raw(color) => Ok(color),
        }
    }
}
impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Name(value)
    }
}
impl From<Color> for ColorInput<'_> {
    fn from(value: Color) -> Self {
        Self::Raw(value)
    }
}
impl From<u32> for ColorInput<'_> {
    fn from(value: u32) -> Self {
        Self::Raw(Color::from_argb(value))
    }
}
