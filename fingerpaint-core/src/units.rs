pub const CM_PER_IN: f32 = 2.54;
pub const IN_PER_CM: f32 = 1.0 / CM_PER_IN;
/// Constant varies by who you ask - but this is the one defined by W3C.
pub const PT_PER_IN: f32 = 72.0;
pub const IN_PER_PT: f32 = 1.0 / PT_PER_IN;
/// Density at which one device-independent pixel is exactly one physical pixel.
pub const BASELINE_DPI: f32 = 160.0;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitParseError {
    #[error(transparent)]
    Value(#[from] std::num::ParseFloatError),
    #[error("unknown unit")]
    UnrecognizedUnit,
}

/// A physical length, allowing brush sizes to be given independently of the display density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Device-independent pixels. One dip is one pixel at [`BASELINE_DPI`].
    Dip(f32),
    /// Physical pixels of the drawing surface.
    Pixel(f32),
    Inch(f32),
    /// Typographic points, as defined by W3C.
    Point(f32),
    Centimeter(f32),
}
impl Length {
    /// Access the numeric component of the length.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Self::Dip(x) | Self::Pixel(x) | Self::Inch(x) | Self::Point(x) | Self::Centimeter(x) => x,
        }
    }
    #[must_use]
    pub fn value_mut(&mut self) -> &mut f32 {
        match self {
            Self::Dip(x) | Self::Pixel(x) | Self::Inch(x) | Self::Point(x) | Self::Centimeter(x) => x,
        }
    }
    /// Fetch the name of the unit.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Dip(_) => "dp",
            Self::Pixel(_) => "px",
            Self::Inch(_) => "in",
            Self::Point(_) => "pt",
            Self::Centimeter(_) => "cm",
        }
    }
    /// Convert into physical pixels, under the given display density.
    #[must_use]
    pub fn into_pixels(self, density: Density) -> f32 {
        match self {
            Self::Dip(dp) => dp * density.into_scale(),
            Self::Pixel(px) => px,
            Self::Inch(i) => density.into_dpi() * i,
            Self::Point(p) => density.into_dpi() * (p * IN_PER_PT),
            Self::Centimeter(cm) => density.into_dpi() * (cm * IN_PER_CM),
        }
    }
}
impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value(), self.unit())
    }
}

impl std::str::FromStr for Length {
    type Err = UnitParseError;
    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        // Every unit suffix is two ascii chars. Still must not split a multibyte char.
        s = s.trim_ascii_end();
        if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
            return Err(UnitParseError::UnrecognizedUnit);
        }
        let unit = &s[s.len() - 2..];
        s = &s[..s.len() - 2];

        let mut parsed = match unit {
            "dp" => Self::Dip(0.0),
            "px" => Self::Pixel(0.0),
            "in" => Self::Inch(0.0),
            "pt" => Self::Point(0.0),
            "cm" => Self::Centimeter(0.0),
            _ => return Err(UnitParseError::UnrecognizedUnit),
        };

        *parsed.value_mut() = s.trim_ascii().parse()?;
        Ok(parsed)
    }
}

/// Relationship between physical pixels of the surface and real-world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Density {
    /// Physical pixels per inch.
    Dpi(f32),
    /// Physical pixels per device-independent pixel.
    Scale(f32),
}
impl Default for Density {
    fn default() -> Self {
        Self::Scale(1.0)
    }
}
impl Density {
    #[must_use]
    pub fn into_dpi(self) -> f32 {
        match self {
            Self::Dpi(dpi) => dpi,
            Self::Scale(scale) => scale * BASELINE_DPI,
        }
    }
    #[must_use]
    pub fn into_scale(self) -> f32 {
        match self {
            Self::Dpi(dpi) => dpi / BASELINE_DPI,
            Self::Scale(scale) => scale,
        }
    }
}
impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dpi(dpi) => write!(f, "{dpi}dpi"),
            Self::Scale(scale) => write!(f, "{scale}x"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Density, Length, UnitParseError};
    #[test]
    fn dip_scales_with_density() {
        assert_eq!(Length::Dip(10.0).into_pixels(Density::Scale(2.0)), 20.0);
        assert_eq!(Length::Dip(10.0).into_pixels(Density::Dpi(480.0)), 30.0);
        // Baseline density, dips are pixels.
        assert_eq!(Length::Dip(7.0).into_pixels(Density::Dpi(160.0)), 7.0);
    }
    #[test]
    fn pixels_ignore_density() {
        assert_eq!(Length::Pixel(5.0).into_pixels(Density::Scale(3.0)), 5.0);
    }
    #[test]
    fn physical_units() {
        let density = Density::Dpi(144.0);
        assert_eq!(Length::Inch(1.0).into_pixels(density), 144.0);
        assert!((Length::Point(72.0).into_pixels(density) - 144.0).abs() < 0.001);
        assert!((Length::Centimeter(2.54).into_pixels(density) - 144.0).abs() < 0.001);
    }
    #[test]
    fn parse() {
        assert_eq!("20dp".parse::<Length>(), Ok(Length::Dip(20.0)));
        assert_eq!(" 1.5 px ".parse::<Length>(), Ok(Length::Pixel(1.5)));
        assert_eq!("3cm".parse::<Length>(), Ok(Length::Centimeter(3.0)));
        assert_eq!("3".parse::<Length>(), Err(UnitParseError::UnrecognizedUnit));
        assert_eq!("10furlongs".parse::<Length>(), Err(UnitParseError::UnrecognizedUnit));
        assert!(matches!("xdp".parse::<Length>(), Err(UnitParseError::Value(_))));
        // Must not panic on a multibyte boundary.
        assert_eq!("1é".parse::<Length>(), Err(UnitParseError::UnrecognizedUnit));
    }
    #[test]
    fn display_roundtrips_unit() {
        assert_eq!(Length::Dip(8.0).to_string(), "8dp");
        assert_eq!(Density::Dpi(320.0).to_string(), "320dpi");
    }
}
