use fingerpaint_core::{
    color::Color,
    state::{self, BrushSettings},
    units::{Density, Length, BASELINE_DPI},
    SurfaceSettings,
};

const DOCUMENTATION: &str = r##"# Fingerpaint preferences. You may edit this file, but be aware that formatting and comments will not
# be preserved. Any field left out takes its default.

# density:     display density, in pixels per inch. 160 means one dp is one pixel.
# brush_color: "#RRGGBB", "#AARRGGBB", or a name such as "red" or "teal".
# brush_size:  a length with a unit suffix: dp, px, in, pt, or cm.
# background:  color the drawing buffer is cleared to. Same formats as brush_color.

"##;

#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub density: f32,
    #[serde(with = "super::parse_str")]
    pub brush_color: Color,
    #[serde(with = "super::parse_str")]
    pub brush_size: Length,
    #[serde(with = "super::parse_str")]
    pub background: Color,
}
impl Default for Preferences {
    fn default() -> Self {
        let brush = BrushSettings::default();
        Self {
            density: BASELINE_DPI,
            brush_color: brush.color,
            brush_size: Length::Pixel(BrushSettings::DEFAULT_THICKNESS),
            background: Color::TRANSPARENT,
        }
    }
}
impl Preferences {
    pub const FILENAME: &'static str = "fingerpaint.toml";
    /// Load from the user's preferences directory, or default if unavailable for some reason.
    #[must_use]
    pub fn load_default_path() -> Self {
        let Some(dir) = preferences_dir() else {
            log::warn!("No preferences dir found, defaulting.");
            return Self::default();
        };
        // Explicity do *not* create recursively. If not found, the user probably has a good reason.
        // Ignore errors (could already exist). Any real errors will be emitted by file access below.
        let _ = std::fs::DirBuilder::new().create(&dir);
        Self::load_or_create(&dir.join(Self::FILENAME))
    }
    /// Load from `path`. When there is no file at all, a documented default one is written there
    /// for the user to edit.
    #[must_use]
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_or_default(path);
        }
        let default = Self::default();
        if let Err(e) = default.save(path) {
            log::warn!("Failed to save default preferences to {path:?}:\n{e:?}");
        }
        default
    }
    /// Load from `path`, logging and defaulting on any failure.
    #[must_use]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match Self::load(path) {
            Ok(preferences) => preferences,
            Err(e) => {
                log::warn!("Preferences at {path:?} weren't usable, defaulting: {e:#}");
                Self::default()
            }
        }
    }
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let string = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&string)?)
    }
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_documented_string()?)?;
        Ok(())
    }
    pub fn to_documented_string(&self) -> anyhow::Result<String> {
        let string = toml::ser::to_string_pretty(self)?;
        Ok(DOCUMENTATION.to_owned() + &string)
    }
    /// The display density, or the baseline if the configured one is not a positive number.
    #[must_use]
    pub fn density(&self) -> Density {
        if self.density.is_finite() && self.density > 0.0 {
            Density::Dpi(self.density)
        } else {
            log::warn!("density {} is not positive, using {BASELINE_DPI}", self.density);
            Density::Dpi(BASELINE_DPI)
        }
    }
    /// Resolve into the settings a surface starts with.
    ///
    /// # Errors
    /// If the brush size is not a positive width at this density.
    pub fn surface_settings(&self) -> Result<SurfaceSettings, state::BrushError> {
        let density = self.density();
        Ok(SurfaceSettings {
            density,
            brush: BrushSettings {
                color: self.brush_color,
                thickness: state::thickness_for(self.brush_size, density)?,
            },
            background: self.background,
        })
    }
    /// Like [`Self::surface_settings`], falling back to the default brush size if the configured one is unusable.
    #[must_use]
    pub fn resolve(&self) -> SurfaceSettings {
        self.surface_settings().unwrap_or_else(|e| {
            log::warn!("{e}, using default brush size");
            SurfaceSettings {
                density: self.density(),
                brush: BrushSettings {
                    color: self.brush_color,
                    ..BrushSettings::default()
                },
                background: self.background,
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::Preferences;
    use fingerpaint_core::{
        color::Color,
        state::BrushSettings,
        units::{Density, Length, BASELINE_DPI},
    };
    #[test]
    fn partial_file_defaults_rest() {
        let prefs: Preferences = toml::from_str(
            r#"
            density = 320.0
            brush_color = "teal"
            "#,
        )
        .unwrap();
        assert_eq!(prefs.density, 320.0);
        assert_eq!(prefs.brush_color, Color::from_argb(0xFF00_8080));
        assert_eq!(prefs.brush_size, Preferences::default().brush_size);
    }
    #[test]
    fn bad_color_is_an_error() {
        let parsed = toml::from_str::<Preferences>(r#"brush_color = "chartreuse-ish""#);
        assert!(parsed.is_err());
    }
    #[test]
    fn documented_string_reparses() {
        let prefs = Preferences {
            brush_size: Length::Dip(6.0),
            ..Preferences::default()
        };
        let string = prefs.to_documented_string().unwrap();
        assert!(string.starts_with("# Fingerpaint preferences."));
        assert_eq!(toml::from_str::<Preferences>(&string).unwrap(), prefs);
    }
    #[test]
    fn resolves_dips_at_density() {
        let prefs = Preferences {
            density: 480.0,
            brush_size: Length::Dip(4.0),
            ..Preferences::default()
        };
        let settings = prefs.surface_settings().unwrap();
        assert_eq!(settings.brush.thickness.get(), 12.0);

        let zero = Preferences {
            brush_size: Length::Dip(0.0),
            ..Preferences::default()
        };
        assert!(zero.surface_settings().is_err());
    }
    #[test]
    fn bad_density_uses_baseline() {
        for density in [0.0, -30.0, f32::NAN] {
            let prefs = Preferences {
                density,
                brush_size: Length::Dip(4.0),
                ..Preferences::default()
            };
            let settings = prefs.surface_settings().unwrap();
            assert_eq!(settings.density, Density::Dpi(BASELINE_DPI));
            assert_eq!(settings.brush.thickness.get(), 4.0);
        }
    }
    #[test]
    fn unusable_size_falls_back() {
        let prefs = Preferences {
            brush_color: Color::RED,
            brush_size: Length::Centimeter(-1.0),
            ..Preferences::default()
        };
        let settings = prefs.resolve();
        assert_eq!(settings.brush.thickness, BrushSettings::default().thickness);
        assert_eq!(settings.brush.color, Color::RED);
    }
    #[test]
    fn malformed_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Preferences::FILENAME);
        std::fs::write(&path, "density = \"very\"").unwrap();
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
        // Present but broken files are left alone.
        assert_eq!(Preferences::load_or_create(&path), Preferences::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "density = \"very\"");
    }
    #[test]
    fn missing_file_written_documented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Preferences::FILENAME);
        assert_eq!(Preferences::load_or_create(&path), Preferences::default());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Fingerpaint preferences."));
        assert_eq!(Preferences::load(&path).unwrap(), Preferences::default());
    }
}
