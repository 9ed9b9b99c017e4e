//! # State
//!
//! The brush the user currently has selected, and the strokes committed so far.

pub mod history;
pub use history::StrokeHistory;

use crate::{
    color::Color,
    units::{Density, Length},
    util::{FiniteF32Error, PositiveF32},
};

/// Paint attributes of a stroke. Also serves as the active brush, which new
/// strokes take a copy of when they begin.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BrushSettings {
    pub color: Color,
    /// Diameter, in surface pixels.
    pub thickness: PositiveF32,
}
impl BrushSettings {
    /// Thickness of a fresh brush, in surface pixels.
    pub const DEFAULT_THICKNESS: f32 = 20.0;
}
impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            // Nonzero constant, cannot fail.
            thickness: PositiveF32::new(Self::DEFAULT_THICKNESS).unwrap_or(PositiveF32::ONE),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BrushError {
    #[error("brush size {length} is not a valid thickness")]
    InvalidThickness {
        length: Length,
        #[source]
        reason: FiniteF32Error,
    },
}

/// Resolve a brush size into a thickness in surface pixels.
pub fn thickness_for(length: Length, density: Density) -> Result<PositiveF32, BrushError> {
    PositiveF32::new(length.into_pixels(density))
        .map_err(|reason| BrushError::InvalidThickness { length, reason })
}
