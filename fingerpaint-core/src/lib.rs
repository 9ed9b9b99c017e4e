//! # fingerpaint-core
//!
//! Freehand drawing surface: pointer input in, strokes and pixels out.
//! See [`surface::DrawingSurface`] for the entry point a hosting view talks to.

pub mod color;
pub mod composer;
pub mod input;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod units;
pub mod util;

pub use surface::{DrawingSurface, SurfaceSettings};
