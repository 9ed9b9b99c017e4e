//! # Strokes
//!
//! A stroke is a freehand polyline, plus the brush it was drawn with.

pub mod builder;
pub use builder::{ActiveStroke, Commit, GesturePhase, StrokeBuilder};

use crate::state::BrushSettings;

/// A single point of a stroke, in surface pixels.
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
impl From<Point> for [f32; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

/// An ordered polyline. The first point is where the pointer went down, every following
/// point is the end of a straight segment from the one before it.
///
/// Strokes are only mutable from within the crate, once committed into a
/// [`StrokeHistory`](crate::state::history::StrokeHistory) they are frozen.
#[derive(Clone, PartialEq, Debug)]
pub struct Stroke {
    brush: BrushSettings,
    /// Invariant: never empty.
    points: Vec<Point>,
}
impl Stroke {
    /// Start a stroke at `start`.
    pub(crate) fn new(brush: BrushSettings, start: Point) -> Self {
        Self {
            brush,
            points: vec![start],
        }
    }
    /// Attach a segment from the last point to `to`.
    pub(crate) fn line_to(&mut self, to: Point) {
        self.points.push(to);
    }
    pub(crate) fn set_brush(&mut self, brush: BrushSettings) {
        self.brush = brush;
    }
    #[must_use]
    pub fn brush(&self) -> BrushSettings {
        self.brush
    }
    #[must_use]
    pub fn color(&self) -> crate::color::Color {
        self.brush.color
    }
    /// Width of the stroke, in surface pixels.
    #[must_use]
    pub fn thickness(&self) -> f32 {
        self.brush.thickness.get()
    }
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[must_use]
    pub fn start(&self) -> Point {
        self.points[0]
    }
    #[must_use]
    pub fn end(&self) -> Point {
        // Non-empty by construction.
        self.points[self.points.len() - 1]
    }
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }
    /// A stroke with no segments draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segment_count() == 0
    }
}
