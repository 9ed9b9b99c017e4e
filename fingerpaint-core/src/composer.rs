//! # Raster composer
//!
//! Owns the persistent pixel buffer, and replays every stroke over it each paint cycle.
//! Strokes are never rasterized into the buffer itself, so brush changes and undo need
//! nothing more than another paint.

use crate::{color::Color, state::StrokeHistory, stroke::Stroke};

/// What a [`RasterComposer::resize`] did to the buffer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Resize {
    /// Same dimensions as before, buffer untouched.
    Unchanged,
    /// A fresh buffer of the new size, cleared to the background.
    Reallocated,
    /// A dimension was zero. There is no longer a buffer.
    Released,
}

#[derive(Debug)]
pub struct RasterComposer {
    /// `None` until the first nonzero size.
    buffer: Option<tiny_skia::Pixmap>,
    background: Color,
}
impl Default for RasterComposer {
    fn default() -> Self {
        Self::new(Color::TRANSPARENT)
    }
}
impl RasterComposer {
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self {
            buffer: None,
            background,
        }
    }
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.buffer.is_some()
    }
    /// Dimensions of the buffer, `None` if it doesn't exist.
    #[must_use]
    pub fn size(&self) -> Option<[u32; 2]> {
        self.buffer
            .as_ref()
            .map(|buffer| [buffer.width(), buffer.height()])
    }
    /// The persistent buffer.
    #[must_use]
    pub fn buffer(&self) -> Option<tiny_skia::PixmapRef<'_>> {
        self.buffer.as_ref().map(tiny_skia::Pixmap::as_ref)
    }
    /// Match the buffer to the view's dimensions. Prior contents are not preserved.
    pub fn resize(&mut self, width: u32, height: u32) -> Resize {
        if self.size() == Some([width, height]) {
            return Resize::Unchanged;
        }
        match tiny_skia::Pixmap::new(width, height) {
            Some(mut buffer) => {
                // Fresh pixmaps are already transparent black.
                if !self.background.is_transparent() {
                    buffer.fill(to_skia(self.background));
                }
                log::debug!("surface buffer reallocated to {width}x{height}");
                self.buffer = Some(buffer);
                Resize::Reallocated
            }
            None => {
                log::debug!("surface buffer released, {width}x{height} is not drawable");
                self.buffer = None;
                Resize::Released
            }
        }
    }
    /// Paint a full frame into `target`: the buffer, then each of `history` in order, then `active` on top.
    ///
    /// Whatever `target` held is overwritten: by the buffer, and by the background wherever `target`
    /// reaches past the buffer. Repeating a paint with the same inputs yields the same pixels.
    /// Returns false, drawing nothing, if there is no buffer yet.
    pub fn compose(
        &self,
        target: &mut tiny_skia::PixmapMut<'_>,
        history: &StrokeHistory,
        active: Option<&Stroke>,
    ) -> bool {
        let Some(buffer) = self.buffer.as_ref() else {
            return false;
        };
        if target.width() != buffer.width() || target.height() != buffer.height() {
            let background = to_skia(self.background).premultiply().to_color_u8();
            target.pixels_mut().fill(background);
        }
        target.draw_pixmap(
            0,
            0,
            buffer.as_ref(),
            &tiny_skia::PixmapPaint {
                blend_mode: tiny_skia::BlendMode::Source,
                ..tiny_skia::PixmapPaint::default()
            },
            tiny_skia::Transform::identity(),
            None,
        );

        // Reused across strokes, only the color changes.
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..tiny_skia::Paint::default()
        };
        for stroke in history.iter().chain(active.filter(|stroke| !stroke.is_empty())) {
            draw_stroke(target, &mut paint, stroke);
        }
        true
    }
    /// Compose a frame into a new pixmap the size of the buffer.
    #[must_use]
    pub fn render(
        &self,
        history: &StrokeHistory,
        active: Option<&Stroke>,
    ) -> Option<tiny_skia::Pixmap> {
        let [width, height] = self.size()?;
        let mut frame = tiny_skia::Pixmap::new(width, height)?;
        self.compose(&mut frame.as_mut(), history, active);
        Some(frame)
    }
}

#[must_use]
pub fn to_skia(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.0;
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn stroke_path(stroke: &Stroke) -> Option<tiny_skia::Path> {
    let (first, rest) = stroke.points().split_first()?;
    let mut builder = tiny_skia::PathBuilder::with_capacity(stroke.points().len(), stroke.points().len());
    builder.move_to(first.x, first.y);
    for point in rest {
        builder.line_to(point.x, point.y);
    }
    builder.finish()
}

fn draw_stroke(target: &mut tiny_skia::PixmapMut<'_>, paint: &mut tiny_skia::Paint<'_>, stroke: &Stroke) {
    let Some(path) = stroke_path(stroke) else {
        // Fully degenerate geometry, nothing to show.
        return;
    };
    let [r, g, b, a] = stroke.color().0;
    paint.set_color_rgba8(r, g, b, a);
    let style = tiny_skia::Stroke {
        width: stroke.thickness(),
        line_cap: tiny_skia::LineCap::Round,
        line_join: tiny_skia::LineJoin::Round,
        ..tiny_skia::Stroke::default()
    };
    target.stroke_path(&path, paint, &style, tiny_skia::Transform::identity(), None);
}
