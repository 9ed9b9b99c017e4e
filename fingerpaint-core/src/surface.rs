//! # Drawing surface
//!
//! Everything a hosting view needs: lifecycle hooks called by the platform, and the brush mutators
//! called by the app's controls. All on one thread, no locking.
//!
//! Repaints are requested, not performed. Each state change raises a flag that the host takes with
//! [`DrawingSurface::take_repaint_request`] when its event loop gets around to painting, so a burst of
//! moves collapses into one paint.

use crate::{
    color::{Color, ColorError, ColorInput},
    composer::{RasterComposer, Resize},
    input::{self, PointerAction, PointerEvent, Routed},
    state::{self, BrushError, BrushSettings, StrokeHistory},
    stroke::{Stroke, StrokeBuilder},
    units::{Density, Length},
};

/// Initial conditions for a [`DrawingSurface`].
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct SurfaceSettings {
    pub density: Density,
    pub brush: BrushSettings,
    /// What the persistent buffer is cleared to.
    pub background: Color,
}

#[derive(Debug)]
pub struct DrawingSurface {
    density: Density,
    brush: BrushSettings,
    builder: StrokeBuilder,
    history: StrokeHistory,
    composer: RasterComposer,
    repaint_requested: bool,
}
impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(SurfaceSettings::default())
    }
}
impl DrawingSurface {
    #[must_use]
    pub fn new(settings: SurfaceSettings) -> Self {
        Self {
            density: settings.density,
            brush: settings.brush,
            builder: StrokeBuilder::new(),
            history: StrokeHistory::default(),
            composer: RasterComposer::new(settings.background),
            repaint_requested: false,
        }
    }
    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }
}
// Platform hooks
impl DrawingSurface {
    /// The view's dimensions changed.
    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        match self.composer.resize(width, height) {
            Resize::Unchanged => (),
            Resize::Reallocated => {
                self.builder.make_ready();
                self.request_repaint();
            }
            Resize::Released => {
                self.builder.make_not_ready();
                self.request_repaint();
            }
        }
    }
    /// Paint a full frame into `target`. Returns false if there is no surface to paint yet.
    pub fn on_paint(&self, target: &mut tiny_skia::PixmapMut<'_>) -> bool {
        self.composer
            .compose(target, &self.history, self.builder.active())
    }
    /// Paint a full frame into a new pixmap.
    #[must_use]
    pub fn render(&self) -> Option<tiny_skia::Pixmap> {
        self.composer.render(&self.history, self.builder.active())
    }
    /// A raw pointer event. Returns whether it was consumed, otherwise the platform should
    /// keep propagating it.
    pub fn on_pointer_event(&mut self, action: PointerAction, x: f32, y: f32) -> bool {
        self.route(PointerEvent::new(action, x, y)).is_handled()
    }
    /// Like [`Self::on_pointer_event`], reporting what the event did.
    pub fn route(&mut self, event: PointerEvent) -> Routed {
        let routed = input::route(&mut self.builder, &mut self.history, &self.brush, event);
        if routed.is_handled() {
            self.request_repaint();
        }
        routed
    }
    /// Take the pending repaint request, if any. Many requests between takes are one request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }
    #[must_use]
    pub fn is_repaint_requested(&self) -> bool {
        self.repaint_requested
    }
}
// Controls
impl DrawingSurface {
    /// Set the brush size, given in any unit. The in-progress stroke, if any, changes too.
    ///
    /// # Errors
    /// If the size resolves to a non-positive or non-finite pixel width. The brush is left unchanged.
    pub fn set_thickness(&mut self, size: Length) -> Result<(), BrushError> {
        let thickness = state::thickness_for(size, self.density).inspect_err(|e| {
            log::warn!("{e}");
        })?;
        self.brush.thickness = thickness;
        self.brush_changed();
        Ok(())
    }
    /// Set the brush color from a name, hex string, or raw value. The in-progress stroke, if any, changes too.
    ///
    /// # Errors
    /// [`ColorError::InvalidColorFormat`] if a string isn't a color. The brush is left unchanged.
    pub fn set_color<'a>(&mut self, value: impl Into<ColorInput<'a>>) -> Result<(), ColorError> {
        let color = value.into().resolve().inspect_err(|e| {
            log::warn!("{e}");
        })?;
        self.set_color_raw(color);
        Ok(())
    }
    /// # Errors
    /// [`ColorError::InvalidColorFormat`] if `name` isn't a color. The brush is left unchanged.
    pub fn set_color_by_name(&mut self, name: &str) -> Result<(), ColorError> {
        self.set_color(ColorInput::Name(name))
    }
    pub fn set_color_raw(&mut self, color: Color) {
        self.brush.color = color;
        self.brush_changed();
    }
    /// Remove the most recent stroke. Nothing to undo is not an error.
    pub fn undo(&mut self) {
        if self.history.undo().is_some() {
            self.request_repaint();
        }
    }
    fn brush_changed(&mut self) {
        self.builder.set_brush(&self.brush);
        if self.builder.active().is_some() {
            self.request_repaint();
        }
    }
}
// Read-only accessors
impl DrawingSurface {
    #[must_use]
    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }
    /// The stroke being drawn, if the pointer is down.
    #[must_use]
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.builder.active()
    }
    #[must_use]
    pub fn builder(&self) -> &StrokeBuilder {
        &self.builder
    }
    #[must_use]
    pub fn brush(&self) -> BrushSettings {
        self.brush
    }
    #[must_use]
    pub fn size(&self) -> Option<[u32; 2]> {
        self.composer.size()
    }
}

#[cfg(test)]
mod test {
    use super::{DrawingSurface, SurfaceSettings};
    use crate::{
        color::{Color, ColorError},
        input::PointerAction,
        state::BrushError,
        stroke::{GesturePhase, Point},
        units::{Density, Length},
    };

    fn sized() -> DrawingSurface {
        let mut surface = DrawingSurface::default();
        surface.on_size_changed(64, 64);
        assert!(surface.take_repaint_request());
        surface
    }
    fn line(surface: &mut DrawingSurface, points: &[(f32, f32)]) {
        let (first, rest) = points.split_first().unwrap();
        surface.on_pointer_event(PointerAction::Down, first.0, first.1);
        for &(x, y) in rest {
            surface.on_pointer_event(PointerAction::Move, x, y);
        }
        let last = points.last().unwrap();
        surface.on_pointer_event(PointerAction::Up, last.0, last.1);
    }

    #[test]
    fn input_before_size_is_unhandled() {
        let mut surface = DrawingSurface::default();
        assert_eq!(surface.builder().phase(), GesturePhase::NotReady);
        assert!(!surface.on_pointer_event(PointerAction::Down, 1.0, 1.0));
        assert!(!surface.take_repaint_request());
        assert!(surface.render().is_none());
    }
    #[test]
    fn draw_then_undo() {
        let mut surface = sized();
        line(&mut surface, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(surface.history().len(), 1);
        assert_eq!(
            surface.history().last().unwrap().points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0)
            ]
        );
        surface.undo();
        assert!(surface.history().is_empty());
        // Second undo is a quiet no-op.
        surface.take_repaint_request();
        surface.undo();
        assert!(surface.history().is_empty());
        assert!(!surface.take_repaint_request());
    }
    #[test]
    fn named_color_stroke() {
        let mut surface = sized();
        surface.set_color("red").unwrap();
        line(&mut surface, &[(1.0, 1.0), (20.0, 20.0)]);
        assert_eq!(surface.history().last().unwrap().color(), Color::from_rgba8(255, 0, 0, 255));
    }
    #[test]
    fn invalid_color_keeps_brush() {
        let mut surface = sized();
        surface.set_color(0xFF12_3456_u32).unwrap();
        let before = surface.brush();
        assert_eq!(
            surface.set_color_by_name("not-a-color"),
            Err(ColorError::InvalidColorFormat("not-a-color".to_owned()))
        );
        assert_eq!(surface.brush(), before);
    }
    #[test]
    fn brush_snapshot_at_begin() {
        let mut surface = sized();
        surface.set_color_raw(Color::WHITE);
        surface.set_thickness(Length::Pixel(4.0)).unwrap();
        line(&mut surface, &[(0.0, 0.0), (5.0, 5.0)]);

        surface.set_color_raw(Color::RED);
        let committed = surface.history().last().unwrap();
        assert_eq!(committed.color(), Color::WHITE);
        assert_eq!(committed.thickness(), 4.0);
    }
    #[test]
    fn brush_changes_live_mid_gesture() {
        let mut surface = sized();
        surface.on_pointer_event(PointerAction::Down, 0.0, 0.0);
        surface.on_pointer_event(PointerAction::Move, 9.0, 0.0);
        surface.take_repaint_request();

        surface.set_color_raw(Color::RED);
        assert!(surface.take_repaint_request());
        assert_eq!(surface.active_stroke().unwrap().color(), Color::RED);
    }
    #[test]
    fn thickness_uses_density() {
        let mut surface = DrawingSurface::new(SurfaceSettings {
            density: Density::Scale(3.0),
            ..SurfaceSettings::default()
        });
        surface.set_thickness(Length::Dip(5.0)).unwrap();
        assert_eq!(surface.brush().thickness.get(), 15.0);

        let before = surface.brush();
        assert!(matches!(
            surface.set_thickness(Length::Dip(-1.0)),
            Err(BrushError::InvalidThickness { .. })
        ));
        assert_eq!(surface.brush(), before);
    }
    #[test]
    fn repaint_requests_coalesce() {
        let mut surface = sized();
        surface.on_pointer_event(PointerAction::Down, 0.0, 0.0);
        for i in 1..50 {
            surface.on_pointer_event(PointerAction::Move, i as f32, 0.0);
        }
        assert!(surface.take_repaint_request());
        assert!(!surface.take_repaint_request());
        // Unhandled events don't ask for a paint.
        surface.on_pointer_event(PointerAction::Hover, 0.0, 0.0);
        assert!(!surface.is_repaint_requested());
    }
    #[test]
    fn same_size_resize_is_noop() {
        let mut surface = sized();
        line(&mut surface, &[(0.0, 0.0), (5.0, 5.0)]);
        surface.take_repaint_request();
        surface.on_size_changed(64, 64);
        assert!(!surface.take_repaint_request());

        // Strokes survive a real resize, they're vector data.
        surface.on_size_changed(32, 48);
        assert!(surface.take_repaint_request());
        assert_eq!(surface.size(), Some([32, 48]));
        assert_eq!(surface.history().len(), 1);
    }
    #[test]
    fn zero_size_releases_surface() {
        let mut surface = sized();
        surface.on_pointer_event(PointerAction::Down, 0.0, 0.0);
        surface.on_size_changed(0, 0);
        assert_eq!(surface.builder().phase(), GesturePhase::NotReady);
        assert!(!surface.on_pointer_event(PointerAction::Move, 1.0, 1.0));
        surface.on_size_changed(10, 10);
        assert_eq!(surface.builder().phase(), GesturePhase::Idle);
    }
    #[test]
    fn paint_twice_same_pixels() {
        let mut surface = sized();
        line(&mut surface, &[(4.0, 4.0), (60.0, 30.0)]);
        surface.on_pointer_event(PointerAction::Down, 10.0, 50.0);
        surface.on_pointer_event(PointerAction::Move, 50.0, 50.0);

        let mut target = tiny_skia::Pixmap::new(64, 64).unwrap();
        assert!(surface.on_paint(&mut target.as_mut()));
        let first = target.data().to_vec();
        assert!(surface.on_paint(&mut target.as_mut()));
        assert_eq!(first, target.data());
        assert_eq!(surface.render().unwrap().data(), first.as_slice());
    }
}
