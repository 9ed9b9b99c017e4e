//! # Headless host
//!
//! Stands in for the platform's view and event loop: delivers script events to a [`DrawingSurface`],
//! and runs a paint cycle into its own display pixmap whenever the surface asks for one.

use crate::script::{Script, ScriptEvent};
use fingerpaint_core::{DrawingSurface, SurfaceSettings};

/// Tallies of one playback, for the log.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub events: usize,
    /// Pointer events the surface did not consume.
    pub unhandled: usize,
    /// Control actions the surface refused.
    pub rejected: usize,
    pub paints: usize,
}

pub struct Host {
    surface: DrawingSurface,
    /// What would be on screen.
    display: Option<tiny_skia::Pixmap>,
    stats: Stats,
}
impl Host {
    #[must_use]
    pub fn new(settings: SurfaceSettings) -> Self {
        Self {
            surface: DrawingSurface::new(settings),
            display: None,
            stats: Stats::default(),
        }
    }
    #[must_use]
    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }
    #[must_use]
    pub fn display(&self) -> Option<&tiny_skia::Pixmap> {
        self.display.as_ref()
    }
    /// The view was laid out at this size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.on_size_changed(width, height);
        // The display follows the view, whether or not the surface can draw at this size.
        // Same size keeps the frame already presented, the surface won't ask to repaint it.
        let same_size = self
            .display
            .as_ref()
            .is_some_and(|display| display.width() == width && display.height() == height);
        if !same_size {
            self.display = tiny_skia::Pixmap::new(width, height);
        }
        self.pump();
    }
    /// Deliver one event, then let the "event loop" paint if anything asked it to.
    pub fn dispatch(&mut self, event: &ScriptEvent) {
        self.stats.events += 1;
        if let Some((action, pos)) = event.as_pointer() {
            if !self.surface.on_pointer_event(action, pos.x, pos.y) {
                self.stats.unhandled += 1;
            }
        } else {
            let refused = match event {
                ScriptEvent::Color { value } => self.surface.set_color(value.as_input()).is_err(),
                ScriptEvent::Size { value } => self.surface.set_thickness(*value).is_err(),
                ScriptEvent::Undo => {
                    self.surface.undo();
                    false
                }
                ScriptEvent::Resize { width, height } => {
                    self.resize(*width, *height);
                    false
                }
                // Handled above.
                _ => false,
            };
            if refused {
                self.stats.rejected += 1;
            }
        }
        self.pump();
    }
    /// Run a paint cycle if one was requested.
    fn pump(&mut self) {
        if !self.surface.take_repaint_request() {
            return;
        }
        let Some(display) = self.display.as_mut() else {
            return;
        };
        if self.surface.on_paint(&mut display.as_mut()) {
            self.stats.paints += 1;
        }
    }
    /// Lay out at the script's size and deliver all of its events.
    pub fn play(&mut self, script: &Script) -> Stats {
        self.resize(script.width, script.height);
        for event in &script.events {
            self.dispatch(event);
        }
        log::info!(
            "played {} events: {} unhandled, {} rejected, {} paints, {} strokes",
            self.stats.events,
            self.stats.unhandled,
            self.stats.rejected,
            self.stats.paints,
            self.surface.history().len()
        );
        self.stats
    }
}
