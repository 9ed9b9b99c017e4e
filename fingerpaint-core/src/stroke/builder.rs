//! Accumulates the single in-progress stroke from pointer transitions.

use super::{Point, Stroke};
use crate::state::{BrushSettings, StrokeHistory};

/// Where the in-progress stroke is in its lifecycle.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum ActiveStroke {
    /// There is no surface to draw onto yet. Nothing may begin.
    #[default]
    NotReady,
    /// Waiting for the pointer to go down.
    Idle,
    /// Pointer is down, points are being collected.
    Drawing(Stroke),
}

/// [`ActiveStroke`] without the stroke, for inspecting the state machine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GesturePhase {
    NotReady,
    Idle,
    Drawing,
}

/// Result of a [`StrokeBuilder::commit`] that ended a gesture.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Commit {
    /// The stroke was appended to the history.
    Stored,
    /// The stroke had no segments and was dropped.
    DiscardedEmpty,
}

#[derive(Default, Debug)]
pub struct StrokeBuilder {
    state: ActiveStroke,
}
impl StrokeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            ActiveStroke::NotReady => GesturePhase::NotReady,
            ActiveStroke::Idle => GesturePhase::Idle,
            ActiveStroke::Drawing(_) => GesturePhase::Drawing,
        }
    }
    /// The stroke being drawn, if any. May be empty.
    #[must_use]
    pub fn active(&self) -> Option<&Stroke> {
        match &self.state {
            ActiveStroke::Drawing(stroke) => Some(stroke),
            _ => None,
        }
    }
    /// A surface now exists. Leaves an in-progress gesture untouched.
    pub fn make_ready(&mut self) {
        if matches!(self.state, ActiveStroke::NotReady) {
            self.state = ActiveStroke::Idle;
        }
    }
    /// The surface went away. Any in-progress stroke is lost.
    pub fn make_not_ready(&mut self) {
        if let ActiveStroke::Drawing(stroke) = &self.state {
            log::debug!(
                "surface released mid-gesture, dropping {} points",
                stroke.points().len()
            );
        }
        self.state = ActiveStroke::NotReady;
    }
    /// Start a new stroke at `at` with a snapshot of `brush`, discarding any prior in-progress geometry.
    ///
    /// Returns false if there is no surface yet.
    pub fn begin(&mut self, brush: &BrushSettings, at: Point) -> bool {
        match &self.state {
            ActiveStroke::NotReady => return false,
            ActiveStroke::Idle => (),
            ActiveStroke::Drawing(stroke) => {
                log::debug!("gesture restarted, dropping {} points", stroke.points().len());
            }
        }
        log::trace!("stroke begin at ({}, {})", at.x, at.y);
        self.state = ActiveStroke::Drawing(Stroke::new(*brush, at));
        true
    }
    /// Add a segment to the in-progress stroke. No-op returning false if no stroke has begun.
    pub fn extend(&mut self, to: Point) -> bool {
        match &mut self.state {
            ActiveStroke::Drawing(stroke) => {
                stroke.line_to(to);
                true
            }
            _ => false,
        }
    }
    /// Finish the in-progress stroke, pushing it into `history` if it has at least one segment.
    ///
    /// Returns `None` if no stroke had begun.
    pub fn commit(&mut self, history: &mut StrokeHistory) -> Option<Commit> {
        let stroke = match std::mem::replace(&mut self.state, ActiveStroke::Idle) {
            ActiveStroke::Drawing(stroke) => stroke,
            other => {
                self.state = other;
                return None;
            }
        };

        if stroke.is_empty() {
            log::trace!("discarding empty stroke");
            Some(Commit::DiscardedEmpty)
        } else {
            log::debug!(
                "committing stroke of {} segments, {} {}px",
                stroke.segment_count(),
                stroke.color(),
                stroke.thickness()
            );
            history.push_back(stroke);
            Some(Commit::Stored)
        }
    }
    /// Abandon the in-progress stroke without committing it. Returns false if none had begun.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, ActiveStroke::Drawing(_)) {
            log::trace!("stroke cancelled");
            self.state = ActiveStroke::Idle;
            true
        } else {
            false
        }
    }
    /// Brush changed. Reflect it on the in-progress stroke so the change is live mid-gesture.
    pub fn set_brush(&mut self, brush: &BrushSettings) {
        if let ActiveStroke::Drawing(stroke) = &mut self.state {
            stroke.set_brush(*brush);
        }
    }
}
