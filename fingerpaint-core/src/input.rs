//! # Input routing
//!
//! Maps raw pointer events onto [`StrokeBuilder`] transitions. Only one pointer is ever tracked:
//! the one that went down first owns the gesture until it lifts.
//!
//! ```ignore
//!            down              up
//!   IDLE ----------> DRAWING ------> IDLE
//!                    |  ^  |
//!                    +--+  | cancel
//!                    move  +-------> IDLE
//! ```

use crate::{
    state::{BrushSettings, StrokeHistory},
    stroke::{Commit, GesturePhase, Point, StrokeBuilder},
};

/// The kinds of pointer event a host platform reports.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, strum::EnumString, strum::IntoStaticStr, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum PointerAction {
    /// The primary pointer touched down.
    Down,
    /// A pointer that is down moved.
    Move,
    /// The primary pointer lifted.
    Up,
    /// The platform took the gesture away.
    Cancel,
    /// An additional pointer touched down while the primary is still down.
    PointerDown,
    /// An additional pointer lifted.
    PointerUp,
    /// Pointer movement without contact.
    Hover,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// Position in surface pixels, `(x, y)`.
    pub position: Point,
}
impl PointerEvent {
    #[must_use]
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Point::new(x, y),
        }
    }
}

/// What routing an event did.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Routed {
    Began,
    Extended,
    Committed(Commit),
    Cancelled,
    /// The event does not apply in the current state, and should continue to propagate.
    Unhandled,
}
impl Routed {
    /// Whether the event was consumed, as reported back to the platform.
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Unhandled)
    }
}

/// Route one event. The gesture state lives in `builder`, `brush` is what a new stroke begins with.
pub fn route(
    builder: &mut StrokeBuilder,
    history: &mut StrokeHistory,
    brush: &BrushSettings,
    event: PointerEvent,
) -> Routed {
    use PointerAction as Action;

    let routed = match (builder.phase(), event.action) {
        (GesturePhase::NotReady, _) => Routed::Unhandled,
        // Down while drawing means we missed an up. Restart from here.
        (GesturePhase::Idle | GesturePhase::Drawing, Action::Down) => {
            if builder.begin(brush, event.position) {
                Routed::Began
            } else {
                Routed::Unhandled
            }
        }
        (GesturePhase::Drawing, Action::Move) => {
            builder.extend(event.position);
            Routed::Extended
        }
        (GesturePhase::Drawing, Action::Up) => builder
            .commit(history)
            .map_or(Routed::Unhandled, Routed::Committed),
        (GesturePhase::Drawing, Action::Cancel) => {
            builder.cancel();
            Routed::Cancelled
        }
        // Secondary pointers are not tracked.
        (_, Action::PointerDown | Action::PointerUp) => Routed::Unhandled,
        (GesturePhase::Idle, Action::Move | Action::Up | Action::Cancel)
        | (_, Action::Hover) => Routed::Unhandled,
    };
    if routed != Routed::Extended {
        log::trace!("{:?} -> {routed:?}", event.action);
    }
    routed
}
