use log::trace;
use crate::geometry::Coordinate;
use crate::layout::TurntableLayout;

/// Anything that may have moved the turntable on screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LayoutEvent {
    Mount,
    Resize,
    Scroll,
}

/// Keeps the viewport-space center of the turntable platter.
#[derive(Debug, Default)]
pub struct PositionTracker {
    target: Coordinate,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest platter center; `(0, 0)` until a turntable has been measured.
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Recomputes the target. No turntable resets to the default coordinate,
    /// no platter falls back to the center of the whole body.
    pub fn measure(&mut self, event: LayoutEvent, turntable: Option<&TurntableLayout>) -> Coordinate {
        self.target = match turntable {
            Some(t) => t.platter.unwrap_or(t.body).center(),
            None => Coordinate::default(),
        };
        trace!("{:?}: platter target {:?}", event, self.target);
        self.target
    }
}
