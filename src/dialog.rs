use crate::constants::*;
use crate::geometry::{Bounds, Coordinate};
use crate::layout::Viewport;

const PANEL_HEIGHT: f32 = 440.0;
const CLOSE_BUTTON_SIZE: f32 = 24.0;
const CLOSE_BUTTON_INSET: f32 = 16.0;

/// Where a click landed while the dialog is showing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DialogHit {
    CloseButton,
    Panel,
    Backdrop,
}

/// Album detail overlay. Fades in and out over `DIALOG_FADE_DURATION`.
#[derive(Debug, Default)]
pub struct DetailDialog {
    open: bool,
    visibility: f32,
}

impl DetailDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `0.0` fully hidden, `1.0` fully shown.
    pub fn visibility(&self) -> f32 {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility > 0.0
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / DIALOG_FADE_DURATION;
        self.visibility = if self.open {
            (self.visibility + step).min(1.0)
        } else {
            (self.visibility - step).max(0.0)
        };
    }

    pub fn panel_bounds(&self, viewport: Viewport) -> Bounds {
        let width = DIALOG_WIDTH.min(viewport.width - 2.0 * PAGE_PADDING).max(0.0);
        let slide = (1.0 - self.visibility) * DIALOG_SLIDE_DISTANCE;
        let center = Coordinate::new(viewport.width * 0.5, viewport.height * 0.5 + slide);
        Bounds::centered_at(center, width, PANEL_HEIGHT)
    }

    pub fn close_button_bounds(&self, viewport: Viewport) -> Bounds {
        let panel = self.panel_bounds(viewport);
        Bounds::new(
            panel.x + panel.width - CLOSE_BUTTON_INSET - CLOSE_BUTTON_SIZE,
            panel.y + CLOSE_BUTTON_INSET,
            CLOSE_BUTTON_SIZE,
            CLOSE_BUTTON_SIZE,
        )
    }

    pub fn hit(&self, point: Coordinate, viewport: Viewport) -> DialogHit {
        if self.close_button_bounds(viewport).contains(point) {
            DialogHit::CloseButton
        } else if self.panel_bounds(viewport).contains(point) {
            DialogHit::Panel
        } else {
            DialogHit::Backdrop
        }
    }
}
