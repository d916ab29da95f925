use crate::constants::*;
use crate::geometry::{Bounds, Coordinate};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// On-screen placement of the turntable model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurntableLayout {
    pub body: Bounds,
    /// Missing when the body is too small to hold a platter.
    pub platter: Option<Bounds>,
    pub tonearm_pivot: Coordinate,
    pub tonearm_length: f32,
    pub scale: f32,
}

impl TurntableLayout {
    fn compute(viewport: Viewport, top: f32) -> Self {
        let width = TURNTABLE_WIDTH.min(viewport.width - 2.0 * PAGE_PADDING).max(0.0);
        let scale = width / TURNTABLE_WIDTH;
        let height = TURNTABLE_HEIGHT * scale;
        let body = Bounds::new((viewport.width - width) * 0.5, top, width, height);

        let diameter = PLATTER_DIAMETER * scale;
        let platter = (diameter >= PLATTER_MIN_DIAMETER)
            .then(|| Bounds::centered_at(body.center(), diameter, diameter));

        Self {
            body,
            platter,
            tonearm_pivot: Coordinate::new(body.x + width * 0.86, body.y + height * 0.2),
            tonearm_length: 128.0 * scale,
            scale,
        }
    }
}

/// Number of grid columns for a window width: one on narrow windows, up to four from 1024 px.
pub fn columns_for_width(width: f32) -> usize {
    if width < 640.0 {
        1
    } else if width < 768.0 {
        2
    } else if width < 1024.0 {
        3
    } else {
        4
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryLayout {
    pub title_center: Coordinate,
    pub turntable: Option<TurntableLayout>,
    /// Cover bounds in album order.
    pub covers: Vec<Bounds>,
    pub content_height: f32,
}

impl GalleryLayout {
    /// Lays the page out in content space, then shifts it by `scroll`.
    pub fn compute(viewport: Viewport, card_count: usize, turntable_mounted: bool, scroll: f32) -> Self {
        let turntable = turntable_mounted.then(|| TurntableLayout::compute(viewport, HEADER_HEIGHT));

        let grid_top = match &turntable {
            Some(t) => t.body.bottom() + PAGE_PADDING,
            None => HEADER_HEIGHT,
        };

        let columns = columns_for_width(viewport.width);
        let rows = card_count.div_ceil(columns);
        let cell_width = ((viewport.width - 2.0 * PAGE_PADDING - GRID_GAP * (columns - 1) as f32)
            / columns as f32)
            .max(COVER_SIZE);
        let row_height = COVER_SIZE + CAPTION_HEIGHT;

        let covers = (0..card_count)
            .map(|i| {
                let (row, column) = (i / columns, i % columns);
                let x = PAGE_PADDING + column as f32 * (cell_width + GRID_GAP) + (cell_width - COVER_SIZE) * 0.5;
                let y = grid_top + row as f32 * (row_height + GRID_GAP);
                Bounds::new(x, y - scroll, COVER_SIZE, COVER_SIZE)
            })
            .collect();

        let grid_height = if rows == 0 {
            0.0
        } else {
            rows as f32 * row_height + (rows - 1) as f32 * GRID_GAP
        };

        Self {
            title_center: Coordinate::new(viewport.width * 0.5, HEADER_HEIGHT * 0.5 - scroll),
            turntable: turntable.map(|t| t.shifted(-scroll)),
            covers,
            content_height: grid_top + grid_height + PAGE_PADDING,
        }
    }

    pub fn max_scroll(&self, viewport: Viewport) -> f32 {
        (self.content_height - viewport.height).max(0.0)
    }
}

impl TurntableLayout {
    fn shifted(self, dy: f32) -> Self {
        Self {
            body: self.body.translated(0.0, dy),
            platter: self.platter.map(|p| p.translated(0.0, dy)),
            tonearm_pivot: Coordinate::new(self.tonearm_pivot.x, self.tonearm_pivot.y + dy),
            ..self
        }
    }
}
