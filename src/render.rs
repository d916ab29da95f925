use raylib::prelude::*;
use crate::album::Album;
use crate::card::AlbumCard;
use crate::constants::*;
use crate::gallery::Gallery;
use crate::geometry::{Bounds, Coordinate};
use crate::layout::TurntableLayout;
use crate::stage::AnimationStage;
use crate::theme::{Palette, Theme};

const TITLE: &str = "My Vinyl Collection";
const HOVER_LIFT: f32 = 4.0;

const RECORD_BLACK: Color = Color::new(12, 12, 12, 255);
const GROOVE: Color = Color::new(40, 40, 40, 255);
const ZINC_900: Color = Color::new(24, 24, 27, 255);
const ZINC_800: Color = Color::new(39, 39, 42, 255);
const ZINC_700: Color = Color::new(63, 63, 70, 255);
const ZINC_600: Color = Color::new(82, 82, 91, 255);
const ZINC_500: Color = Color::new(113, 113, 122, 255);
const ZINC_400: Color = Color::new(161, 161, 170, 255);

fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

fn draw_text_centered(d: &mut RaylibDrawHandle, text: &str, center_x: f32, y: f32, size: i32, color: Color) {
    let width = d.measure_text(text, size);
    d.draw_text(text, center_x as i32 - width / 2, y as i32, size, color);
}

/// Greedy word wrap. `measure` returns the pixel width of a string.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) <= max_width || line.is_empty() {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draws one frame of the gallery. Holds no state of its own.
pub fn draw_gallery(d: &mut RaylibDrawHandle, gallery: &Gallery, covers: &[Option<Texture2D>], theme: Theme) {
    let palette = theme.palette();
    let layout = gallery.layout();
    d.clear_background(palette.background);

    draw_text_centered(d, TITLE, layout.title_center.x, layout.title_center.y - 18.0, 36, palette.text);

    if let Some(turntable) = &layout.turntable {
        draw_turntable(d, turntable, gallery.turntable().tonearm_angle(), false);
    }

    // Records still in or sliding out of their sleeve sit under the cover
    for card in gallery.cards() {
        let lift = if gallery.hovered() == Some(card.album_index) { HOVER_LIFT } else { 0.0 };
        if card.stage() == AnimationStage::SlidingOut {
            draw_record(d, card, covers.get(card.album_index).and_then(Option::as_ref));
        }
        let album = &gallery.albums()[card.album_index];
        draw_card(d, card, album, covers.get(card.album_index).and_then(Option::as_ref), lift, &palette);
    }

    // Flying and spinning records go over everything, then the tonearm on top
    for card in gallery.cards() {
        if matches!(card.stage(), AnimationStage::MovingToPlayer | AnimationStage::Spinning) {
            draw_record(d, card, covers.get(card.album_index).and_then(Option::as_ref));
        }
    }
    if let Some(turntable) = &layout.turntable {
        draw_turntable(d, turntable, gallery.turntable().tonearm_angle(), true);
    }

    if gallery.dialog().is_visible() {
        if let Some(album) = gallery.selected_album() {
            let cover = gallery.selection().and_then(|i| covers.get(i)).and_then(Option::as_ref);
            draw_dialog(d, gallery, album, cover, &palette);
        }
    }
}

fn draw_cover(d: &mut RaylibDrawHandle, bounds: Bounds, cover: Option<&Texture2D>, rotation: f32, tint: Color, palette: &Palette, label: &str) {
    let origin = Vector2::new(bounds.width * 0.5, bounds.height * 0.5);
    let center = bounds.center();
    let dest = Rectangle::new(center.x, center.y, bounds.width, bounds.height);

    match cover {
        Some(texture) => {
            // Crop the middle square so any aspect ratio fills the sleeve
            let (w, h) = (texture.width() as f32, texture.height() as f32);
            let side = w.min(h);
            let source = Rectangle::new((w - side) * 0.5, (h - side) * 0.5, side, side);
            d.draw_texture_pro(texture, source, dest, origin, rotation, tint);
        }
        None => {
            d.draw_rectangle_pro(dest, origin, rotation, faded(palette.placeholder, tint.a as f32 / 255.0));
            let initial = label.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
            draw_text_centered(d, &initial, center.x, center.y - 24.0, 48, faded(palette.muted_text, tint.a as f32 / 255.0));
        }
    }
}

fn draw_card(d: &mut RaylibDrawHandle, card: &AlbumCard, album: &Album, cover: Option<&Texture2D>, lift: f32, palette: &Palette) {
    let bounds = card.bounds().translated(0.0, -lift);
    draw_cover(d, bounds, cover, card.resting_tilt, Color::WHITE, palette, &album.title);

    let caption_x = bounds.center().x;
    draw_text_centered(d, &album.title, caption_x, card.bounds().bottom() + 10.0, 18, palette.text);
    draw_text_centered(d, &album.artist, caption_x, card.bounds().bottom() + 32.0, 14, palette.muted_text);
}

fn draw_record(d: &mut RaylibDrawHandle, card: &AlbumCard, cover: Option<&Texture2D>) {
    let center = card.record_center();
    let c: Vector2 = center.into();
    d.draw_circle_v(c, RECORD_RADIUS, RECORD_BLACK);

    for ratio in [0.92, 0.8, 0.68, 0.56] {
        d.draw_circle_lines(center.x as i32, center.y as i32, RECORD_RADIUS * ratio, GROOVE);
    }

    // Label carries the cover art so the spin is visible
    let label = RECORD_RADIUS * 0.38;
    match cover {
        Some(texture) => {
            let (w, h) = (texture.width() as f32, texture.height() as f32);
            let side = w.min(h);
            d.draw_texture_pro(
                texture,
                Rectangle::new((w - side) * 0.5, (h - side) * 0.5, side, side),
                Rectangle::new(center.x, center.y, label * 1.4, label * 1.4),
                Vector2::new(label * 0.7, label * 0.7),
                card.spin_angle(),
                Color::WHITE,
            );
        }
        None => d.draw_circle_v(c, label, Color::new(185, 28, 28, 255)),
    }

    let angle = card.spin_angle().to_radians();
    let marker = Coordinate::new(center.x + angle.cos() * label, center.y + angle.sin() * label);
    d.draw_line_ex(c, Vector2::from(marker), 2.0, Color::new(250, 250, 250, 200));
    d.draw_circle_v(c, 3.0, ZINC_400);
}

/// Draws the turntable. The tonearm is drawn in its own pass so the record
/// lands underneath it.
fn draw_turntable(d: &mut RaylibDrawHandle, turntable: &TurntableLayout, tonearm_angle: f32, tonearm_only: bool) {
    let s = turntable.scale;

    if !tonearm_only {
        let body = turntable.body;
        d.draw_rectangle_rounded(Rectangle::from(body), 0.02, 4, ZINC_900);
        d.draw_rectangle_lines_ex(Rectangle::from(body), 1.0, ZINC_800);

        // Speed knob
        let knob = Coordinate::new(body.x + body.width * 0.14, body.y + body.height * 0.3);
        d.draw_circle_v(Vector2::from(knob), 28.0 * s, ZINC_800);
        d.draw_circle_v(Vector2::from(knob), 12.0 * s, ZINC_700);

        if let Some(platter) = turntable.platter {
            let center = platter.center();
            let radius = platter.width * 0.5;
            d.draw_circle_v(Vector2::from(center), radius, ZINC_800);
            d.draw_circle_v(Vector2::from(center), radius * 0.9, ZINC_900);
            for ratio in [0.85, 0.7, 0.55, 0.4, 0.25] {
                d.draw_circle_lines(center.x as i32, center.y as i32, radius * 0.9 * ratio, ZINC_800);
            }
            d.draw_circle_v(Vector2::from(center), 4.0 * s.max(0.5), ZINC_400);
        }

        d.draw_text(
            "audio-technica",
            (body.x + body.width * 0.15) as i32,
            (body.y + body.height * 0.88) as i32,
            (12.0 * s).max(8.0) as i32,
            ZINC_500,
        );
        for i in 0..2 {
            let x = body.x + body.width * 0.78 + i as f32 * 30.0 * s;
            d.draw_rectangle_rec(Rectangle::new(x, body.y + body.height * 0.82, 24.0 * s, 8.0 * s), ZINC_700);
        }
        return;
    }

    // Arm hangs to the left of its pivot, rotating around it
    let pivot = turntable.tonearm_pivot;
    let arm = Rectangle::new(pivot.x, pivot.y, turntable.tonearm_length, 6.0 * s);
    d.draw_rectangle_pro(arm, Vector2::new(turntable.tonearm_length, 3.0 * s), tonearm_angle, ZINC_600);

    let angle = (180.0 + tonearm_angle).to_radians();
    let head = Coordinate::new(
        pivot.x + angle.cos() * turntable.tonearm_length,
        pivot.y + angle.sin() * turntable.tonearm_length,
    );
    let cartridge = Rectangle::new(head.x, head.y, 16.0 * s, 24.0 * s);
    d.draw_rectangle_pro(cartridge, Vector2::new(8.0 * s, 0.0), tonearm_angle, ZINC_700);

    d.draw_circle_v(Vector2::from(pivot), 20.0 * s, ZINC_800);
    d.draw_circle_lines(pivot.x as i32, pivot.y as i32, 20.0 * s, ZINC_700);
}

fn draw_dialog(d: &mut RaylibDrawHandle, gallery: &Gallery, album: &Album, cover: Option<&Texture2D>, palette: &Palette) {
    let dialog = gallery.dialog();
    let viewport = gallery.viewport();
    let alpha = dialog.visibility();

    d.draw_rectangle_rec(
        Rectangle::new(0.0, 0.0, viewport.width, viewport.height),
        faded(Color::BLACK, 0.5 * alpha),
    );

    let panel = dialog.panel_bounds(viewport);
    d.draw_rectangle_rounded(Rectangle::from(panel), 0.04, 8, faded(palette.panel, alpha));

    let pad = 24.0;
    let cover_bounds = Bounds::new(panel.x + pad, panel.y + pad, 144.0, 144.0);
    draw_cover(d, cover_bounds, cover, 0.0, faded(Color::WHITE, alpha), palette, &album.title);

    let text_x = cover_bounds.x + cover_bounds.width + pad;
    let text_width = (panel.x + panel.width - pad - text_x) as i32;
    let mut y = panel.y + pad;

    let title_lines = wrap_text(&album.title, text_width - 32, |t| d.measure_text(t, 24));
    for line in title_lines {
        d.draw_text(&line, text_x as i32, y as i32, 24, faded(palette.text, alpha));
        y += 28.0;
    }
    d.draw_text(&album.artist, text_x as i32, y as i32, 18, faded(palette.muted_text, alpha));
    y += 30.0;

    let description_lines = wrap_text(&album.description, text_width, |t| d.measure_text(t, 14));
    for line in description_lines {
        d.draw_text(&line, text_x as i32, y as i32, 14, faded(palette.text, alpha));
        y += 18.0;
    }

    y = y.max(cover_bounds.bottom()) + pad;
    d.draw_text("Tracks:", (panel.x + pad) as i32, y as i32, 16, faded(palette.text, alpha));
    y += 22.0;
    for (number, track) in [&album.track1, &album.track2].into_iter().enumerate() {
        let name = track.rsplit('/').next().unwrap_or(track);
        let line = format!("{}. {}", number + 1, name);
        d.draw_text(&line, (panel.x + pad) as i32, y as i32, 14, faded(palette.text, alpha));
        y += 20.0;
    }

    y += 12.0;
    d.draw_line_ex(
        Vector2::new(panel.x + pad, y),
        Vector2::new(panel.x + panel.width - pad, y),
        1.0,
        faded(palette.divider, alpha),
    );
    y += 12.0;
    let quote = format!("\"{}\"", album.comment);
    let comment_lines = wrap_text(&quote, (panel.width - 2.0 * pad) as i32, |t| d.measure_text(t, 16));
    for line in comment_lines {
        d.draw_text(&line, (panel.x + pad) as i32, y as i32, 16, faded(palette.muted_text, alpha));
        y += 20.0;
    }

    let close = dialog.close_button_bounds(viewport);
    let inset = 6.0;
    let color = faded(palette.muted_text, alpha);
    d.draw_line_ex(
        Vector2::new(close.x + inset, close.y + inset),
        Vector2::new(close.x + close.width - inset, close.bottom() - inset),
        2.0,
        color,
    );
    d.draw_line_ex(
        Vector2::new(close.x + close.width - inset, close.y + inset),
        Vector2::new(close.x + inset, close.bottom() - inset),
        2.0,
        color,
    );
}
