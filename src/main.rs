use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

mod album;
mod audio;
mod card;
mod constants;
mod dialog;
mod gallery;
mod geometry;
mod layout;
mod motion;
mod render;
mod stage;
mod texture_loader;
mod theme;
mod tracker;
mod turntable;

use crate::album::Collection;
use crate::audio::{MediaPlayer, RaylibMediaPlayer, SilentPlayer, open_audio_device};
use crate::constants::*;
use crate::gallery::Gallery;
use crate::geometry::Coordinate;
use crate::layout::Viewport;
use crate::texture_loader::load_covers;
use crate::theme::Theme;

/// A wall of album covers. Click one to put it on the turntable.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON collection to show instead of the bundled one
    ///
    /// Cover and track paths resolve against the file's directory. The bundled
    /// collection looks in ./covers and ./tracks, which are not shipped: missing
    /// covers draw as placeholders and missing tracks stay silent.
    #[arg(short, long)]
    collection: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Do not open the audio device
    #[arg(long)]
    mute: bool,
}

fn load_collection(path: Option<&PathBuf>) -> Result<Collection> {
    let collection = match path {
        Some(path) => Collection::load(path).with_context(|| format!("Error loading albums from {:?}", path))?,
        None => Collection::bundled().context("Error loading the bundled albums")?,
    };
    info!("Loaded {} albums", collection.albums.len());
    Ok(collection)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Vinyl Wall")
        .vsync()
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes the dialog, not the window
    rl.set_exit_key(None);

    // --- Load Albums ---
    let collection = match load_collection(args.collection.as_ref()) {
        Ok(collection) => collection,
        Err(e) => {
            error!("{:#}", e);
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            d.draw_text(&format!("Error: {:#}", e), 20, 20, 20, Color::RED);
            drop(d);
            std::thread::sleep(Duration::from_secs(5));
            return Err(e);
        }
    };

    let covers = load_covers(&mut rl, &thread, &collection);

    let audio = open_audio_device(args.mute);
    let player: Box<dyn MediaPlayer + '_> = match &audio {
        Some(audio) => Box::new(RaylibMediaPlayer::new(audio)),
        None => Box::new(SilentPlayer),
    };

    let viewport = Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    let mut gallery = Gallery::new(collection, player, viewport);
    let mut theme = args.theme;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        if rl.is_window_resized() {
            gallery.resize(Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32));
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            gallery.scroll_by(-wheel * SCROLL_STEP);
        }

        let mouse = Coordinate::from(rl.get_mouse_position());
        gallery.hover(mouse);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            gallery.click(mouse);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            gallery.request_close();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            theme = theme.toggled();
            info!("Theme: {:?}", theme);
        }
        let pointer = if gallery.hovered().is_some() {
            MouseCursor::MOUSE_CURSOR_POINTING_HAND
        } else {
            MouseCursor::MOUSE_CURSOR_DEFAULT
        };
        rl.set_mouse_cursor(pointer);

        // --- Update ---
        gallery.update(dt);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        render::draw_gallery(&mut d, &gallery, &covers, theme);
    }

    Ok(())
}
