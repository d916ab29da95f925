use std::path::Path;
use log::{debug, warn};
use raylib::prelude::*;
use thiserror::Error;
use crate::album::is_remote;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("remote sources cannot be streamed: {0}")]
    Remote(String),
    #[error("track not found: {0}")]
    Missing(String),
    #[error("failed to open {source_path}: {reason}")]
    Open { source_path: String, reason: String },
}

/// Play/pause/seek on a single source.
pub trait MediaPlayer {
    fn play(&mut self, source: &str) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn seek_to_start(&mut self);
    /// Called once per frame so streaming backends can refill their buffers.
    fn update(&mut self) {}
}

/// Used when the audio device is unavailable or the app runs muted.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl MediaPlayer for SilentPlayer {
    fn play(&mut self, source: &str) -> Result<(), PlaybackError> {
        debug!("muted, not playing {}", source);
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek_to_start(&mut self) {}
}

/// Streams tracks through raylib's audio device.
pub struct RaylibMediaPlayer<'a> {
    audio: &'a RaylibAudio,
    music: Option<Music<'a>>,
}

impl<'a> RaylibMediaPlayer<'a> {
    pub fn new(audio: &'a RaylibAudio) -> Self {
        Self { audio, music: None }
    }
}

impl MediaPlayer for RaylibMediaPlayer<'_> {
    fn play(&mut self, source: &str) -> Result<(), PlaybackError> {
        // Drop whatever was loaded before, even if the new track fails
        if let Some(mut music) = self.music.take() {
            music.stop_stream();
        }

        if is_remote(source) {
            return Err(PlaybackError::Remote(source.to_string()));
        }
        if !Path::new(source).is_file() {
            return Err(PlaybackError::Missing(source.to_string()));
        }

        let mut music = self.audio.new_music(source).map_err(|e| PlaybackError::Open {
            source_path: source.to_string(),
            reason: e.to_string(),
        })?;
        music.play_stream();
        self.music = Some(music);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(music) = self.music.as_mut() {
            music.pause_stream();
        }
    }

    fn seek_to_start(&mut self) {
        if let Some(music) = self.music.as_mut() {
            music.seek_stream(0.0);
        }
    }

    fn update(&mut self) {
        if let Some(music) = self.music.as_mut() {
            music.update_stream();
        }
    }
}

/// Opens the audio device, falling back to silence when it is unavailable.
pub fn open_audio_device(muted: bool) -> Option<RaylibAudio> {
    if muted {
        return None;
    }
    match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Audio device unavailable, continuing without sound: {}", e);
            None
        }
    }
}
