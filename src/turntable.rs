use log::{debug, info};
use crate::album::{Album, Collection};
use crate::audio::MediaPlayer;
use crate::constants::*;
use crate::motion::Spring;

/// Tonearm swinging between its rest and playing angles.
#[derive(Debug, Clone, Copy)]
pub struct Tonearm {
    spring: Spring,
    drop_delay: Option<f32>,
}

impl Tonearm {
    pub fn new() -> Self {
        Self {
            spring: Spring::new(TONEARM_REST_ANGLE, TONEARM_STIFFNESS, TONEARM_DAMPING, TONEARM_MASS),
            drop_delay: None,
        }
    }

    pub fn angle(&self) -> f32 {
        self.spring.value
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing {
            // Wait for the record before dropping the needle
            self.drop_delay = Some(TONEARM_DROP_DELAY);
        } else {
            self.drop_delay = None;
            self.spring.target = TONEARM_REST_ANGLE;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(remaining) = self.drop_delay {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.drop_delay = None;
                self.spring.target = TONEARM_DOWN_ANGLE;
            } else {
                self.drop_delay = Some(remaining);
            }
        }
        self.spring.update(dt);
    }
}

impl Default for Tonearm {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts and stops the album's primary track and moves the tonearm along.
pub struct TurntableDriver<'a> {
    player: Box<dyn MediaPlayer + 'a>,
    album_id: Option<String>,
    playing: bool,
    tonearm: Tonearm,
}

impl<'a> TurntableDriver<'a> {
    pub fn new(player: Box<dyn MediaPlayer + 'a>) -> Self {
        Self {
            player,
            album_id: None,
            playing: false,
            tonearm: Tonearm::new(),
        }
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn tonearm_angle(&self) -> f32 {
        self.tonearm.angle()
    }

    /// Applies `(album, playing)`. Only transitions touch the player, so
    /// repeating the current state never restarts a track.
    pub fn set_state(&mut self, album: Option<&Album>, playing: bool, collection: &Collection) {
        let playing = playing && album.is_some();
        let album_changed = album.map(|a| a.id.as_str()) != self.album_id.as_deref();

        match album {
            Some(album) if playing && (!self.playing || album_changed) => {
                if self.playing {
                    self.stop();
                }
                let source = collection.resolve(&album.track1);
                let source = source.to_string_lossy();
                match self.player.play(&source) {
                    Ok(()) => info!("Playing {} - {}", album.artist, album.title),
                    // Playback problems never reach the user
                    Err(e) => debug!("Playback of {} did not start: {}", source, e),
                }
            }
            _ if self.playing && !playing => self.stop(),
            _ => {}
        }

        if playing != self.playing {
            self.tonearm.set_playing(playing);
        }
        self.album_id = album.map(|a| a.id.clone());
        self.playing = playing;
    }

    pub fn update(&mut self, dt: f32) {
        self.player.update();
        self.tonearm.update(dt);
    }

    fn stop(&mut self) {
        self.player.pause();
        self.player.seek_to_start();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use super::*;
    use crate::audio::PlaybackError;

    #[derive(Debug, PartialEq, Eq, Clone)]
    pub enum Call {
        Play(String),
        Pause,
        Seek,
    }

    /// Player that logs every call, optionally failing to start.
    #[derive(Default, Clone)]
    pub struct RecordingPlayer {
        pub calls: Rc<RefCell<Vec<Call>>>,
        pub fail: bool,
    }

    impl RecordingPlayer {
        pub fn plays(&self) -> usize {
            self.calls.borrow().iter().filter(|c| matches!(c, Call::Play(_))).count()
        }
    }

    impl MediaPlayer for RecordingPlayer {
        fn play(&mut self, source: &str) -> Result<(), PlaybackError> {
            self.calls.borrow_mut().push(Call::Play(source.to_string()));
            if self.fail {
                Err(PlaybackError::Missing(source.to_string()))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.calls.borrow_mut().push(Call::Pause);
        }

        fn seek_to_start(&mut self) {
            self.calls.borrow_mut().push(Call::Seek);
        }
    }

    fn collection() -> Collection {
        let text = r#"[
            {"id":"a1","title":"One","artist":"X","cover":"c1.jpg","description":"","track1":"one.mp3","track2":"","comment":""},
            {"id":"a2","title":"Two","artist":"Y","cover":"c2.jpg","description":"","track1":"two.mp3","track2":"","comment":""}
        ]"#;
        Collection::parse(text, PathBuf::from("music")).unwrap()
    }

    #[test]
    fn starts_primary_track_and_stops_with_rewind() {
        let collection = collection();
        let player = RecordingPlayer::default();
        let mut driver = TurntableDriver::new(Box::new(player.clone()));

        driver.set_state(Some(&collection.albums[0]), true, &collection);
        driver.set_state(Some(&collection.albums[0]), false, &collection);

        let expected_source = PathBuf::from("music").join("one.mp3").to_string_lossy().into_owned();
        assert_eq!(
            *player.calls.borrow(),
            [Call::Play(expected_source), Call::Pause, Call::Seek]
        );
    }

    #[test]
    fn repeating_the_state_does_not_restart() {
        let collection = collection();
        let player = RecordingPlayer::default();
        let mut driver = TurntableDriver::new(Box::new(player.clone()));

        for _ in 0..3 {
            driver.set_state(Some(&collection.albums[0]), true, &collection);
        }
        assert_eq!(player.plays(), 1);
    }

    #[test]
    fn switching_album_while_playing_restarts() {
        let collection = collection();
        let player = RecordingPlayer::default();
        let mut driver = TurntableDriver::new(Box::new(player.clone()));

        driver.set_state(Some(&collection.albums[0]), true, &collection);
        driver.set_state(Some(&collection.albums[1]), true, &collection);
        assert_eq!(player.plays(), 2);
        assert!(player.calls.borrow().contains(&Call::Pause));
    }

    #[test]
    fn failed_start_is_swallowed() {
        let collection = collection();
        let player = RecordingPlayer { fail: true, ..Default::default() };
        let mut driver = TurntableDriver::new(Box::new(player.clone()));

        driver.set_state(Some(&collection.albums[0]), true, &collection);
        assert!(driver.is_playing());
    }

    #[test]
    fn no_album_never_plays() {
        let collection = collection();
        let player = RecordingPlayer::default();
        let mut driver = TurntableDriver::new(Box::new(player.clone()));

        driver.set_state(None, true, &collection);
        assert!(!driver.is_playing());
        assert!(player.calls.borrow().is_empty());
    }

    #[test]
    fn tonearm_drops_after_delay_and_returns() {
        let mut arm = Tonearm::new();
        arm.set_playing(true);
        arm.update(TONEARM_DROP_DELAY * 0.5);
        assert_eq!(arm.angle(), TONEARM_REST_ANGLE);

        for _ in 0..(60 * 5) {
            arm.update(1.0 / 60.0);
        }
        assert!((arm.angle() - TONEARM_DOWN_ANGLE).abs() < 0.05);

        arm.set_playing(false);
        for _ in 0..(60 * 5) {
            arm.update(1.0 / 60.0);
        }
        assert!((arm.angle() - TONEARM_REST_ANGLE).abs() < 0.05);
    }
}
