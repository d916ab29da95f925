use log::debug;
use crate::constants::*;
use crate::geometry::{Bounds, Coordinate};
use crate::motion::Motion;
use crate::stage::AnimationStage;

/// One-shot notifications a card sends to the gallery during a selection cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardSignal {
    /// The record landed on the platter; the turntable may start playing.
    ReachedPlayer,
    /// The whole sequence finished; the detail dialog may open.
    SequenceComplete,
}

pub struct AlbumCard {
    pub album_index: usize,
    pub resting_tilt: f32,

    stage: AnimationStage,
    motion: Option<Motion>,

    bounds: Bounds,
    center: Coordinate,

    // Record position relative to the card center
    offset: Coordinate,
    spin_angle: f32,

    reached_player_sent: bool,
    sequence_complete_sent: bool,
}

impl AlbumCard {
    pub fn new(album_index: usize, resting_tilt: f32) -> Self {
        Self {
            album_index,
            resting_tilt,
            stage: AnimationStage::Idle,
            motion: None,
            bounds: Bounds::default(),
            center: Coordinate::default(),
            offset: Coordinate::default(),
            spin_angle: 0.0,
            reached_player_sent: false,
            sequence_complete_sent: false,
        }
    }

    pub fn stage(&self) -> AnimationStage {
        self.stage
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[cfg(test)]
    pub fn center(&self) -> Coordinate {
        self.center
    }

    #[cfg(test)]
    pub fn offset(&self) -> Coordinate {
        self.offset
    }

    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    pub fn record_center(&self) -> Coordinate {
        self.center + self.offset
    }

    /// Vector that carries the record from this card to `target`.
    pub fn translation(&self, target: Coordinate) -> Coordinate {
        target - self.center
    }

    /// Records the cover's on-screen box. Called on every layout event.
    pub fn measure(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.center = bounds.center();
    }

    pub fn set_active(&mut self, active: bool) {
        if active {
            if self.stage.is_active() {
                return;
            }
            self.stage = self.stage.activate();
            self.motion = Some(Motion::slide_out(SLIDE_OUT_DURATION));
            self.offset = Coordinate::default();
            self.spin_angle = 0.0;
            self.reached_player_sent = false;
            self.sequence_complete_sent = false;
            debug!("card {} activated", self.album_index);
        } else if self.stage.is_active() {
            debug!("card {} reset from {:?}", self.album_index, self.stage);
            self.stage = self.stage.deactivate();
            self.motion = None;
            self.offset = Coordinate::default();
            self.spin_angle = 0.0;
        }
    }

    /// Advances the running motion against the latest platter `target`.
    pub fn update(&mut self, dt: f32, target: Coordinate) -> Vec<CardSignal> {
        let mut signals = Vec::new();

        match self.stage {
            AnimationStage::Idle => {}
            AnimationStage::SlidingOut => {
                let completed = self.advance_motion(dt);
                let progress = self.motion_progress();
                self.offset = Coordinate::new(SLIDE_OUT_DISTANCE * progress, 0.0);

                if completed {
                    self.enter(self.stage.on_motion_complete());
                    self.motion = Some(Motion::fly(MOVE_DURATION));
                }
            }
            AnimationStage::MovingToPlayer => {
                let completed = self.advance_motion(dt);
                let progress = self.motion_progress();
                let start = Coordinate::new(SLIDE_OUT_DISTANCE, 0.0);
                self.offset = start.lerp(self.translation(target), progress);

                if completed {
                    self.enter(self.stage.on_motion_complete());
                    self.motion = None;
                    self.offset = self.translation(target);

                    if !self.reached_player_sent {
                        self.reached_player_sent = true;
                        signals.push(CardSignal::ReachedPlayer);
                    }
                    if !self.sequence_complete_sent {
                        self.sequence_complete_sent = true;
                        signals.push(CardSignal::SequenceComplete);
                    }
                }
            }
            AnimationStage::Spinning => {
                self.spin_angle = (self.spin_angle + 360.0 * dt / SPIN_PERIOD) % 360.0;
                // Stay on the platter when the layout moves underneath
                self.offset = self.translation(target);
            }
        }

        signals
    }

    fn enter(&mut self, stage: AnimationStage) {
        debug!("card {}: {:?} -> {:?}", self.album_index, self.stage, stage);
        self.stage = stage;
    }

    fn advance_motion(&mut self, dt: f32) -> bool {
        self.motion.as_mut().is_some_and(|m| m.advance(dt))
    }

    fn motion_progress(&self) -> f32 {
        self.motion.as_ref().map_or(0.0, Motion::progress)
    }
}
