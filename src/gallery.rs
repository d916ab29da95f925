use log::{debug, info};
use rand::Rng;
use crate::album::{Album, Collection};
use crate::audio::MediaPlayer;
use crate::card::{AlbumCard, CardSignal};
use crate::constants::*;
use crate::dialog::{DetailDialog, DialogHit};
use crate::geometry::Coordinate;
use crate::layout::{GalleryLayout, Viewport};
use crate::stage::AnimationStage;
use crate::tracker::{LayoutEvent, PositionTracker};
use crate::turntable::TurntableDriver;

/// The page: album grid, turntable and detail dialog around one selection.
pub struct Gallery<'a> {
    collection: Collection,
    cards: Vec<AlbumCard>,
    selection: Option<usize>,

    tracker: PositionTracker,
    turntable: TurntableDriver<'a>,
    dialog: DetailDialog,

    viewport: Viewport,
    scroll: f32,
    layout: GalleryLayout,
    hovered: Option<usize>,

    // Seconds until the selection clears after the dialog was dismissed
    pending_deselect: Option<f32>,
}

impl<'a> Gallery<'a> {
    pub fn new(collection: Collection, player: Box<dyn MediaPlayer + 'a>, viewport: Viewport) -> Self {
        let mut rng = rand::rng();
        let cards = (0..collection.albums.len())
            .map(|i| AlbumCard::new(i, rng.random_range(-MAX_RESTING_TILT..MAX_RESTING_TILT)))
            .collect::<Vec<_>>();
        let layout = GalleryLayout::compute(viewport, cards.len(), false, 0.0);

        let mut gallery = Self {
            collection,
            cards,
            selection: None,
            tracker: PositionTracker::new(),
            turntable: TurntableDriver::new(player),
            dialog: DetailDialog::new(),
            viewport,
            scroll: 0.0,
            layout,
            hovered: None,
            pending_deselect: None,
        };
        gallery.relayout(LayoutEvent::Mount);
        gallery
    }

    pub fn albums(&self) -> &[Album] {
        &self.collection.albums
    }

    pub fn cards(&self) -> &[AlbumCard] {
        &self.cards
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_album(&self) -> Option<&Album> {
        self.selection.and_then(|i| self.collection.albums.get(i))
    }

    pub fn layout(&self) -> &GalleryLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dialog(&self) -> &DetailDialog {
        &self.dialog
    }

    pub fn turntable(&self) -> &TurntableDriver<'a> {
        &self.turntable
    }

    #[cfg(test)]
    pub fn target(&self) -> Coordinate {
        self.tracker.target()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout(LayoutEvent::Resize);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        let scroll = (self.scroll + delta).clamp(0.0, self.layout.max_scroll(self.viewport));
        if scroll != self.scroll {
            self.scroll = scroll;
            self.relayout(LayoutEvent::Scroll);
        }
    }

    pub fn hover(&mut self, point: Coordinate) {
        self.hovered = if self.dialog.is_visible() { None } else { self.card_at(point) };
    }

    pub fn click(&mut self, point: Coordinate) {
        if self.dialog.is_open() {
            match self.dialog.hit(point, self.viewport) {
                DialogHit::CloseButton | DialogHit::Backdrop => self.request_close(),
                DialogHit::Panel => {}
            }
            return;
        }

        if let Some(index) = self.card_at(point) {
            self.select(index);
        }
    }

    pub fn card_at(&self, point: Coordinate) -> Option<usize> {
        self.cards.iter().position(|card| card.bounds().contains(point))
    }

    pub fn select(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        self.pending_deselect = None;

        if self.selection == Some(index) {
            // Already on the turntable, only bring the details back
            if self.cards[index].stage() == AnimationStage::Spinning {
                self.dialog.open();
            }
            return;
        }

        if let Some(previous) = self.selection {
            self.cards[previous].set_active(false);
        }
        self.dialog.close();
        self.turntable.set_state(None, false, &self.collection);

        let mounting = self.selection.is_none();
        self.selection = Some(index);
        if mounting {
            self.relayout(LayoutEvent::Mount);
        }

        info!("Selected {}", self.collection.albums[index].title);
        self.cards[index].set_active(true);
        self.turntable
            .set_state(self.collection.albums.get(index), false, &self.collection);
    }

    /// Hides the dialog now and lets go of the selection once it has faded.
    pub fn request_close(&mut self) {
        if self.dialog.is_open() {
            self.dialog.close();
            self.pending_deselect = Some(DESELECT_DELAY);
        }
    }

    pub fn deselect(&mut self) {
        self.pending_deselect = None;
        if let Some(index) = self.selection.take() {
            debug!("Deselected {}", self.collection.albums[index].id);
            self.cards[index].set_active(false);
            self.dialog.close();
            self.turntable.set_state(None, false, &self.collection);
            self.relayout(LayoutEvent::Mount);
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(remaining) = self.pending_deselect {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.deselect();
            } else {
                self.pending_deselect = Some(remaining);
            }
        }

        let target = self.tracker.target();
        let signals = self
            .cards
            .iter_mut()
            .flat_map(|card| card.update(dt, target))
            .collect::<Vec<_>>();
        for signal in signals {
            self.handle_signal(signal);
        }

        self.turntable.update(dt);
        self.dialog.update(dt);
    }

    fn handle_signal(&mut self, signal: CardSignal) {
        debug!("{:?}", signal);
        match signal {
            CardSignal::ReachedPlayer => {
                let album = self.selection.and_then(|i| self.collection.albums.get(i));
                self.turntable.set_state(album, true, &self.collection);
            }
            CardSignal::SequenceComplete => self.dialog.open(),
        }
    }

    /// Lays the page out again and remeasures the turntable and every card.
    fn relayout(&mut self, event: LayoutEvent) {
        let mounted = self.selection.is_some();
        self.layout = GalleryLayout::compute(self.viewport, self.cards.len(), mounted, self.scroll);

        let max_scroll = self.layout.max_scroll(self.viewport);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
            self.layout = GalleryLayout::compute(self.viewport, self.cards.len(), mounted, self.scroll);
        }

        self.tracker.measure(event, self.layout.turntable.as_ref());
        for (card, bounds) in self.cards.iter_mut().zip(&self.layout.covers) {
            card.measure(*bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use super::*;
    use crate::turntable::tests::{Call, RecordingPlayer};

    const DT: f32 = 1.0 / 60.0;
    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn collection() -> Collection {
        let albums = ["a1", "a2", "a3", "a4", "a5", "a6"]
            .iter()
            .map(|id| {
                format!(
                    r#"{{"id":"{id}","title":"Title {id}","artist":"Artist","cover":"{id}.jpg","description":"","track1":"{id}.mp3","track2":"","comment":""}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        Collection::parse(&format!("[{albums}]"), PathBuf::from("lib")).unwrap()
    }

    fn gallery(player: &RecordingPlayer) -> Gallery<'static> {
        Gallery::new(collection(), Box::new(player.clone()), VIEWPORT)
    }

    fn run(gallery: &mut Gallery, seconds: f32) {
        for _ in 0..(seconds / DT).ceil() as usize {
            gallery.update(DT);
        }
    }

    fn active_cards(gallery: &Gallery) -> usize {
        gallery.cards().iter().filter(|c| c.stage().is_active()).count()
    }

    #[test]
    fn nothing_mounted_before_the_first_selection() {
        let gallery = gallery(&RecordingPlayer::default());
        assert!(gallery.layout().turntable.is_none());
        assert_eq!(gallery.target(), Coordinate::default());
        assert_eq!(active_cards(&gallery), 0);
    }

    #[test]
    fn full_selection_cycle() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        gallery.select(0);
        assert!(gallery.layout().turntable.is_some());
        assert_ne!(gallery.target(), Coordinate::default());
        assert_eq!(gallery.cards()[0].stage(), AnimationStage::SlidingOut);
        assert!(!gallery.dialog().is_open());
        assert_eq!(player.plays(), 0);

        run(&mut gallery, 3.0);
        assert_eq!(gallery.cards()[0].stage(), AnimationStage::Spinning);
        assert_eq!(gallery.cards()[0].record_center(), gallery.target());
        assert!(gallery.turntable().is_playing());
        assert!(gallery.dialog().is_open());
        assert_eq!(player.plays(), 1);
    }

    #[test]
    fn switching_before_arrival_resets_the_first_card() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        gallery.select(0);
        run(&mut gallery, SLIDE_OUT_DURATION + MOVE_DURATION * 0.5);
        gallery.select(1);

        assert_eq!(gallery.cards()[0].stage(), AnimationStage::Idle);
        assert_eq!(gallery.cards()[1].stage(), AnimationStage::SlidingOut);
        assert_eq!(gallery.cards()[1].offset(), Coordinate::default());
        assert_eq!(player.plays(), 0);

        run(&mut gallery, 3.0);
        assert_eq!(gallery.cards()[0].stage(), AnimationStage::Idle);
        assert_eq!(gallery.selected_album().unwrap().id, "a2");
        let plays: Vec<_> = player
            .calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Play(source) => Some(source.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(plays.len(), 1);
        assert!(plays[0].ends_with("a2.mp3"));
    }

    #[test]
    fn reselecting_the_active_album_keeps_playing() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        gallery.select(2);
        run(&mut gallery, 3.0);
        gallery.select(2);
        run(&mut gallery, 1.0);

        assert_eq!(player.plays(), 1);
        assert!(!player.calls.borrow().contains(&Call::Pause));
        assert_eq!(gallery.cards()[2].stage(), AnimationStage::Spinning);
    }

    #[test]
    fn at_most_one_active_card() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        for (index, wait) in [(0, 0.1), (3, 0.5), (3, 0.2), (5, 2.0), (1, 0.0), (4, 0.7), (0, 3.0)] {
            gallery.select(index);
            assert!(active_cards(&gallery) <= 1);
            run(&mut gallery, wait);
            assert!(active_cards(&gallery) <= 1);
        }
    }

    #[test]
    fn closing_the_dialog_clears_the_selection_after_the_fade() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        gallery.select(0);
        run(&mut gallery, 3.0);
        gallery.request_close();
        assert!(!gallery.dialog().is_open());
        assert_eq!(gallery.selection(), Some(0));

        run(&mut gallery, DESELECT_DELAY + 0.1);
        assert_eq!(gallery.selection(), None);
        assert_eq!(gallery.cards()[0].stage(), AnimationStage::Idle);
        assert!(gallery.layout().turntable.is_none());
        assert_eq!(gallery.target(), Coordinate::default());
        assert!(!gallery.turntable().is_playing());
        assert!(player.calls.borrow().ends_with(&[Call::Pause, Call::Seek]));
    }

    #[test]
    fn selecting_during_the_fade_cancels_the_deselect() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        gallery.select(0);
        run(&mut gallery, 3.0);
        gallery.request_close();
        gallery.select(1);
        run(&mut gallery, 3.0);

        assert_eq!(gallery.selection(), Some(1));
        assert_eq!(gallery.cards()[1].stage(), AnimationStage::Spinning);
    }

    #[test]
    fn clicks_route_to_cards_and_dialog() {
        let player = RecordingPlayer::default();
        let mut gallery = gallery(&player);

        let cover = gallery.cards()[3].center();
        gallery.click(cover);
        assert_eq!(gallery.selection(), Some(3));

        run(&mut gallery, 3.0);
        assert!(gallery.dialog().is_open());

        // Inside the panel nothing happens
        let panel = gallery.dialog().panel_bounds(VIEWPORT).center();
        gallery.click(panel);
        assert!(gallery.dialog().is_open());

        gallery.click(Coordinate::new(2.0, 2.0));
        assert!(!gallery.dialog().is_open());
    }

    #[test]
    fn hover_tracks_covers_and_pauses_under_the_dialog() {
        let mut gallery = gallery(&RecordingPlayer::default());

        gallery.hover(gallery.cards()[2].center());
        assert_eq!(gallery.hovered(), Some(2));
        gallery.hover(Coordinate::new(2.0, 2.0));
        assert_eq!(gallery.hovered(), None);

        gallery.select(0);
        for _ in 0..600 {
            if gallery.dialog().is_visible() {
                break;
            }
            gallery.update(DT);
        }
        // Still fading in
        assert!(gallery.dialog().visibility() < 1.0);
        gallery.hover(gallery.cards()[2].center());
        assert_eq!(gallery.hovered(), None);

        run(&mut gallery, 1.0);
        gallery.request_close();
        run(&mut gallery, DT * 3.0);
        // Fading out
        assert!(gallery.dialog().is_visible());
        gallery.hover(gallery.cards()[2].center());
        assert_eq!(gallery.hovered(), None);

        run(&mut gallery, 1.0);
        assert!(!gallery.dialog().is_visible());
        gallery.hover(gallery.cards()[2].center());
        assert_eq!(gallery.hovered(), Some(2));
    }

    #[test]
    fn scrolling_remeasures_target_and_cards() {
        let player = RecordingPlayer::default();
        let mut gallery = Gallery::new(collection(), Box::new(player.clone()), Viewport::new(1280.0, 300.0));

        gallery.select(0);
        let target = gallery.target();
        let card = gallery.cards()[0].center();

        gallery.scroll_by(SCROLL_STEP);
        assert_eq!(gallery.target().y, target.y - SCROLL_STEP);
        assert_eq!(gallery.cards()[0].center().y, card.y - SCROLL_STEP);

        // The translation is unaffected by scrolling
        assert_eq!(gallery.cards()[0].translation(gallery.target()), target - card);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut gallery = gallery(&RecordingPlayer::default());
        let before = gallery.cards()[0].center();
        gallery.scroll_by(-100.0);
        assert_eq!(gallery.cards()[0].center(), before);
    }

    #[test]
    fn resize_moves_the_target() {
        let mut gallery = gallery(&RecordingPlayer::default());
        gallery.select(0);
        gallery.resize(Viewport::new(900.0, 800.0));
        assert_eq!(gallery.target().x, 450.0);
    }

    #[test]
    fn resize_mid_flight_lands_on_the_new_target() {
        let mut gallery = gallery(&RecordingPlayer::default());
        gallery.select(4);
        run(&mut gallery, SLIDE_OUT_DURATION + MOVE_DURATION * 0.3);
        gallery.resize(Viewport::new(700.0, 800.0));
        run(&mut gallery, 3.0);
        assert_eq!(gallery.cards()[4].record_center(), gallery.target());
    }
}
