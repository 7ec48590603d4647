use std::time::Duration;

use crate::assets::AssetId;
use crate::constants::{SEQUENCE_FRAME_STEP, SEQUENCE_PART_LOCK_MS, SEQUENCE_TOTAL_FRAMES};
use crate::error::TourError;
use crate::part::{Direction, Part};
use crate::scrubber::{FrameSequenceScrubber, ScrubberConfig};

/// Frame-by-frame orbit viewer over exported stills of the orbit video.
#[derive(Clone, Debug)]
pub struct FrameSequenceViewer {
    scrubber: FrameSequenceScrubber,
    frame_dir: String,
    playing: bool,
    part_lock: Option<Duration>,
    lock_duration: Duration,
    drag: PointerDrag,
}

impl FrameSequenceViewer {
    pub fn new(frame_dir: impl Into<String>) -> Result<Self, TourError> {
        let parts = crate::constants::PART_COUNT as usize;
        Ok(Self {
            scrubber: FrameSequenceScrubber::new(
                SEQUENCE_TOTAL_FRAMES,
                parts,
                ScrubberConfig::default(),
            )?,
            frame_dir: frame_dir.into(),
            playing: false,
            part_lock: None,
            lock_duration: Duration::from_millis(SEQUENCE_PART_LOCK_MS),
            drag: PointerDrag::default(),
        })
    }

    /// Back to part 1, frame 0, paused.
    pub fn open(&mut self) {
        self.scrubber.jump_to_part(0);
        self.playing = false;
        self.part_lock = None;
        self.drag.end();
    }

    pub fn scrubber(&self) -> &FrameSequenceScrubber {
        &self.scrubber
    }

    pub fn current_frame(&self) -> usize {
        self.scrubber.current_frame()
    }

    pub fn current_part(&self) -> Part {
        self.scrubber.current_part().unwrap_or_default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_locked(&self) -> bool {
        self.part_lock.is_some()
    }

    pub fn frame_asset(&self, frame: usize) -> AssetId {
        AssetId::new(format!(
            "{}/{:04}.jpg",
            self.frame_dir,
            frame * SEQUENCE_FRAME_STEP
        ))
    }

    pub fn current_asset(&self) -> AssetId {
        self.frame_asset(self.current_frame())
    }

    pub fn next_part(&mut self) -> bool {
        self.step_part(Direction::Forward)
    }

    pub fn previous_part(&mut self) -> bool {
        self.step_part(Direction::Backward)
    }

    fn step_part(&mut self, direction: Direction) -> bool {
        if self.part_lock.is_some() {
            log::debug!("[frames] part change ignored while locked");
            return false;
        }
        let target = self.current_part().step(direction);
        self.scrubber.jump_to_part(target.index());
        self.part_lock = Some(Duration::ZERO);
        true
    }

    /// Direct jump from the part buttons or number keys; not gated by the lock.
    pub fn jump_to_part(&mut self, part: Part) {
        self.scrubber.jump_to_part(part.index());
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Called once per animation frame.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(elapsed) = self.part_lock.as_mut() {
            *elapsed += dt;
            if *elapsed >= self.lock_duration {
                self.part_lock = None;
            }
        }
        if self.playing {
            self.scrubber.tick_play();
        }
    }

    /// Position inside the current part as a fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let range = self.scrubber.part_range(self.scrubber.current_part_index());
        let span = (*range.end() - *range.start()) as f32;
        if span <= 0.0 {
            return 0.0;
        }
        (self.current_frame() - *range.start()) as f32 / span
    }
}

/// Horizontal pointer drag feeding a scrubber.
pub trait DragScrub {
    fn drag_start(&mut self, x: f32);
    /// Returns the index shown after the move.
    fn drag_move(&mut self, x: f32) -> usize;
    fn drag_end(&mut self);
}

#[derive(Clone, Copy, Debug, Default)]
struct PointerDrag {
    last_x: Option<f32>,
}

impl PointerDrag {
    fn is_active(&self) -> bool {
        self.last_x.is_some()
    }

    fn start(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Pixels moved since the previous sample; `None` when no drag is active.
    fn delta(&mut self, x: f32) -> Option<f32> {
        let last = self.last_x.as_mut()?;
        let dx = x - *last;
        *last = x;
        Some(dx)
    }

    fn end(&mut self) {
        self.last_x = None;
    }
}

/// Scrubbing pauses playback and wraps across part boundaries.
impl DragScrub for FrameSequenceViewer {
    fn drag_start(&mut self, x: f32) {
        self.playing = false;
        self.drag.start(x);
        self.scrubber.drag_start();
    }

    fn drag_move(&mut self, x: f32) -> usize {
        if let Some(dx) = self.drag.delta(x) {
            self.scrubber.drag_delta(dx);
        }
        self.current_frame()
    }

    fn drag_end(&mut self) {
        self.drag.end();
    }
}

/// Drag-to-rotate viewer over a short list of stills.
#[derive(Clone, Debug)]
pub struct ImageSetViewer {
    images: Vec<AssetId>,
    scrubber: FrameSequenceScrubber,
    drag: PointerDrag,
}

impl ImageSetViewer {
    pub fn new(images: Vec<AssetId>, config: ScrubberConfig) -> Result<Self, TourError> {
        let scrubber = FrameSequenceScrubber::new(images.len(), 1, config)?;
        Ok(Self {
            images,
            scrubber,
            drag: PointerDrag::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.scrubber.current_frame()
    }

    pub fn current_image(&self) -> &AssetId {
        &self.images[self.current_index()]
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn step(&mut self, direction: Direction) -> usize {
        self.scrubber.advance(direction)
    }

    pub fn reset(&mut self) {
        self.scrubber.seek_to_index(0);
    }

    pub fn progress(&self) -> f32 {
        (self.current_index() + 1) as f32 / self.images.len() as f32
    }
}

impl DragScrub for ImageSetViewer {
    fn drag_start(&mut self, x: f32) {
        self.drag.start(x);
        self.scrubber.drag_start();
    }

    fn drag_move(&mut self, x: f32) -> usize {
        if let Some(dx) = self.drag.delta(x) {
            self.scrubber.drag_delta(dx);
        }
        self.current_index()
    }

    fn drag_end(&mut self) {
        self.drag.end();
    }
}
