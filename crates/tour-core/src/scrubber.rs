//! Discrete, wrap-around index over an ordered frame or image sequence.

use std::ops::RangeInclusive;

use crate::constants::DRAG_SENSITIVITY_PX;
use crate::error::TourError;
use crate::part::{Direction, Part};

/// How accumulated drag distance turns into steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPolicy {
    /// One step per move that exceeds the sensitivity, then the reference point
    /// resets to the current pointer position and any remainder is dropped.
    #[default]
    ResetOnStep,
    /// Every whole sensitivity width becomes a step; the remainder carries over.
    Consume,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubberConfig {
    pub sensitivity_px: f32,
    pub policy: DragPolicy,
    /// Dragging towards +x steps the index backwards.
    pub reverse_drag: bool,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            sensitivity_px: DRAG_SENSITIVITY_PX,
            policy: DragPolicy::ResetOnStep,
            reverse_drag: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FrameSequenceScrubber {
    total: usize,
    parts: usize,
    current: usize,
    pending_px: f32,
    config: ScrubberConfig,
}

impl FrameSequenceScrubber {
    pub fn new(total: usize, parts: usize, config: ScrubberConfig) -> Result<Self, TourError> {
        if total == 0 || parts == 0 {
            return Err(TourError::EmptySequence);
        }
        if total % parts != 0 {
            return Err(TourError::UnevenSequence { total, parts });
        }
        Ok(Self {
            total,
            parts,
            current: 0,
            pending_px: 0.0,
            config,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn frames_per_part(&self) -> usize {
        self.total / self.parts
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Zero-based part holding the current frame.
    pub fn current_part_index(&self) -> usize {
        self.current / self.frames_per_part()
    }

    pub fn current_part(&self) -> Option<Part> {
        let id = u8::try_from(self.current_part_index() + 1).ok()?;
        Part::new(id).ok()
    }

    pub fn part_range(&self, part_index: usize) -> RangeInclusive<usize> {
        let per = self.frames_per_part();
        let start = (part_index % self.parts) * per;
        start..=start + per - 1
    }

    pub fn advance(&mut self, direction: Direction) -> usize {
        self.seek_to_index(self.current as i64 + direction.sign() as i64)
    }

    /// Move to `index`, wrapping modulo the total in both directions.
    pub fn seek_to_index(&mut self, index: i64) -> usize {
        self.current = index.rem_euclid(self.total as i64) as usize;
        self.current
    }

    /// Hard reset to the first frame of `part_index`.
    pub fn jump_to_part(&mut self, part_index: usize) -> usize {
        self.current = *self.part_range(part_index).start();
        self.pending_px = 0.0;
        self.current
    }

    /// One auto-play step, wrapping inside the current part only.
    pub fn tick_play(&mut self) -> usize {
        let range = self.part_range(self.current_part_index());
        self.current = if self.current >= *range.end() {
            *range.start()
        } else {
            self.current + 1
        };
        self.current
    }

    pub fn drag_start(&mut self) {
        self.pending_px = 0.0;
    }

    /// Feed pointer movement since the last call; returns the index change applied.
    pub fn drag_delta(&mut self, pixels: f32) -> isize {
        self.pending_px += pixels;
        let n = self.config.sensitivity_px.max(f32::EPSILON);
        let steps = match self.config.policy {
            DragPolicy::ResetOnStep => {
                if self.pending_px.abs() > n {
                    let s = self.pending_px.signum() as isize;
                    self.pending_px = 0.0;
                    s
                } else {
                    0
                }
            }
            DragPolicy::Consume => {
                let s = (self.pending_px / n).trunc();
                self.pending_px -= s * n;
                s as isize
            }
        };
        let signed = if self.config.reverse_drag { -steps } else { steps };
        if signed != 0 {
            self.seek_to_index(self.current as i64 + signed as i64);
        }
        signed
    }
}
