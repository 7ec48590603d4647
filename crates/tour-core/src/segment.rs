//! Directed transitions between exterior parts and the video sub-ranges they map to.

use crate::assets::SegmentVideo;
use crate::constants::{
    COMPLETION_TOLERANCE_SEC, PART_COUNT, PART_DURATION_SEC, REVERSE_PART_START_SEC,
    SEGMENT_ASSET_DURATION_SEC,
};
use crate::error::TourError;
use crate::part::{Direction, Part};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: Part,
    pub to: Part,
    pub direction: Direction,
}

impl Segment {
    /// The single-step segment leaving `from` in `direction`.
    pub fn step(from: Part, direction: Direction) -> Self {
        Self {
            from,
            to: from.step(direction),
            direction,
        }
    }

    #[inline]
    pub fn video(&self) -> SegmentVideo {
        SegmentVideo::for_direction(self.direction)
    }
}

/// Half-open `[start, end)` window, in seconds, of one physical video.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True once playback at `current_time` counts as having reached `end`.
    #[inline]
    pub fn reached_end(&self, current_time: f64) -> bool {
        (current_time - self.end).abs() < COMPLETION_TOLERANCE_SEC || current_time > self.end
    }
}

/// Per-part start timestamps for both encodings.
///
/// The reverse asset is a separately authored encoding, so its table is explicit
/// and not derivable from the forward one.
#[derive(Clone, Debug, PartialEq)]
pub struct PartTimeTable {
    pub forward: [f64; PART_COUNT as usize],
    pub reverse: [f64; PART_COUNT as usize],
    pub asset_duration: f64,
}

impl Default for PartTimeTable {
    fn default() -> Self {
        let mut forward = [0.0; PART_COUNT as usize];
        for part in Part::all() {
            forward[part.index()] = part.index() as f64 * PART_DURATION_SEC;
        }
        Self {
            forward,
            reverse: REVERSE_PART_START_SEC,
            asset_duration: SEGMENT_ASSET_DURATION_SEC,
        }
    }
}

impl PartTimeTable {
    pub fn part_time(&self, part: Part, video: SegmentVideo) -> f64 {
        match video {
            SegmentVideo::Forward => self.forward[part.index()],
            SegmentVideo::Reverse => self.reverse[part.index()],
        }
    }

    /// Resolve `segment` to the window of its encoding that must be played.
    ///
    /// A target timestamp at or before the start means the segment runs across
    /// the end of the asset, so the window is extended by one asset duration.
    pub fn resolve(&self, segment: &Segment) -> Result<TimeRange, TourError> {
        let video = segment.video();
        let start = self.part_time(segment.from, video);
        let mut end = self.part_time(segment.to, video);
        if end <= start {
            end += self.asset_duration;
        }
        if end > self.asset_duration || start < 0.0 || segment.from == segment.to {
            return Err(TourError::DegenerateSegment {
                from: segment.from.id(),
                to: segment.to.id(),
            });
        }
        Ok(TimeRange { start, end })
    }
}
