//! Stable identifiers for pre-rendered assets.
//!
//! The engine never touches asset content. It only decides which identifier the
//! host media subsystem should show and when.

use std::fmt;

use crate::part::{Direction, Part};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The two physical encodings of the exterior orbit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentVideo {
    Forward,
    Reverse,
}

impl SegmentVideo {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Forward => SegmentVideo::Forward,
            Direction::Backward => SegmentVideo::Reverse,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AssetCatalog {
    pub stop_frames: [AssetId; crate::constants::PART_COUNT as usize],
    pub forward_video: AssetId,
    pub reverse_video: AssetId,
    pub entry_clip: AssetId,
    pub frame_sequence_dir: String,
}

impl AssetCatalog {
    pub fn stop_frame(&self, part: Part) -> &AssetId {
        &self.stop_frames[part.index()]
    }

    pub fn segment_video(&self, video: SegmentVideo) -> &AssetId {
        match video {
            SegmentVideo::Forward => &self.forward_video,
            SegmentVideo::Reverse => &self.reverse_video,
        }
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            stop_frames: [
                AssetId::new("/assets/panoramic 360/afara.jpg"),
                AssetId::new("/assets/panoramic 360/0001.jpg"),
                AssetId::new("/assets/panoramic 360/0002.jpg"),
                AssetId::new("/assets/panoramic 360/0003.jpg"),
            ],
            forward_video: AssetId::new("/assets/video30sec/var2.mp4"),
            reverse_video: AssetId::new("/assets/video30sec/var2-reverse.mp4"),
            entry_clip: AssetId::new("/assets/video 1 sec/0001-0063.mp4"),
            frame_sequence_dir: "/assets/video30sec/frames var2".to_string(),
        }
    }
}
