//! Playback of pre-rendered clips on the shared media element.
//!
//! [`SegmentPlayer`] scrubs one window of the orbit video and keeps the idle stop
//! frame on top until the video is confirmed ready at its start time.
//! [`EntryClipPlayer`] plays the short fly-in clip used when entering the
//! building. Both report completion exactly once.

use crate::assets::{AssetCatalog, AssetId};
use crate::constants::ENTRY_NEAR_END_SEC;
use crate::error::TourError;
use crate::media::{LayerOrder, MediaElement, MediaEvent};
use crate::part::Part;
use crate::segment::{PartTimeTable, Segment, TimeRange};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStep {
    Running,
    Finished(Part),
}

#[derive(Debug)]
pub struct SegmentPlayer {
    segment: Segment,
    range: TimeRange,
    idle_frame: AssetId,
    video: AssetId,
    has_started: bool,
    finished: bool,
    layers: LayerOrder,
}

impl SegmentPlayer {
    /// Resolve `segment` and start loading its encoding on `media`.
    pub fn play<M: MediaElement>(
        segment: Segment,
        idle_frame: AssetId,
        table: &PartTimeTable,
        assets: &AssetCatalog,
        media: &mut M,
    ) -> Result<Self, TourError> {
        let range = table.resolve(&segment)?;
        let video = assets.segment_video(segment.video()).clone();
        log::info!(
            "[segment] {:?} {} -> {} plays {} from {:.1}s to {:.1}s",
            segment.direction,
            segment.from,
            segment.to,
            video,
            range.start,
            range.end
        );
        media.load(&video);
        Ok(Self {
            segment,
            range,
            idle_frame,
            video,
            has_started: false,
            finished: false,
            layers: LayerOrder::IdleFrameOnTop,
        })
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn idle_frame(&self) -> &AssetId {
        &self.idle_frame
    }

    pub fn video(&self) -> &AssetId {
        &self.video
    }

    pub fn layers(&self) -> LayerOrder {
        self.layers
    }

    pub fn handle<M: MediaElement>(&mut self, event: &MediaEvent, media: &mut M) -> PlayerStep {
        if self.finished {
            return PlayerStep::Running;
        }
        match event {
            MediaEvent::LoadedData => {
                // duplicate delivery from the element must not restart playback
                if self.has_started {
                    return PlayerStep::Running;
                }
                self.has_started = true;
                media.seek(self.range.start);
                if let Err(e) = media.play() {
                    log::warn!(
                        "[segment] playback refused, jumping to part {}: {}",
                        self.segment.to,
                        e
                    );
                    return self.finish(media);
                }
                PlayerStep::Running
            }
            MediaEvent::Seeked => {
                if self.has_started {
                    self.layers = LayerOrder::VideoOnTop;
                }
                PlayerStep::Running
            }
            MediaEvent::TimeUpdate { current_time, .. } => {
                if !self.has_started {
                    return PlayerStep::Running;
                }
                self.layers = LayerOrder::VideoOnTop;
                if self.range.reached_end(*current_time) {
                    log::debug!("[segment] reached end at {:.2}s", current_time);
                    return self.finish(media);
                }
                PlayerStep::Running
            }
            MediaEvent::Ended => self.finish(media),
            MediaEvent::PlayRejected(reason) => {
                log::warn!("[segment] autoplay rejected: {}", reason);
                self.finish(media)
            }
            MediaEvent::Failed(reason) => {
                log::error!("[segment] failed to load {}: {}", self.video, reason);
                self.finish(media)
            }
        }
    }

    /// Force completion without waiting for the media (stall or teardown).
    pub fn abort<M: MediaElement>(&mut self, media: &mut M) -> PlayerStep {
        if self.finished {
            return PlayerStep::Running;
        }
        self.finish(media)
    }

    fn finish<M: MediaElement>(&mut self, media: &mut M) -> PlayerStep {
        self.finished = true;
        media.pause();
        media.detach();
        PlayerStep::Finished(self.segment.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipStep {
    Running,
    NearEnd,
    Ended,
}

#[derive(Debug)]
pub struct EntryClipPlayer {
    clip: AssetId,
    has_started: bool,
    near_end_signaled: bool,
    ended: bool,
}

impl EntryClipPlayer {
    pub fn play<M: MediaElement>(clip: AssetId, media: &mut M) -> Self {
        log::info!("[entry] loading {}", clip);
        media.load(&clip);
        Self {
            clip,
            has_started: false,
            near_end_signaled: false,
            ended: false,
        }
    }

    pub fn clip(&self) -> &AssetId {
        &self.clip
    }

    pub fn handle<M: MediaElement>(&mut self, event: &MediaEvent, media: &mut M) -> ClipStep {
        if self.ended {
            return ClipStep::Running;
        }
        match event {
            MediaEvent::LoadedData => {
                if self.has_started {
                    return ClipStep::Running;
                }
                self.has_started = true;
                match media.play() {
                    Ok(()) => ClipStep::Running,
                    Err(e) => {
                        log::warn!("[entry] playback refused: {}", e);
                        self.end(media)
                    }
                }
            }
            MediaEvent::Seeked => ClipStep::Running,
            MediaEvent::TimeUpdate {
                current_time,
                duration,
            } => {
                if self.near_end_signaled || !duration.is_finite() {
                    return ClipStep::Running;
                }
                if duration - current_time < ENTRY_NEAR_END_SEC {
                    self.near_end_signaled = true;
                    return ClipStep::NearEnd;
                }
                ClipStep::Running
            }
            MediaEvent::Ended => self.end(media),
            MediaEvent::PlayRejected(reason) => {
                log::warn!("[entry] autoplay rejected: {}", reason);
                self.end(media)
            }
            MediaEvent::Failed(reason) => {
                log::error!("[entry] failed to load {}: {}", self.clip, reason);
                self.end(media)
            }
        }
    }

    pub fn abort<M: MediaElement>(&mut self, media: &mut M) -> ClipStep {
        if self.ended {
            return ClipStep::Running;
        }
        self.end(media)
    }

    fn end<M: MediaElement>(&mut self, media: &mut M) -> ClipStep {
        self.ended = true;
        media.pause();
        media.detach();
        ClipStep::Ended
    }
}
