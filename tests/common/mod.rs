// Shared fixtures for the host-side engine tests.

#![allow(dead_code)]
use tour_core::{AssetId, MediaElement, MediaError, MediaEvent, TourConfig, TransitionOrchestrator};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Load(String),
    Seek(f64),
    Play,
    Pause,
    Detach,
}

/// Records every command; `play` fails when `reject_play` is set.
#[derive(Debug, Default)]
pub struct FakeMedia {
    pub calls: Vec<Call>,
    pub reject_play: bool,
}

impl FakeMedia {
    pub fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::default()
        }
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn seeks(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Seek(t) => Some(*t),
                _ => None,
            })
            .collect()
    }
}

impl MediaElement for FakeMedia {
    fn load(&mut self, asset: &AssetId) {
        self.calls.push(Call::Load(asset.as_str().to_string()));
    }

    fn seek(&mut self, time_sec: f64) {
        self.calls.push(Call::Seek(time_sec));
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.calls.push(Call::Play);
        if self.reject_play {
            Err(MediaError::AutoplayRejected("NotAllowedError".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn detach(&mut self) {
        self.calls.push(Call::Detach);
    }
}

pub type Tour = TransitionOrchestrator<FakeMedia>;

pub fn tour() -> Tour {
    TransitionOrchestrator::new(TourConfig::default(), FakeMedia::default())
        .expect("default config is valid")
}

pub fn tour_with(media: FakeMedia) -> Tour {
    TransitionOrchestrator::new(TourConfig::default(), media).expect("default config is valid")
}

/// Drive the in-flight segment through load, seek and its final time update.
pub fn finish_segment(tour: &mut Tour) {
    let end = tour.active_player().expect("segment playing").range().end;
    tour.handle_media_event(MediaEvent::LoadedData);
    tour.handle_media_event(MediaEvent::Seeked);
    tour.handle_media_event(MediaEvent::TimeUpdate {
        current_time: end,
        duration: 30.0,
    });
}

/// Enter the building and let the entry clip and its tail run out.
pub fn enter_building(tour: &mut Tour) {
    assert!(tour.request_enter_building());
    tour.handle_media_event(MediaEvent::LoadedData);
    tour.handle_media_event(MediaEvent::Ended);
    let tail = tour.config().timings.entry_tail;
    tour.tick(tail);
}
