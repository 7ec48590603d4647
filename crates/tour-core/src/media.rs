//! Seam to the host platform's media subsystem.

use crate::assets::AssetId;
use crate::error::MediaError;

/// A single host video element, driven by whichever player currently owns it.
///
/// Implementations attach their event listeners in `load` and must remove all of
/// them in `detach`.
pub trait MediaElement {
    /// Point the element at `asset` and begin loading it.
    fn load(&mut self, asset: &AssetId);
    fn seek(&mut self, time_sec: f64);
    /// Start playback. Immediate refusal is returned here; a refusal that
    /// arrives later is delivered as [`MediaEvent::PlayRejected`].
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn detach(&mut self);
}

/// Notifications the host forwards, in order, from the element it loaded.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    LoadedData,
    Seeked,
    TimeUpdate { current_time: f64, duration: f64 },
    Ended,
    PlayRejected(String),
    Failed(String),
}

/// Stacking of the idle stop frame relative to the video layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerOrder {
    #[default]
    IdleFrameOnTop,
    VideoOnTop,
}
