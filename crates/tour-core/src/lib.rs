pub mod assets;
pub mod choreography;
pub mod config;
pub mod constants;
pub mod error;
pub mod floor;
pub mod media;
pub mod orchestrator;
pub mod panorama;
pub mod part;
pub mod player;
pub mod scrubber;
pub mod segment;
pub mod sequence;

pub use assets::*;
pub use choreography::{Choreography, Cue, Phase};
pub use config::*;
pub use constants::*;
pub use error::*;
pub use floor::*;
pub use media::*;
pub use orchestrator::*;
pub use panorama::*;
pub use part::*;
pub use player::*;
pub use scrubber::*;
pub use segment::*;
pub use sequence::*;
