use thiserror::Error;

use crate::floor::{FloorId, RoomId};

/// Failures reported by the host media subsystem.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MediaError {
    #[error("autoplay rejected: {0}")]
    AutoplayRejected(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TourError {
    #[error("part {0} is outside 1..={max}", max = crate::constants::PART_COUNT)]
    InvalidPart(u8),
    #[error("unknown floor `{0}`")]
    UnknownFloor(FloorId),
    #[error("unknown room `{0}`")]
    UnknownRoom(RoomId),
    #[error("floor `{0}` is defined more than once")]
    DuplicateFloor(FloorId),
    #[error("room `{0}` is defined more than once")]
    DuplicateRoom(RoomId),
    #[error("a frame sequence needs at least one frame")]
    EmptySequence,
    #[error("{total} frames cannot be split into {parts} equal parts")]
    UnevenSequence { total: usize, parts: usize },
    #[error("segment {from} -> {to} resolves to an empty time range")]
    DegenerateSegment { from: u8, to: u8 },
}
