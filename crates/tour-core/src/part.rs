//! Exterior viewpoints and the direction of travel between them.

use std::fmt;

use crate::constants::PART_COUNT;
use crate::error::TourError;

/// One of the fixed, cyclic exterior viewpoints (`1..=PART_COUNT`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Part(u8);

impl Part {
    pub const FIRST: Part = Part(1);
    pub const LAST: Part = Part(PART_COUNT);

    pub fn new(id: u8) -> Result<Self, TourError> {
        if (1..=PART_COUNT).contains(&id) {
            Ok(Part(id))
        } else {
            Err(TourError::InvalidPart(id))
        }
    }

    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Zero-based position, handy for table lookups.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[inline]
    pub fn successor(self) -> Part {
        if self.0 == PART_COUNT {
            Part::FIRST
        } else {
            Part(self.0 + 1)
        }
    }

    #[inline]
    pub fn predecessor(self) -> Part {
        if self.0 == 1 {
            Part::LAST
        } else {
            Part(self.0 - 1)
        }
    }

    pub fn step(self, direction: Direction) -> Part {
        match direction {
            Direction::Forward => self.successor(),
            Direction::Backward => self.predecessor(),
        }
    }

    pub fn all() -> impl Iterator<Item = Part> {
        (1..=PART_COUNT).map(Part)
    }
}

impl Default for Part {
    fn default() -> Self {
        Part::FIRST
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1` for forward, `-1` for backward.
    #[inline]
    pub fn sign(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}
