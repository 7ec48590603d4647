//! Static interior navigation data: floors, their rooms and hotspot placement.

use std::fmt;

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

use crate::assets::AssetId;
use crate::error::TourError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloorId(String);

impl FloorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Percentages of the floor plan image's own width and height.
    pub position_pct: Vec2,
    pub panorama: AssetId,
}

impl Room {
    pub fn new(id: &str, x_pct: f32, y_pct: f32, name: &str, panorama: &str) -> Self {
        Self {
            id: RoomId::new(id),
            name: name.to_string(),
            position_pct: Vec2::new(x_pct, y_pct),
            panorama: AssetId::new(panorama),
        }
    }
}

pub type RoomList = SmallVec<[Room; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    pub plan_image: AssetId,
    pub rooms: RoomList,
}

/// Flat floor set with direct key lookup. Any floor is one step from any other.
#[derive(Clone, Debug)]
pub struct FloorGraph {
    floors: Vec<Floor>,
    floor_index: FnvHashMap<FloorId, usize>,
    room_index: FnvHashMap<RoomId, (usize, usize)>,
}

impl FloorGraph {
    pub fn new(floors: Vec<Floor>) -> Result<Self, TourError> {
        let mut floor_index = FnvHashMap::default();
        let mut room_index = FnvHashMap::default();
        for (fi, floor) in floors.iter().enumerate() {
            if floor_index.insert(floor.id.clone(), fi).is_some() {
                return Err(TourError::DuplicateFloor(floor.id.clone()));
            }
            for (ri, room) in floor.rooms.iter().enumerate() {
                if room_index.insert(room.id.clone(), (fi, ri)).is_some() {
                    return Err(TourError::DuplicateRoom(room.id.clone()));
                }
            }
        }
        Ok(Self {
            floors,
            floor_index,
            room_index,
        })
    }

    /// Floors in their configured display order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn contains(&self, id: &FloorId) -> bool {
        self.floor_index.contains_key(id)
    }

    pub fn get_floor(&self, id: &FloorId) -> Result<&Floor, TourError> {
        self.floor_index
            .get(id)
            .map(|&i| &self.floors[i])
            .ok_or_else(|| TourError::UnknownFloor(id.clone()))
    }

    pub fn rooms_for_floor(&self, id: &FloorId) -> Result<&[Room], TourError> {
        self.get_floor(id).map(|f| f.rooms.as_slice())
    }

    pub fn find_room(&self, id: &RoomId) -> Result<&Room, TourError> {
        self.room_index
            .get(id)
            .map(|&(fi, ri)| &self.floors[fi].rooms[ri])
            .ok_or_else(|| TourError::UnknownRoom(id.clone()))
    }

    pub fn floor_of_room(&self, id: &RoomId) -> Result<&FloorId, TourError> {
        self.room_index
            .get(id)
            .map(|&(fi, _)| &self.floors[fi].id)
            .ok_or_else(|| TourError::UnknownRoom(id.clone()))
    }
}

/// Rectangle occupied by a displayed image, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageBox {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Box of an image of `natural` size shown with contain-fit inside `container`.
pub fn contain_fit(natural: Vec2, container: Vec2) -> ImageBox {
    if natural.x <= 0.0 || natural.y <= 0.0 {
        return ImageBox {
            origin: Vec2::ZERO,
            size: container,
        };
    }
    let scale = (container.x / natural.x).min(container.y / natural.y);
    let size = natural * scale;
    ImageBox {
        origin: (container - size) * 0.5,
        size,
    }
}

/// Hotspot anchor relative to the container, derived from the image box only.
#[inline]
pub fn hotspot_anchor(room: &Room, image: ImageBox) -> Vec2 {
    image.origin + room.position_pct / 100.0 * image.size
}
