use std::time::Duration;

use crate::assets::{AssetCatalog, AssetId};
use crate::constants::{
    DEFAULT_FLOOR, ENTRY_TAIL_MS, EXIT_OVERLAY_MS, FLOOR_CHANGE_OVERLAY_MS,
    MEDIA_STALL_TIMEOUT_MS, OVERLAY_FADE_MS,
};
use crate::floor::{Floor, FloorId, Room, RoomList};
use crate::segment::PartTimeTable;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub floor_change: Duration,
    pub exit: Duration,
    pub entry_tail: Duration,
    pub overlay_fade: Duration,
    pub media_stall_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            floor_change: Duration::from_millis(FLOOR_CHANGE_OVERLAY_MS),
            exit: Duration::from_millis(EXIT_OVERLAY_MS),
            entry_tail: Duration::from_millis(ENTRY_TAIL_MS),
            overlay_fade: Duration::from_millis(OVERLAY_FADE_MS),
            media_stall_timeout: Duration::from_millis(MEDIA_STALL_TIMEOUT_MS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TourConfig {
    pub timings: Timings,
    pub time_table: PartTimeTable,
    pub assets: AssetCatalog,
    pub floors: Vec<Floor>,
    pub default_floor: FloorId,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            time_table: PartTimeTable::default(),
            assets: AssetCatalog::default(),
            floors: default_floors(),
            default_floor: FloorId::new(DEFAULT_FLOOR),
        }
    }
}

/// The three-floor demo building, top floor first.
pub fn default_floors() -> Vec<Floor> {
    const PANO: &str = "/assets/panoramic 360";
    let pano = |name: &str| format!("{PANO}/{name}");
    let floor = |id: &str, name: &str, plan: &str, rooms: RoomList| Floor {
        id: FloorId::new(id),
        name: name.to_string(),
        plan_image: AssetId::new(format!("/assets/top view etaje/{plan}")),
        rooms,
    };
    vec![
        floor(
            "floor2",
            "2nd Floor",
            "et2.jpg",
            RoomList::from_vec(vec![
                Room::new("room2-1", 40.0, 40.0, "Master Bedroom", &pano("0001.jpg")),
                Room::new("room2-2", 75.0, 72.0, "Guest Room", &pano("0002.jpg")),
            ]),
        ),
        floor(
            "floor1",
            "1st Floor",
            "et1.jpg",
            RoomList::from_vec(vec![
                Room::new("room1-1", 65.0, 27.0, "Balcony", &pano("0003.jpg")),
                Room::new("room1-2", 38.0, 35.0, "Bedroom 1", &pano("afara.jpg")),
                Room::new("room1-3", 65.0, 35.0, "Bedroom 2", &pano("terasa acoperis.jpg")),
                Room::new("room1-4", 16.0, 75.0, "Terrace", &pano("BaiaMAREEEE.jpg")),
            ]),
        ),
        floor(
            "floor0",
            "Ground Floor",
            "parter.jpg",
            RoomList::from_vec(vec![
                Room::new("room0-1", 75.0, 75.0, "Bathroom", &pano("BaiaMAREEEE.jpg")),
                Room::new("room0-2", 45.0, 39.0, "Living Room", &pano("afara.jpg")),
                Room::new("room0-3", 35.0, 70.0, "Office", &pano("0001.jpg")),
            ]),
        ),
    ]
}
