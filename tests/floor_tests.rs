// Host-side tests for floor data lookups and hotspot placement.

use glam::Vec2;
use tour_core::{
    contain_fit, default_floors, hotspot_anchor, AssetId, Floor, FloorGraph, FloorId, ImageBox,
    Room, RoomId, RoomList, TourError,
};

fn graph() -> FloorGraph {
    FloorGraph::new(default_floors()).unwrap()
}

#[test]
fn default_building_has_three_floors_top_first() {
    let g = graph();
    let ids: Vec<&str> = g.floors().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["floor2", "floor1", "floor0"]);
    assert!(g.contains(&FloorId::new("floor0")));
    assert!(!g.contains(&FloorId::new("floor3")));
    assert_eq!(g.rooms_for_floor(&FloorId::new("floor0")).unwrap().len(), 3);
}

#[test]
fn rooms_are_found_with_their_floor() {
    let g = graph();
    let room = g.find_room(&RoomId::new("room1-4")).unwrap();
    assert_eq!(room.name, "Terrace");
    assert_eq!(room.position_pct, Vec2::new(16.0, 75.0));
    assert_eq!(g.floor_of_room(&RoomId::new("room1-4")).unwrap().as_str(), "floor1");
    assert_eq!(
        g.find_room(&RoomId::new("room9-9")).err(),
        Some(TourError::UnknownRoom(RoomId::new("room9-9")))
    );
    assert_eq!(
        g.get_floor(&FloorId::new("roof")).err(),
        Some(TourError::UnknownFloor(FloorId::new("roof")))
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut floors = default_floors();
    floors.push(floors[0].clone());
    assert_eq!(
        FloorGraph::new(floors).err(),
        Some(TourError::DuplicateFloor(FloorId::new("floor2")))
    );

    let twin = |id: &str| Floor {
        id: FloorId::new(id),
        name: id.to_string(),
        plan_image: AssetId::new("/plan.jpg"),
        rooms: RoomList::from_vec(vec![Room::new("shared", 10.0, 10.0, "Shared", "/p.jpg")]),
    };
    assert_eq!(
        FloorGraph::new(vec![twin("a"), twin("b")]).err(),
        Some(TourError::DuplicateRoom(RoomId::new("shared")))
    );
}

#[test]
fn contain_fit_letterboxes_wide_images() {
    let b = contain_fit(Vec2::new(2000.0, 1000.0), Vec2::new(800.0, 800.0));
    assert_eq!(b.size, Vec2::new(800.0, 400.0));
    assert_eq!(b.origin, Vec2::new(0.0, 200.0));
}

#[test]
fn contain_fit_pillarboxes_tall_images() {
    let b = contain_fit(Vec2::new(500.0, 1000.0), Vec2::new(800.0, 400.0));
    assert_eq!(b.size, Vec2::new(200.0, 400.0));
    assert_eq!(b.origin, Vec2::new(300.0, 0.0));
}

#[test]
fn unloaded_images_fill_the_container() {
    let b = contain_fit(Vec2::ZERO, Vec2::new(640.0, 480.0));
    assert_eq!(b.origin, Vec2::ZERO);
    assert_eq!(b.size, Vec2::new(640.0, 480.0));
}

#[test]
fn hotspots_anchor_to_the_image_box_not_the_container() {
    let room = Room::new("r", 40.0, 40.0, "Room", "/p.jpg");
    let image = ImageBox {
        origin: Vec2::new(0.0, 200.0),
        size: Vec2::new(800.0, 400.0),
    };
    assert_eq!(hotspot_anchor(&room, image), Vec2::new(320.0, 360.0));
    let corner = Room::new("c", 100.0, 0.0, "Corner", "/p.jpg");
    assert_eq!(hotspot_anchor(&corner, image), Vec2::new(800.0, 200.0));
}
