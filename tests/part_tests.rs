// Host-side tests for the cyclic part order and segment time ranges.

use tour_core::{
    Direction, Part, PartTimeTable, Segment, SegmentVideo, TimeRange, TourError, PART_COUNT,
};

fn part(id: u8) -> Part {
    Part::new(id).unwrap()
}

#[test]
fn parts_outside_the_cycle_are_rejected() {
    assert_eq!(Part::new(0), Err(TourError::InvalidPart(0)));
    assert_eq!(Part::new(PART_COUNT + 1), Err(TourError::InvalidPart(PART_COUNT + 1)));
    assert_eq!(Part::all().count(), PART_COUNT as usize);
}

#[test]
fn successor_and_predecessor_are_inverse_and_cyclic() {
    for p in Part::all() {
        assert_eq!(p.successor().predecessor(), p);
        assert_eq!(p.predecessor().successor(), p);
        let mut q = p;
        for _ in 0..PART_COUNT {
            q = q.successor();
        }
        assert_eq!(q, p);
    }
    assert_eq!(Part::LAST.successor(), Part::FIRST);
    assert_eq!(Part::FIRST.predecessor(), Part::LAST);
}

#[test]
fn segment_step_follows_direction() {
    let s = Segment::step(part(3), Direction::Backward);
    assert_eq!((s.from, s.to), (part(3), part(2)));
    assert_eq!(s.video(), SegmentVideo::Reverse);
    let s = Segment::step(part(4), Direction::Forward);
    assert_eq!(s.to, part(1));
    assert_eq!(s.video(), SegmentVideo::Forward);
}

#[test]
fn forward_segments_cover_consecutive_windows() {
    let table = PartTimeTable::default();
    let expected = [(0.0, 7.5), (7.5, 15.0), (15.0, 22.5), (22.5, 30.0)];
    for (p, (start, end)) in Part::all().zip(expected) {
        let r = table.resolve(&Segment::step(p, Direction::Forward)).unwrap();
        assert_eq!((r.start, r.end), (start, end), "forward from {}", p);
        assert!(r.duration() > 0.0);
    }
}

#[test]
fn reverse_segments_use_the_reverse_table() {
    let table = PartTimeTable::default();
    assert_eq!(table.part_time(part(1), SegmentVideo::Reverse), 0.0);
    assert_eq!(table.part_time(part(3), SegmentVideo::Reverse), 15.0);
    // 1 -> 4 starts the reverse video at zero
    let r = table.resolve(&Segment::step(part(1), Direction::Backward)).unwrap();
    assert_eq!((r.start, r.end), (0.0, 7.5));
    // 2 -> 1 runs to the end of the asset
    let r = table.resolve(&Segment::step(part(2), Direction::Backward)).unwrap();
    assert_eq!((r.start, r.end), (22.5, 30.0));
    let r = table.resolve(&Segment::step(part(3), Direction::Backward)).unwrap();
    assert_eq!((r.start, r.end), (15.0, 22.5));
}

#[test]
fn every_single_step_resolves_to_one_part_duration() {
    let table = PartTimeTable::default();
    for p in Part::all() {
        for d in [Direction::Forward, Direction::Backward] {
            let r = table.resolve(&Segment::step(p, d)).unwrap();
            assert!((r.duration() - 7.5).abs() < 1e-9);
            assert!(r.start >= 0.0 && r.end <= table.asset_duration);
        }
    }
}

#[test]
fn broken_tables_are_reported() {
    let mut table = PartTimeTable::default();
    table.forward[1] = 40.0;
    let err = table.resolve(&Segment::step(part(2), Direction::Forward));
    assert_eq!(err, Err(TourError::DegenerateSegment { from: 2, to: 3 }));
    let same = Segment {
        from: part(2),
        to: part(2),
        direction: Direction::Forward,
    };
    assert!(PartTimeTable::default().resolve(&same).is_err());
}

#[test]
fn end_is_reached_within_tolerance_or_past_it() {
    let r = TimeRange { start: 0.0, end: 7.5 };
    assert!(!r.reached_end(7.0));
    assert!(r.reached_end(7.25));
    assert!(r.reached_end(7.5));
    assert!(r.reached_end(9.0));
}
