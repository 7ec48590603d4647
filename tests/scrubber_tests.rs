// Host-side tests for the frame scrubber and the two still-image viewers.

use std::time::Duration;
use tour_core::{
    AssetId, Direction, DragPolicy, DragScrub, FrameSequenceScrubber, FrameSequenceViewer,
    ImageSetViewer, Part, ScrubberConfig, TourError,
};

fn scrubber(policy: DragPolicy) -> FrameSequenceScrubber {
    let config = ScrubberConfig {
        policy,
        ..ScrubberConfig::default()
    };
    FrameSequenceScrubber::new(300, 4, config).unwrap()
}

fn stills(n: usize) -> Vec<AssetId> {
    (0..n).map(|i| AssetId::new(format!("/stills/{i}.jpg"))).collect()
}

#[test]
fn sequences_must_split_evenly() {
    let config = ScrubberConfig::default();
    assert_eq!(FrameSequenceScrubber::new(0, 4, config).err(), Some(TourError::EmptySequence));
    assert_eq!(
        FrameSequenceScrubber::new(10, 4, config).err(),
        Some(TourError::UnevenSequence { total: 10, parts: 4 })
    );
    let s = scrubber(DragPolicy::ResetOnStep);
    assert_eq!(s.frames_per_part(), 75);
    assert_eq!(s.part_range(0), 0..=74);
    assert_eq!(s.part_range(3), 225..=299);
}

#[test]
fn play_wraps_inside_the_current_part() {
    let mut s = scrubber(DragPolicy::ResetOnStep);
    for _ in 0..74 {
        s.tick_play();
    }
    assert_eq!(s.current_frame(), 74);
    assert_eq!(s.tick_play(), 0);
    assert_eq!(s.current_part(), Some(Part::FIRST));
    for _ in 0..200 {
        s.tick_play();
        assert!(s.current_frame() <= 74);
    }
}

#[test]
fn seeking_wraps_in_both_directions() {
    let mut s = scrubber(DragPolicy::ResetOnStep);
    assert_eq!(s.seek_to_index(-1), 299);
    assert_eq!(s.advance(Direction::Forward), 0);
    assert_eq!(s.seek_to_index(601), 1);
    assert_eq!(s.jump_to_part(2), 150);
    assert_eq!(s.current_part_index(), 2);
}

#[test]
fn reset_on_step_takes_one_step_per_threshold_crossing() {
    let mut s = scrubber(DragPolicy::ResetOnStep);
    s.drag_start();
    // dragging right steps backwards
    assert_eq!(s.drag_delta(6.0), -1);
    assert_eq!(s.current_frame(), 299);
    assert_eq!(s.drag_delta(4.0), 0);
    assert_eq!(s.drag_delta(4.0), -1);
    assert_eq!(s.current_frame(), 298);
    // a fast move still counts once
    assert_eq!(s.drag_delta(-50.0), 1);
    assert_eq!(s.current_frame(), 299);
    // exactly the sensitivity does not step
    assert_eq!(s.drag_delta(-5.0), 0);
}

#[test]
fn consume_policy_carries_the_remainder() {
    let mut s = scrubber(DragPolicy::Consume);
    s.drag_start();
    assert_eq!(s.drag_delta(-12.0), 2);
    assert_eq!(s.current_frame(), 2);
    assert_eq!(s.drag_delta(-3.0), 1);
    assert_eq!(s.current_frame(), 3);
    s.drag_start();
    assert_eq!(s.drag_delta(-4.0), 0);
}

#[test]
fn part_navigation_is_locked_briefly() {
    let mut v = FrameSequenceViewer::new("/frames").unwrap();
    v.open();
    assert!(v.next_part());
    assert_eq!(v.current_part(), Part::new(2).unwrap());
    assert_eq!(v.current_frame(), 75);
    assert!(v.is_locked());
    assert!(!v.next_part());
    v.tick(Duration::from_millis(499));
    assert!(!v.previous_part());
    v.tick(Duration::from_millis(1));
    assert!(!v.is_locked());
    assert!(v.previous_part());
    assert_eq!(v.current_part(), Part::FIRST);
    assert!(!v.previous_part());
}

#[test]
fn jumps_ignore_the_lock_and_previous_wraps() {
    let mut v = FrameSequenceViewer::new("/frames").unwrap();
    assert!(v.previous_part());
    assert_eq!(v.current_part(), Part::LAST);
    v.jump_to_part(Part::new(3).unwrap());
    assert_eq!(v.current_frame(), 150);
    assert_eq!(v.current_part(), Part::new(3).unwrap());
}

#[test]
fn playing_advances_one_frame_per_tick_within_the_part() {
    let mut v = FrameSequenceViewer::new("/frames").unwrap();
    v.jump_to_part(Part::new(2).unwrap());
    assert!(v.toggle_play());
    for _ in 0..74 {
        v.tick(Duration::from_millis(16));
    }
    assert_eq!(v.current_frame(), 149);
    assert!((v.progress() - 1.0).abs() < 1e-6);
    v.tick(Duration::from_millis(16));
    assert_eq!(v.current_frame(), 75);
    assert_eq!(v.progress(), 0.0);
    assert!(!v.toggle_play());
    v.tick(Duration::from_millis(16));
    assert_eq!(v.current_frame(), 75);
}

#[test]
fn frame_assets_are_numbered_by_export_step() {
    let mut v = FrameSequenceViewer::new("/assets/frames").unwrap();
    assert_eq!(v.current_asset().as_str(), "/assets/frames/0000.jpg");
    assert_eq!(v.frame_asset(10).as_str(), "/assets/frames/0030.jpg");
    v.jump_to_part(Part::LAST);
    assert_eq!(v.current_asset().as_str(), "/assets/frames/0675.jpg");
}

#[test]
fn dragging_the_frame_sequence_pauses_and_wraps_across_parts() {
    let mut v = FrameSequenceViewer::new("/frames").unwrap();
    v.open();
    assert!(v.toggle_play());
    v.drag_start(200.0);
    assert!(v.is_dragging());
    assert!(!v.is_playing());
    assert_eq!(v.drag_move(194.0), 1);
    assert_eq!(v.drag_move(200.0), 0);
    assert_eq!(v.drag_move(206.0), 299);
    assert_eq!(v.current_part(), Part::LAST);
    v.drag_end();
    assert!(!v.is_dragging());
    assert_eq!(v.drag_move(300.0), 299);
    assert!(!v.is_dragging());
    v.tick(Duration::from_millis(16));
    assert_eq!(v.current_frame(), 299);
}

#[test]
fn image_set_drags_step_against_the_pointer() {
    let mut v = ImageSetViewer::new(stills(8), ScrubberConfig::default()).unwrap();
    assert_eq!(v.len(), 8);
    v.drag_start(100.0);
    assert!(v.is_dragging());
    assert_eq!(v.drag_move(106.0), 7);
    assert_eq!(v.current_image().as_str(), "/stills/7.jpg");
    assert_eq!(v.drag_move(100.0), 0);
    v.drag_end();
    assert_eq!(v.drag_move(0.0), 0);
    assert!(!v.is_dragging());
}

#[test]
fn image_set_steps_reset_and_reports_progress() {
    let mut v = ImageSetViewer::new(stills(4), ScrubberConfig::default()).unwrap();
    assert_eq!(v.progress(), 0.25);
    v.step(Direction::Forward);
    v.step(Direction::Forward);
    assert_eq!(v.current_index(), 2);
    assert_eq!(v.progress(), 0.75);
    v.step(Direction::Backward);
    v.reset();
    assert_eq!(v.current_index(), 0);
    assert_eq!(v.step(Direction::Backward), 3);
}

#[test]
fn empty_image_sets_are_rejected() {
    assert_eq!(
        ImageSetViewer::new(Vec::new(), ScrubberConfig::default()).err(),
        Some(TourError::EmptySequence)
    );
}
