// Host-side tests for the tour state machine, driven by a recording fake media element.

mod common;

use common::*;
use std::time::Duration;
use tour_core::{FloorId, LayerOrder, MediaEvent, Mode, Part, RoomId};

fn part(id: u8) -> Part {
    Part::new(id).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn next_part_cycles_through_all_parts_and_wraps() {
    let mut t = tour();
    assert_eq!(t.mode(), &Mode::Exterior { part: part(1) });
    for expected in [2, 3, 4] {
        assert!(t.request_next_part());
        finish_segment(&mut t);
        assert_eq!(t.mode(), &Mode::Exterior { part: part(expected) });
    }
    assert!(t.request_next_part());
    let range = t.active_player().unwrap().range();
    assert_eq!((range.start, range.end), (22.5, 30.0));
    finish_segment(&mut t);
    assert_eq!(t.mode(), &Mode::Exterior { part: part(1) });
    assert_eq!(t.current_part(), part(1));
}

#[test]
fn previous_part_from_first_plays_reverse_encoding() {
    let mut t = tour();
    assert!(t.request_previous_part());
    let player = t.active_player().unwrap();
    assert_eq!(player.segment().to, part(4));
    assert_eq!(player.video().as_str(), t.config().assets.reverse_video.as_str());
    assert_eq!((player.range().start, player.range().end), (0.0, 7.5));
    finish_segment(&mut t);
    assert_eq!(t.current_part(), part(4));
}

#[test]
fn requests_are_dropped_while_a_segment_plays() {
    let mut t = tour();
    assert!(t.request_next_part());
    assert!(t.is_transitioning());
    assert!(!t.request_next_part());
    assert!(!t.request_previous_part());
    assert!(!t.request_enter_building());
    let Mode::TransitioningVideo { segment } = t.mode() else {
        panic!("expected a playing segment, got {:?}", t.mode());
    };
    assert_eq!(segment.to, part(2));
    // only one load was issued
    assert_eq!(t.media().calls.iter().filter(|c| matches!(c, Call::Load(_))).count(), 1);
    finish_segment(&mut t);
    assert_eq!(t.current_part(), part(2));
    assert!(!t.is_transitioning());
}

#[test]
fn loaded_data_seeks_then_plays_once() {
    let mut t = tour();
    t.request_next_part();
    t.handle_media_event(MediaEvent::LoadedData);
    t.handle_media_event(MediaEvent::LoadedData);
    assert_eq!(t.media().seeks(), vec![0.0]);
    assert_eq!(t.media().count(&Call::Play), 1);
}

#[test]
fn stop_frame_stays_on_top_until_the_video_is_ready() {
    let mut t = tour();
    t.request_next_part();
    let layers = |t: &Tour| t.active_player().unwrap().layers();
    assert_eq!(layers(&t), LayerOrder::IdleFrameOnTop);
    // a seek completion before playback starts does not swap
    t.handle_media_event(MediaEvent::Seeked);
    assert_eq!(layers(&t), LayerOrder::IdleFrameOnTop);
    t.handle_media_event(MediaEvent::LoadedData);
    assert_eq!(layers(&t), LayerOrder::IdleFrameOnTop);
    t.handle_media_event(MediaEvent::Seeked);
    assert_eq!(layers(&t), LayerOrder::VideoOnTop);
    assert_eq!(t.active_player().unwrap().idle_frame(), t.stop_frame(part(1)));
}

#[test]
fn completion_tolerates_time_updates_just_short_of_the_end() {
    let mut t = tour();
    t.request_next_part();
    t.handle_media_event(MediaEvent::LoadedData);
    t.handle_media_event(MediaEvent::TimeUpdate {
        current_time: 7.0,
        duration: 30.0,
    });
    assert!(t.is_transitioning());
    t.handle_media_event(MediaEvent::TimeUpdate {
        current_time: 7.3,
        duration: 30.0,
    });
    assert_eq!(t.mode(), &Mode::Exterior { part: part(2) });
    let calls = &t.media().calls;
    assert_eq!(&calls[calls.len() - 2..], &[Call::Pause, Call::Detach]);
}

#[test]
fn rejected_autoplay_jumps_to_the_target_part() {
    let mut t = tour_with(FakeMedia::rejecting());
    t.request_next_part();
    t.handle_media_event(MediaEvent::LoadedData);
    assert_eq!(t.mode(), &Mode::Exterior { part: part(2) });
    assert!(!t.is_transitioning());
}

#[test]
fn late_play_rejection_and_load_failure_fail_open() {
    let mut t = tour();
    t.request_next_part();
    t.handle_media_event(MediaEvent::LoadedData);
    t.handle_media_event(MediaEvent::PlayRejected("NotAllowedError".into()));
    assert_eq!(t.current_part(), part(2));

    t.request_next_part();
    t.handle_media_event(MediaEvent::Failed("code 4".into()));
    assert_eq!(t.mode(), &Mode::Exterior { part: part(3) });
}

#[test]
fn events_after_completion_are_ignored() {
    let mut t = tour();
    t.request_next_part();
    finish_segment(&mut t);
    let calls = t.media().calls.len();
    t.handle_media_event(MediaEvent::Ended);
    t.handle_media_event(MediaEvent::TimeUpdate {
        current_time: 7.5,
        duration: 30.0,
    });
    assert_eq!(t.media().calls.len(), calls);
    assert_eq!(t.current_part(), part(2));
}

#[test]
fn silent_media_is_completed_by_the_stall_guard() {
    let mut t = tour();
    t.request_next_part();
    t.tick(ms(11_000));
    t.handle_media_event(MediaEvent::LoadedData);
    t.tick(ms(11_000));
    assert!(t.is_transitioning());
    t.tick(ms(1_000));
    assert_eq!(t.mode(), &Mode::Exterior { part: part(2) });
}

#[test]
fn silent_entry_clip_is_completed_by_the_stall_guard() {
    let mut t = tour();
    assert!(t.request_enter_building());
    t.tick(ms(11_999));
    assert!(t.is_transitioning());
    assert_eq!(t.media().count(&Call::Detach), 0);
    t.tick(ms(1));
    assert_eq!(t.media().count(&Call::Detach), 1);
    assert!(t.is_transitioning());
    t.tick(ms(400));
    assert_eq!(
        t.mode(),
        &Mode::Interior {
            floor: FloorId::new("floor2"),
            room: None
        }
    );
    assert!(!t.is_transitioning());
}

#[test]
fn entering_commits_default_floor_after_the_tail_delay() {
    let mut t = tour();
    assert!(t.request_enter_building());
    assert_eq!(t.mode(), &Mode::TransitioningEntry { from: part(1) });
    assert_eq!(t.entry_clip(), Some(&t.config().assets.entry_clip));
    t.handle_media_event(MediaEvent::LoadedData);
    assert_eq!(t.media().count(&Call::Play), 1);
    t.handle_media_event(MediaEvent::Ended);

    t.tick(ms(399));
    assert!(t.is_transitioning());
    assert_eq!(t.current_floor_id(), None);
    assert!(!t.request_next_part());

    t.tick(ms(1));
    assert!(!t.is_transitioning());
    assert_eq!(t.current_floor_id(), Some(&FloorId::new("floor2")));
    assert_eq!(
        t.mode(),
        &Mode::Interior {
            floor: FloorId::new("floor2"),
            room: None
        }
    );
}

#[test]
fn entry_overlay_opens_near_the_end_of_the_clip() {
    let mut t = tour();
    t.request_enter_building();
    t.handle_media_event(MediaEvent::LoadedData);
    t.handle_media_event(MediaEvent::TimeUpdate {
        current_time: 1.0,
        duration: 5.0,
    });
    t.tick(ms(100));
    assert_eq!(t.overlay_opacity(), 0.0);
    t.handle_media_event(MediaEvent::TimeUpdate {
        current_time: 4.8,
        duration: 5.0,
    });
    t.tick(ms(150));
    assert!(t.overlay_opacity() > 0.4);
    // the overlay holds until the clip ends, however long that takes
    t.tick(ms(2_000));
    assert!(t.is_transitioning());
    t.handle_media_event(MediaEvent::Ended);
    t.tick(ms(400));
    assert_eq!(t.current_floor_id(), Some(&FloorId::new("floor2")));
}

#[test]
fn entry_fails_open_when_the_clip_cannot_play() {
    let mut t = tour_with(FakeMedia::rejecting());
    t.request_enter_building();
    t.handle_media_event(MediaEvent::LoadedData);
    t.tick(ms(400));
    assert_eq!(t.current_floor_id(), Some(&FloorId::new("floor2")));
}

#[test]
fn exit_returns_to_the_part_the_visitor_entered_from() {
    let mut t = tour();
    t.request_next_part();
    finish_segment(&mut t);
    enter_building(&mut t);

    assert!(t.request_exit_building());
    assert_eq!(
        t.mode(),
        &Mode::TransitioningExit {
            from: FloorId::new("floor2")
        }
    );
    assert_eq!(t.current_floor_id(), None);
    assert_eq!(t.displayed_floor().map(|f| f.id.as_str()), Some("floor2"));
    t.tick(ms(1_399));
    assert!(t.is_transitioning());
    assert!(!t.request_floor_change(&FloorId::new("floor1")));
    t.tick(ms(1));
    assert_eq!(t.mode(), &Mode::Exterior { part: part(2) });
    assert!(t.request_next_part());
}

#[test]
fn exit_overlay_fades_in_then_out_around_the_swap() {
    let mut t = tour();
    enter_building(&mut t);
    // let the entry fade-out settle
    t.tick(ms(300));
    assert_eq!(t.overlay_opacity(), 0.0);
    t.request_exit_building();
    t.tick(ms(150));
    assert!((t.overlay_opacity() - 0.5).abs() < 1e-3);
    t.tick(ms(1_250));
    assert!(!t.is_transitioning());
    assert!((t.overlay_opacity() - 1.0).abs() < 1e-3);
    t.tick(ms(150));
    assert!((t.overlay_opacity() - 0.5).abs() < 1e-3);
    t.tick(ms(150));
    assert_eq!(t.overlay_opacity(), 0.0);
}

#[test]
fn floor_change_swaps_under_the_overlay() {
    let mut t = tour();
    enter_building(&mut t);
    let floor1 = FloorId::new("floor1");
    assert!(t.request_floor_change(&floor1));
    assert!(!t.request_floor_change(&FloorId::new("floor0")));
    t.tick(ms(399));
    assert_eq!(t.current_floor_id(), Some(&FloorId::new("floor2")));
    t.tick(ms(1));
    assert_eq!(t.current_floor_id(), Some(&floor1));
    assert!(!t.is_transitioning());
    assert_eq!(t.current_floor().unwrap().rooms.len(), 4);
}

#[test]
fn back_to_back_floor_changes_keep_the_overlay_up() {
    let mut t = tour();
    enter_building(&mut t);
    t.tick(ms(300));
    assert!(t.request_floor_change(&FloorId::new("floor1")));
    t.tick(ms(400));
    t.tick(ms(50));
    let before = t.overlay_opacity();
    assert!(before > 0.8);
    assert!(t.request_floor_change(&FloorId::new("floor0")));
    assert!(t.overlay_opacity() >= before - 1e-3);
    t.tick(ms(16));
    assert!(t.overlay_opacity() > before);
    t.tick(ms(384));
    assert_eq!(t.current_floor_id(), Some(&FloorId::new("floor0")));
}

#[test]
fn floor_change_to_same_or_unknown_floor_is_a_no_op() {
    let mut t = tour();
    enter_building(&mut t);
    assert!(!t.request_floor_change(&FloorId::new("floor2")));
    assert!(!t.request_floor_change(&FloorId::new("attic")));
    assert!(!t.is_transitioning());
}

#[test]
fn rooms_open_as_panoramas_on_the_current_floor() {
    let mut t = tour();
    enter_building(&mut t);
    assert!(t.panorama_mut().is_none());
    assert!(!t.request_room_enter(&RoomId::new("room1-1")));
    assert!(!t.request_room_enter(&RoomId::new("cellar")));

    assert!(t.request_room_enter(&RoomId::new("room2-1")));
    assert_eq!(t.current_floor_id(), Some(&FloorId::new("floor2")));
    assert_eq!(t.open_room().map(|r| r.name.as_str()), Some("Master Bedroom"));
    assert!(!t.request_floor_change(&FloorId::new("floor1")));

    t.panorama_mut().unwrap().nudge(tour_core::PanNudge::Right);
    assert!(t.request_room_exit());
    assert!(t.open_room().is_none());
    assert!(t.panorama_mut().is_none());

    // view is fresh on the next room
    assert!(t.request_room_enter(&RoomId::new("room2-2")));
    assert_eq!(t.panorama().view().rotation.y, 0.0);
}

#[test]
fn exit_from_an_open_room_resets_the_panorama() {
    let mut t = tour();
    enter_building(&mut t);
    t.request_room_enter(&RoomId::new("room2-1"));
    t.panorama_mut().unwrap().on_wheel(-500.0);
    assert!(t.request_exit_building());
    assert_eq!(t.panorama().view().zoom, 1.0);
    t.tick(ms(1_400));
    assert_eq!(t.mode(), &Mode::Exterior { part: part(1) });
}

#[test]
fn current_floor_is_present_only_inside() {
    let mut t = tour();
    assert_eq!(t.session().current_floor, None);
    t.request_next_part();
    assert_eq!(t.session().current_floor, None);
    assert!(t.session().active_segment.is_some());
    finish_segment(&mut t);
    t.request_enter_building();
    assert_eq!(t.session().current_floor, None);
    t.handle_media_event(MediaEvent::Ended);
    t.tick(ms(400));
    let session = t.session();
    assert_eq!(session.current_floor, Some(FloorId::new("floor2")));
    assert_eq!(session.current_part, part(2));
    assert!(!session.is_transitioning);
}

#[test]
fn requests_outside_their_mode_are_ignored() {
    let mut t = tour();
    assert!(!t.request_exit_building());
    assert!(!t.request_floor_change(&FloorId::new("floor1")));
    assert!(!t.request_room_enter(&RoomId::new("room2-1")));
    assert!(!t.request_room_exit());
    enter_building(&mut t);
    assert!(!t.request_next_part());
    assert!(!t.request_enter_building());
}

#[test]
fn shutdown_releases_media_and_refuses_requests() {
    let mut t = tour();
    t.request_next_part();
    t.handle_media_event(MediaEvent::LoadedData);
    t.shutdown();
    assert!(!t.is_transitioning());
    assert_eq!(t.media().calls.last(), Some(&Call::Detach));
    assert!(t.media().count(&Call::Pause) >= 1);
    assert!(!t.request_next_part());
    assert!(!t.request_enter_building());
    t.tick(ms(20_000));
    assert_eq!(t.overlay_opacity(), 0.0);
}

#[test]
fn upcoming_stop_frame_names_the_landing_view() {
    let mut t = tour();
    assert!(t.upcoming_stop_frame().is_none());
    t.request_next_part();
    let landing = t.config().assets.stop_frame(part(2)).clone();
    assert_eq!(t.upcoming_stop_frame(), Some(&landing));
    finish_segment(&mut t);
    assert!(t.upcoming_stop_frame().is_none());

    enter_building(&mut t);
    assert!(t.upcoming_stop_frame().is_none());
    t.request_exit_building();
    let landing = t.config().assets.stop_frame(part(2)).clone();
    assert_eq!(t.upcoming_stop_frame(), Some(&landing));
}
