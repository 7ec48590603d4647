// Host-side tests for the panorama look-around controller.

use glam::Vec2;
use tour_core::{PanNudge, PanoramaDragController, PanoramaView};

#[test]
fn dragging_right_turns_yaw_only() {
    let mut c = PanoramaDragController::new();
    c.on_drag_start(Vec2::new(200.0, 150.0));
    c.on_drag_move(Vec2::new(250.0, 150.0));
    c.on_drag_move(Vec2::new(300.0, 150.0));
    c.on_drag_end();
    let v = c.view();
    assert!((v.rotation.y - 30.0).abs() < 1e-4);
    assert_eq!(v.rotation.x, 0.0);
    assert!(!c.is_dragging());
}

#[test]
fn moves_without_an_active_drag_are_ignored() {
    let mut c = PanoramaDragController::new();
    c.on_drag_move(Vec2::new(500.0, 500.0));
    assert_eq!(c.view(), PanoramaView::default());
    c.on_drag_start(Vec2::ZERO);
    c.on_drag_end();
    c.on_drag_move(Vec2::new(100.0, 0.0));
    assert_eq!(c.view().rotation, Vec2::ZERO);
}

#[test]
fn pitch_clamps_at_ninety_degrees() {
    let mut c = PanoramaDragController::new();
    c.on_drag_start(Vec2::ZERO);
    c.on_drag_move(Vec2::new(0.0, 1_000.0));
    assert_eq!(c.view().rotation.x, 90.0);
    c.on_drag_move(Vec2::new(0.0, -2_000.0));
    assert_eq!(c.view().rotation.x, -90.0);
}

#[test]
fn wheel_zoom_is_clamped() {
    let mut c = PanoramaDragController::new();
    assert_eq!(c.view().zoom, 1.0);
    assert!((c.on_wheel(-500.0) - 1.5).abs() < 1e-6);
    assert_eq!(c.on_wheel(-10_000.0), 3.0);
    assert_eq!(c.on_wheel(10_000.0), 1.0);
}

#[test]
fn nudges_step_five_degrees() {
    let mut c = PanoramaDragController::new();
    c.nudge(PanNudge::Right);
    c.nudge(PanNudge::Right);
    c.nudge(PanNudge::Left);
    assert_eq!(c.view().rotation.y, 5.0);
    c.nudge(PanNudge::Up);
    assert_eq!(c.view().rotation.x, -5.0);
    for _ in 0..40 {
        c.nudge(PanNudge::Down);
    }
    assert_eq!(c.view().rotation.x, 90.0);
}

#[test]
fn reset_restores_the_default_view() {
    let mut c = PanoramaDragController::new();
    c.on_drag_start(Vec2::ZERO);
    c.on_drag_move(Vec2::new(40.0, 20.0));
    c.on_wheel(-800.0);
    c.reset();
    assert_eq!(c.view(), PanoramaView::default());
    assert!(!c.is_dragging());
}
