//! Pseudo-3D look-around for a single panoramic image.
//!
//! The controller is a pure function of its input history: drag deltas and
//! arrow nudges turn into pitch/yaw, wheel deltas into zoom.

use glam::Vec2;

use crate::constants::{
    PANORAMA_KEY_STEP_DEG, PANORAMA_PITCH_LIMIT_DEG, PANORAMA_PITCH_PER_PX, PANORAMA_YAW_PER_PX,
    PANORAMA_ZOOM_MAX, PANORAMA_ZOOM_MIN, PANORAMA_ZOOM_PER_WHEEL,
};

/// `rotation.x` is pitch (clamped), `rotation.y` is yaw (unbounded), degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanoramaView {
    pub rotation: Vec2,
    pub zoom: f32,
}

impl Default for PanoramaView {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            zoom: PANORAMA_ZOOM_MIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanNudge {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Debug, Default)]
pub struct PanoramaDragController {
    view: PanoramaView,
    last_point: Option<Vec2>,
}

impl PanoramaDragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PanoramaView {
        self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn on_drag_start(&mut self, point: Vec2) {
        self.last_point = Some(point);
    }

    /// Apply movement since the previous point. Ignored unless a drag is active.
    pub fn on_drag_move(&mut self, point: Vec2) -> Vec2 {
        if let Some(last) = self.last_point {
            let delta = point - last;
            let pitch = self.view.rotation.x + delta.y * PANORAMA_PITCH_PER_PX;
            self.view.rotation.x = clamp_pitch(pitch);
            self.view.rotation.y += delta.x * PANORAMA_YAW_PER_PX;
            self.last_point = Some(point);
        }
        self.view.rotation
    }

    pub fn on_drag_end(&mut self) {
        self.last_point = None;
    }

    /// Negative `delta_y` (scrolling up) zooms in.
    pub fn on_wheel(&mut self, delta_y: f32) -> f32 {
        self.view.zoom = (self.view.zoom - delta_y * PANORAMA_ZOOM_PER_WHEEL)
            .clamp(PANORAMA_ZOOM_MIN, PANORAMA_ZOOM_MAX);
        self.view.zoom
    }

    pub fn nudge(&mut self, nudge: PanNudge) -> Vec2 {
        let r = &mut self.view.rotation;
        match nudge {
            PanNudge::Left => r.y -= PANORAMA_KEY_STEP_DEG,
            PanNudge::Right => r.y += PANORAMA_KEY_STEP_DEG,
            PanNudge::Up => r.x = clamp_pitch(r.x - PANORAMA_KEY_STEP_DEG),
            PanNudge::Down => r.x = clamp_pitch(r.x + PANORAMA_KEY_STEP_DEG),
        }
        *r
    }

    pub fn reset(&mut self) {
        self.view = PanoramaView::default();
        self.last_point = None;
    }
}

#[inline]
fn clamp_pitch(deg: f32) -> f32 {
    deg.clamp(-PANORAMA_PITCH_LIMIT_DEG, PANORAMA_PITCH_LIMIT_DEG)
}
