use glam::Vec2;
use tour_core::AssetId;

use crate::constants::{HOTSPOT_SIZE_PX, IMAGE_LIST_SEPARATOR, WHEEL_LINE_PX, WHEEL_PAGE_PX};

// WheelEvent.deltaMode values; 0 is pixels
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Pointer position relative to an element's top-left corner, in CSS pixels.
#[inline]
pub fn local_point(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

/// Wheel delta normalized to pixels regardless of the reported delta mode.
#[inline]
pub fn wheel_delta_px(delta_y: f32, delta_mode: u32) -> f32 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => delta_y * WHEEL_PAGE_PX,
        _ => delta_y,
    }
}

/// Top-left CSS offset of a hotspot marker centered on `anchor`.
#[inline]
pub fn hotspot_offset(anchor: Vec2) -> Vec2 {
    anchor - Vec2::splat(HOTSPOT_SIZE_PX * 0.5)
}

/// CSS transform for the panorama surface.
pub fn panorama_transform(rotation: Vec2) -> String {
    format!("rotateX({:.2}deg) rotateY({:.2}deg)", rotation.x, rotation.y)
}

pub fn zoom_transform(zoom: f32) -> String {
    format!("scale({:.3})", zoom)
}

pub fn zoom_label(zoom: f32) -> String {
    format!("{:.0}%", zoom * 100.0)
}

#[inline]
pub fn progress_width(fraction: f32) -> String {
    format!("{:.1}%", (fraction * 100.0).clamp(0.0, 100.0))
}

/// Still paths from a `data-images` attribute; blank entries are skipped.
pub fn parse_image_list(raw: &str) -> Vec<AssetId> {
    raw.split(IMAGE_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(AssetId::new)
        .collect()
}
