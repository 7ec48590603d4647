use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use tour_core::{DragScrub, FloorId, RoomId};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{DATA_FLOOR, DATA_PART, DATA_ROOM};
use crate::dom::{Listener, Listeners};
use crate::input;
use crate::Tour;

#[inline]
fn point_in(el: &web::Element, ev: &web::MouseEvent) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    input::local_point(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Value of `attr` on the nearest ancestor of the event target carrying it.
pub fn delegated_attr(ev: &web::Event, attr: &str) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let hit = target.closest(&format!("[{attr}]")).ok()??;
    hit.get_attribute(attr)
}

pub fn wire_panorama(
    listeners: &mut Listeners,
    surface: &web::HtmlElement,
    tour: &Rc<RefCell<Tour>>,
) {
    let el: web::Element = surface.clone().into();

    let t = tour.clone();
    let target = el.clone();
    listeners.push(Listener::new(surface, "pointerdown", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        _ = target.set_pointer_capture(pe.pointer_id());
        let at = point_in(&target, pe);
        if let Ok(mut tour) = t.try_borrow_mut() {
            if let Some(pano) = tour.panorama_mut() {
                pano.on_drag_start(at);
            }
        }
    }));

    let t = tour.clone();
    let target = el.clone();
    listeners.push(Listener::new(surface, "pointermove", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let at = point_in(&target, pe);
        if let Ok(mut tour) = t.try_borrow_mut() {
            if let Some(pano) = tour.panorama_mut() {
                pano.on_drag_move(at);
            }
        }
    }));

    for event in ["pointerup", "pointercancel"] {
        let t = tour.clone();
        listeners.push(Listener::new(surface, event, move |_| {
            if let Ok(mut tour) = t.try_borrow_mut() {
                if let Some(pano) = tour.panorama_mut() {
                    pano.on_drag_end();
                }
            }
        }));
    }

    // non-passive so the page does not scroll while zooming
    let t = tour.clone();
    listeners.push(Listener::with_passive(surface, "wheel", false, move |ev| {
        let Some(we) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        we.prevent_default();
        let dy = input::wheel_delta_px(we.delta_y() as f32, we.delta_mode());
        if let Ok(mut tour) = t.try_borrow_mut() {
            if let Some(pano) = tour.panorama_mut() {
                let zoom = pano.on_wheel(dy);
                log::debug!("[tour] zoom {:.2}", zoom);
            }
        }
    }));
}

/// Hotspot markers are rebuilt per floor, so clicks are caught on their container.
pub fn wire_hotspots(
    listeners: &mut Listeners,
    container: &web::HtmlElement,
    tour: &Rc<RefCell<Tour>>,
) {
    let t = tour.clone();
    listeners.push(Listener::new(container, "click", move |ev| {
        let Some(room) = delegated_attr(&ev, DATA_ROOM) else {
            return;
        };
        if let Ok(mut tour) = t.try_borrow_mut() {
            tour.request_room_enter(&RoomId::new(room));
        }
    }));
}

pub fn wire_floor_selector(
    listeners: &mut Listeners,
    selector: &web::HtmlElement,
    tour: &Rc<RefCell<Tour>>,
) {
    let t = tour.clone();
    listeners.push(Listener::new(selector, "click", move |ev| {
        let Some(floor) = delegated_attr(&ev, DATA_FLOOR) else {
            return;
        };
        if let Ok(mut tour) = t.try_borrow_mut() {
            tour.request_floor_change(&FloorId::new(floor));
        }
    }));
}

/// Part buttons anywhere under the frame viewer root carry `data-part`.
pub fn wire_part_buttons(
    listeners: &mut Listeners,
    root: &web::HtmlElement,
    mut on_part: impl FnMut(tour_core::Part) + 'static,
) {
    listeners.push(Listener::new(root, "click", move |ev| {
        let Some(raw) = delegated_attr(&ev, DATA_PART) else {
            return;
        };
        match raw.parse::<u8>().map(tour_core::Part::new) {
            Ok(Ok(part)) => on_part(part),
            _ => log::warn!("[frames] ignoring part button {:?}", raw),
        }
    }));
}

/// Horizontal pointer drag over a still image, shared by both scrub viewers.
pub fn wire_scrub_drag<V: DragScrub + 'static>(
    listeners: &mut Listeners,
    surface: &web::HtmlElement,
    viewer: &Rc<RefCell<V>>,
) {
    let el: web::Element = surface.clone().into();

    let v = viewer.clone();
    let target = el.clone();
    listeners.push(Listener::new(surface, "pointerdown", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        _ = target.set_pointer_capture(pe.pointer_id());
        if let Ok(mut viewer) = v.try_borrow_mut() {
            viewer.drag_start(pe.client_x() as f32);
        }
    }));

    let v = viewer.clone();
    listeners.push(Listener::new(surface, "pointermove", move |ev| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if let Ok(mut viewer) = v.try_borrow_mut() {
            viewer.drag_move(pe.client_x() as f32);
        }
    }));

    for event in ["pointerup", "pointercancel", "pointerleave"] {
        let v = viewer.clone();
        listeners.push(Listener::new(surface, event, move |_| {
            if let Ok(mut viewer) = v.try_borrow_mut() {
                viewer.drag_end();
            }
        }));
    }
}
