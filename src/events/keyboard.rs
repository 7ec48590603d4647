use std::cell::RefCell;
use std::rc::Rc;

use tour_core::{FrameSequenceViewer, ImageSetViewer, Mode};
use web_sys as web;

use crate::dom::Listener;
use crate::keymap::{self, FramesKey, ImageSetKey, TourKey, TourView};
use crate::mount;
use crate::Tour;

pub fn tour_view(tour: &Tour) -> TourView {
    if tour.is_transitioning() {
        return TourView::Busy;
    }
    match tour.mode() {
        Mode::Exterior { .. } => TourView::Exterior,
        Mode::Interior { room: None, .. } => TourView::FloorPlan,
        Mode::Interior { room: Some(_), .. } => TourView::Panorama,
        _ => TourView::Busy,
    }
}

/// Apply one mapped key. Rejected requests are logged by the orchestrator.
pub fn apply_tour_key(tour: &mut Tour, key: TourKey, exit_href: &str) {
    match key {
        TourKey::PreviousPart => {
            tour.request_previous_part();
        }
        TourKey::NextPart => {
            tour.request_next_part();
        }
        TourKey::EnterBuilding => {
            tour.request_enter_building();
        }
        TourKey::ExitBuilding => {
            tour.request_exit_building();
        }
        TourKey::Nudge(nudge) => {
            if let Some(pano) = tour.panorama_mut() {
                pano.nudge(nudge);
            }
        }
        TourKey::ResetPanorama => {
            if let Some(pano) = tour.panorama_mut() {
                pano.reset();
            }
        }
        TourKey::CloseRoom => {
            tour.request_room_exit();
        }
        TourKey::ExitViewer => mount::request_exit(exit_href),
    }
}

pub fn wire_tour_keys(
    window: &web::Window,
    tour: Rc<RefCell<Tour>>,
    exit_href: String,
) -> Option<Listener> {
    Listener::with_passive(window, "keydown", false, move |ev| {
        let Some(ev) = keyboard_event(&ev) else {
            return;
        };
        let Ok(mut tour) = tour.try_borrow_mut() else {
            return;
        };
        let Some(key) = keymap::tour_key(&ev.key(), tour_view(&tour)) else {
            return;
        };
        ev.prevent_default();
        // held keys repeat; only panorama nudges follow the repeat rate
        if ev.repeat() && !matches!(key, TourKey::Nudge(_)) {
            return;
        }
        log::debug!("[keys] {} -> {:?}", ev.key(), key);
        apply_tour_key(&mut tour, key, &exit_href);
    })
}

pub fn wire_frames_keys(
    window: &web::Window,
    viewer: Rc<RefCell<FrameSequenceViewer>>,
    exit_href: String,
) -> Option<Listener> {
    Listener::with_passive(window, "keydown", false, move |ev| {
        let Some(ev) = keyboard_event(&ev) else {
            return;
        };
        let Some(key) = keymap::frames_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let Ok(mut viewer) = viewer.try_borrow_mut() else {
            return;
        };
        match key {
            FramesKey::PreviousPart => {
                viewer.previous_part();
            }
            FramesKey::NextPart => {
                viewer.next_part();
            }
            FramesKey::TogglePlay => {
                let playing = viewer.toggle_play();
                log::info!("[frames] playing={}", playing);
            }
            FramesKey::JumpToPart(part) => viewer.jump_to_part(part),
            FramesKey::Close => mount::request_exit(&exit_href),
        }
    })
}

pub fn wire_imageset_keys(
    window: &web::Window,
    viewer: Rc<RefCell<ImageSetViewer>>,
    exit_href: String,
) -> Option<Listener> {
    Listener::with_passive(window, "keydown", false, move |ev| {
        let Some(ev) = keyboard_event(&ev) else {
            return;
        };
        let Some(key) = keymap::imageset_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let Ok(mut viewer) = viewer.try_borrow_mut() else {
            return;
        };
        match key {
            ImageSetKey::Previous => {
                viewer.step(tour_core::Direction::Backward);
            }
            ImageSetKey::Next => {
                viewer.step(tour_core::Direction::Forward);
            }
            ImageSetKey::Reset => viewer.reset(),
            ImageSetKey::Close => mount::request_exit(&exit_href),
        }
    })
}

fn keyboard_event(ev: &web::Event) -> Option<web::KeyboardEvent> {
    use wasm_bindgen::JsCast;
    let ev = ev.dyn_ref::<web::KeyboardEvent>()?;
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return None;
    }
    Some(ev.clone())
}
