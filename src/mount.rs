//! Viewer mounting and teardown.
//!
//! One viewer is mounted per page, chosen by which root element exists. The
//! mounted viewer owns every listener guard and the animation loop, so dropping
//! it detaches the viewer from the page.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tour_core::{
    Direction, FrameSequenceViewer, ImageSetViewer, ScrubberConfig, TourConfig,
    TransitionOrchestrator,
};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::*;
use crate::dom::Listeners;
use crate::events::{keyboard, pointer};
use crate::frame::{self, AnimationLoop, FrameContext};
use crate::fullscreen::FullscreenToggle;
use crate::input;
use crate::media::{HtmlVideoMedia, MediaEventQueue};
use crate::render::{self, FramesElements, ImageSetElements, TourElements, TourRenderer};
use crate::Tour;

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[allow(dead_code)] // held for Drop
enum Mounted {
    Tour(TourMount),
    Frames(FramesMount),
    ImageSet(ImageSetMount),
}

pub fn mount(document: &web::Document) -> anyhow::Result<()> {
    let mounted = if document.get_element_by_id(TOUR_ROOT_ID).is_some() {
        Mounted::Tour(TourMount::new(document)?)
    } else if document.get_element_by_id(FRAMES_ROOT_ID).is_some() {
        Mounted::Frames(FramesMount::new(document)?)
    } else if document.get_element_by_id(IMAGESET_ROOT_ID).is_some() {
        Mounted::ImageSet(ImageSetMount::new(document)?)
    } else {
        anyhow::bail!("no viewer root element on this page");
    };
    let previous = MOUNTED.with(|m| m.borrow_mut().replace(mounted));
    drop(previous);
    Ok(())
}

/// Tear the viewer down outside of the callback that asked for it.
pub fn request_unmount() {
    spawn_local(async {
        let taken = MOUNTED.with(|m| m.borrow_mut().take());
        if taken.is_some() {
            drop(taken);
            log::info!("[dom] viewer unmounted");
        }
    });
}

/// Leave the viewer: unmount, then navigate to `href`.
pub fn request_exit(href: &str) {
    let href = href.to_string();
    spawn_local(async move {
        let taken = MOUNTED.with(|m| m.borrow_mut().take());
        drop(taken);
        if let Some(w) = web::window() {
            if let Err(e) = w.location().set_href(&href) {
                log::error!("[dom] navigation to {} failed: {:?}", href, e);
            }
        }
    });
}

fn exit_href(root: &web::Element) -> String {
    root.get_attribute(DATA_EXIT_HREF)
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_EXIT_HREF.to_string())
}

fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow::anyhow!("no window"))
}

fn wire_fullscreen(
    listeners: &mut Listeners,
    document: &web::Document,
    button_id: &str,
    root: &web::HtmlElement,
) {
    let container: web::Element = root.clone().into();
    let mut toggle = FullscreenToggle::default();
    listeners.on_click(document, button_id, move || {
        toggle.toggle(&container);
        log::debug!("[fullscreen] active={}", toggle.is_active());
    });
}

// ---------------- building tour ----------------

struct TourFrame {
    tour: Rc<RefCell<Tour>>,
    queue: Rc<MediaEventQueue>,
    renderer: TourRenderer,
}

impl FrameContext for TourFrame {
    fn frame(&mut self, dt: Duration) {
        let Ok(mut tour) = self.tour.try_borrow_mut() else {
            return;
        };
        for event in self.queue.drain_current() {
            tour.handle_media_event(event);
        }
        tour.tick(dt);
        self.renderer.render(&tour);
    }
}

struct TourMount {
    tour: Rc<RefCell<Tour>>,
    listeners: Listeners,
    animation: Option<AnimationLoop>,
}

impl TourMount {
    fn new(document: &web::Document) -> anyhow::Result<Self> {
        let window = window()?;
        let els = TourElements::find(document)?;
        let queue = Rc::new(MediaEventQueue::default());
        let media = HtmlVideoMedia::new(els.video.clone(), queue.clone());
        let tour = TransitionOrchestrator::new(TourConfig::default(), media)
            .map_err(|e| anyhow::anyhow!("tour config rejected: {e}"))?;
        let tour = Rc::new(RefCell::new(tour));
        let exit = exit_href(&els.root);

        let mut listeners = Listeners::default();
        listeners.push(keyboard::wire_tour_keys(&window, tour.clone(), exit.clone()));
        pointer::wire_panorama(&mut listeners, &els.panorama, &tour);
        pointer::wire_hotspots(&mut listeners, &els.hotspots, &tour);
        if let Some(selector) = &els.floor_selector {
            pointer::wire_floor_selector(&mut listeners, selector, &tour);
        }
        let t = tour.clone();
        listeners.on_click(document, TOUR_PREV_BUTTON_ID, move || {
            t.borrow_mut().request_previous_part();
        });
        let t = tour.clone();
        listeners.on_click(document, TOUR_NEXT_BUTTON_ID, move || {
            t.borrow_mut().request_next_part();
        });
        let t = tour.clone();
        listeners.on_click(document, TOUR_ENTER_BUTTON_ID, move || {
            t.borrow_mut().request_enter_building();
        });
        let t = tour.clone();
        listeners.on_click(document, TOUR_EXIT_BUTTON_ID, move || {
            t.borrow_mut().request_exit_building();
        });
        let t = tour.clone();
        listeners.on_click(document, TOUR_PANORAMA_RESET_ID, move || {
            if let Some(pano) = t.borrow_mut().panorama_mut() {
                pano.reset();
            }
        });
        let t = tour.clone();
        listeners.on_click(document, TOUR_PANORAMA_CLOSE_ID, move || {
            t.borrow_mut().request_room_exit();
        });
        listeners.on_click(document, TOUR_CLOSE_BUTTON_ID, move || request_exit(&exit));
        wire_fullscreen(&mut listeners, document, TOUR_FULLSCREEN_ID, &els.root);

        let renderer = TourRenderer::new(els, document.clone());
        let animation = frame::start_loop(Rc::new(RefCell::new(TourFrame {
            tour: tour.clone(),
            queue,
            renderer,
        })));
        log::info!("[tour] mounted with {} listeners", listeners.len());
        Ok(Self {
            tour,
            listeners,
            animation: Some(animation),
        })
    }
}

impl Drop for TourMount {
    fn drop(&mut self) {
        self.listeners.clear();
        self.animation.take();
        match self.tour.try_borrow_mut() {
            Ok(mut tour) => tour.shutdown(),
            Err(_) => log::warn!("[tour] busy during unmount, media left attached"),
        }
    }
}

// ---------------- frame sequence ----------------

struct FramesFrame {
    viewer: Rc<RefCell<FrameSequenceViewer>>,
    els: FramesElements,
    last_frame: Option<usize>,
}

impl FrameContext for FramesFrame {
    fn frame(&mut self, dt: Duration) {
        let Ok(mut viewer) = self.viewer.try_borrow_mut() else {
            return;
        };
        viewer.tick(dt);
        render::render_frames(&self.els, &viewer, &mut self.last_frame);
    }
}

struct FramesMount {
    listeners: Listeners,
    animation: Option<AnimationLoop>,
}

impl FramesMount {
    fn new(document: &web::Document) -> anyhow::Result<Self> {
        let window = window()?;
        let els = FramesElements::find(document)?;
        let dir = els
            .root
            .get_attribute(DATA_FRAMES_DIR)
            .unwrap_or_else(|| TourConfig::default().assets.frame_sequence_dir);
        let mut viewer = FrameSequenceViewer::new(dir)
            .map_err(|e| anyhow::anyhow!("frame sequence rejected: {e}"))?;
        viewer.open();
        let viewer = Rc::new(RefCell::new(viewer));
        let exit = exit_href(&els.root);

        let mut listeners = Listeners::default();
        listeners.push(keyboard::wire_frames_keys(&window, viewer.clone(), exit.clone()));
        pointer::wire_scrub_drag(&mut listeners, &els.image, &viewer);
        let v = viewer.clone();
        pointer::wire_part_buttons(&mut listeners, &els.root, move |part| {
            v.borrow_mut().jump_to_part(part);
        });
        let v = viewer.clone();
        listeners.on_click(document, FRAMES_PREV_ID, move || {
            v.borrow_mut().previous_part();
        });
        let v = viewer.clone();
        listeners.on_click(document, FRAMES_NEXT_ID, move || {
            v.borrow_mut().next_part();
        });
        let v = viewer.clone();
        listeners.on_click(document, FRAMES_PLAY_ID, move || {
            v.borrow_mut().toggle_play();
        });
        listeners.on_click(document, FRAMES_CLOSE_ID, move || request_exit(&exit));
        wire_fullscreen(&mut listeners, document, FRAMES_FULLSCREEN_ID, &els.root);

        let animation = frame::start_loop(Rc::new(RefCell::new(FramesFrame {
            viewer,
            els,
            last_frame: None,
        })));
        log::info!("[frames] mounted with {} listeners", listeners.len());
        Ok(Self {
            listeners,
            animation: Some(animation),
        })
    }
}

impl Drop for FramesMount {
    fn drop(&mut self) {
        self.listeners.clear();
        self.animation.take();
    }
}

// ---------------- image set ----------------

struct ImageSetFrame {
    viewer: Rc<RefCell<ImageSetViewer>>,
    els: ImageSetElements,
    last_index: Option<usize>,
}

impl FrameContext for ImageSetFrame {
    fn frame(&mut self, _dt: Duration) {
        if let Ok(viewer) = self.viewer.try_borrow() {
            render::render_imageset(&self.els, &viewer, &mut self.last_index);
        }
    }
}

struct ImageSetMount {
    listeners: Listeners,
    animation: Option<AnimationLoop>,
}

impl ImageSetMount {
    fn new(document: &web::Document) -> anyhow::Result<Self> {
        let window = window()?;
        let els = ImageSetElements::find(document)?;
        let raw = els.root.get_attribute(DATA_IMAGES).unwrap_or_default();
        let images = input::parse_image_list(&raw);
        let viewer = ImageSetViewer::new(images, ScrubberConfig::default())
            .map_err(|e| anyhow::anyhow!("image set rejected: {e}"))?;
        log::info!("[frames] image set with {} stills", viewer.len());
        let viewer = Rc::new(RefCell::new(viewer));
        let exit = exit_href(&els.root);

        let mut listeners = Listeners::default();
        listeners.push(keyboard::wire_imageset_keys(&window, viewer.clone(), exit.clone()));
        pointer::wire_scrub_drag(&mut listeners, &els.image, &viewer);
        let v = viewer.clone();
        listeners.on_click(document, IMAGESET_PREV_ID, move || {
            v.borrow_mut().step(Direction::Backward);
        });
        let v = viewer.clone();
        listeners.on_click(document, IMAGESET_NEXT_ID, move || {
            v.borrow_mut().step(Direction::Forward);
        });
        let v = viewer.clone();
        listeners.on_click(document, IMAGESET_RESET_ID, move || v.borrow_mut().reset());
        listeners.on_click(document, IMAGESET_CLOSE_ID, move || request_exit(&exit));
        wire_fullscreen(&mut listeners, document, IMAGESET_FULLSCREEN_ID, &els.root);

        let animation = frame::start_loop(Rc::new(RefCell::new(ImageSetFrame {
            viewer,
            els,
            last_index: None,
        })));
        Ok(Self {
            listeners,
            animation: Some(animation),
        })
    }
}

impl Drop for ImageSetMount {
    fn drop(&mut self) {
        self.listeners.clear();
        self.animation.take();
    }
}
