//! DOM presentation of viewer state. Renderers only read engine state.

use glam::Vec2;
use tour_core::{
    contain_fit, hotspot_anchor, AssetId, FloorId, FrameSequenceViewer, ImageSetViewer,
    LayerOrder, Mode, RoomId, PART_COUNT,
};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom::{self, element_by_id, optional_by_id, Listener};
use crate::input;
use crate::overlay;
use crate::Tour;

pub struct TourElements {
    pub root: web::HtmlElement,
    pub exterior: web::HtmlElement,
    pub stop_frame: web::HtmlImageElement,
    pub video: web::HtmlVideoElement,
    pub overlay: web::HtmlElement,
    pub interior: web::HtmlElement,
    pub floor_plan: web::HtmlImageElement,
    pub hotspots: web::HtmlElement,
    pub floor_selector: Option<web::HtmlElement>,
    pub floor_label: Option<web::HtmlElement>,
    pub part_label: Option<web::HtmlElement>,
    pub panorama: web::HtmlElement,
    pub panorama_image: web::HtmlElement,
    pub panorama_title: Option<web::HtmlElement>,
    pub zoom_label: Option<web::HtmlElement>,
}

impl TourElements {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            root: element_by_id(document, TOUR_ROOT_ID)?,
            exterior: element_by_id(document, TOUR_EXTERIOR_ID)?,
            stop_frame: element_by_id(document, TOUR_STOP_FRAME_ID)?,
            video: element_by_id(document, TOUR_VIDEO_ID)?,
            overlay: element_by_id(document, TOUR_OVERLAY_ID)?,
            interior: element_by_id(document, TOUR_INTERIOR_ID)?,
            floor_plan: element_by_id(document, TOUR_FLOOR_PLAN_ID)?,
            hotspots: element_by_id(document, TOUR_HOTSPOTS_ID)?,
            floor_selector: optional_by_id(document, TOUR_FLOOR_SELECTOR_ID),
            floor_label: optional_by_id(document, TOUR_FLOOR_LABEL_ID),
            part_label: optional_by_id(document, TOUR_PART_LABEL_ID),
            panorama: element_by_id(document, TOUR_PANORAMA_ID)?,
            panorama_image: element_by_id(document, TOUR_PANORAMA_IMAGE_ID)?,
            panorama_title: optional_by_id(document, TOUR_PANORAMA_TITLE_ID),
            zoom_label: optional_by_id(document, TOUR_ZOOM_LABEL_ID),
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Exterior,
    Interior,
    Panorama,
}

pub struct TourRenderer {
    els: TourElements,
    document: web::Document,
    section: Option<Section>,
    stop_frame: Option<AssetId>,
    hotspot_floor: Option<FloorId>,
    panorama_room: Option<RoomId>,
    preload: Option<(AssetId, web::HtmlImageElement)>,
    _plan_error: Option<Listener>,
}

impl TourRenderer {
    pub fn new(els: TourElements, document: web::Document) -> Self {
        let plan = els.floor_plan.clone();
        let plan_error = Listener::new(&els.floor_plan, "error", move |_| {
            log::error!("[floor] failed to load plan image {}", plan.src());
        });
        Self {
            els,
            _plan_error: plan_error,
            document,
            section: None,
            stop_frame: None,
            hotspot_floor: None,
            panorama_room: None,
            preload: None,
        }
    }

    pub fn render(&mut self, tour: &Tour) {
        let section = match tour.mode() {
            Mode::Exterior { .. }
            | Mode::TransitioningVideo { .. }
            | Mode::TransitioningEntry { .. } => Section::Exterior,
            Mode::Interior { room: None, .. } | Mode::TransitioningExit { .. } => Section::Interior,
            Mode::Interior { room: Some(_), .. } => Section::Panorama,
        };
        if self.section != Some(section) {
            dom::set_visible(&self.els.exterior, section == Section::Exterior);
            dom::set_visible(&self.els.interior, section == Section::Interior);
            dom::set_visible(&self.els.panorama, section == Section::Panorama);
            self.section = Some(section);
        }
        match section {
            Section::Exterior => self.render_exterior(tour),
            Section::Interior => self.render_interior(tour),
            Section::Panorama => self.render_panorama(tour),
        }
        self.preload_stop_frame(tour);
        let transitioning = if tour.is_transitioning() { "1" } else { "0" };
        _ = self.els.root.set_attribute("data-transitioning", transitioning);
        overlay::apply(&self.els.overlay, tour.overlay_opacity());
    }

    /// Warms the image cache with the stop frame the running transition lands on.
    fn preload_stop_frame(&mut self, tour: &Tour) {
        let Some(asset) = tour.upcoming_stop_frame() else {
            return;
        };
        if matches!(&self.preload, Some((loaded, _)) if loaded == asset) {
            return;
        }
        match web::HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(asset.as_str());
                self.preload = Some((asset.clone(), img));
            }
            Err(e) => log::debug!("[segment] preload skipped: {:?}", e),
        }
    }

    fn render_exterior(&mut self, tour: &Tour) {
        let (idle, layers, video_visible) = match tour.mode() {
            Mode::TransitioningVideo { .. } => match tour.active_player() {
                Some(p) => (p.idle_frame().clone(), p.layers(), true),
                None => {
                    let idle = tour.stop_frame(tour.current_part()).clone();
                    (idle, LayerOrder::IdleFrameOnTop, false)
                }
            },
            Mode::TransitioningEntry { from } => {
                (tour.stop_frame(*from).clone(), LayerOrder::VideoOnTop, true)
            }
            Mode::Exterior { part } => {
                (tour.stop_frame(*part).clone(), LayerOrder::IdleFrameOnTop, false)
            }
            _ => return,
        };
        if self.stop_frame.as_ref() != Some(&idle) {
            self.els.stop_frame.set_src(idle.as_str());
            self.stop_frame = Some(idle);
        }
        let (idle_z, video_z) = match layers {
            LayerOrder::IdleFrameOnTop => (LAYER_Z_TOP, LAYER_Z_BOTTOM),
            LayerOrder::VideoOnTop => (LAYER_Z_BOTTOM, LAYER_Z_TOP),
        };
        dom::set_style(&self.els.stop_frame, "z-index", &idle_z.to_string());
        dom::set_style(&self.els.video, "z-index", &video_z.to_string());
        dom::set_visible(&self.els.video, video_visible);
        if let Some(label) = &self.els.part_label {
            dom::set_text(label, &format!("View {} of {}", tour.current_part(), PART_COUNT));
        }
    }

    fn render_interior(&mut self, tour: &Tour) {
        let Some(floor) = tour.displayed_floor() else {
            return;
        };
        if self.hotspot_floor.as_ref() != Some(&floor.id) {
            self.els.floor_plan.set_src(floor.plan_image.as_str());
            self.rebuild_hotspots(tour, &floor.id);
            if let Some(selector) = &self.els.floor_selector {
                dom::mark_active_child(selector, DATA_FLOOR, floor.id.as_str());
            }
            if let Some(label) = &self.els.floor_label {
                dom::set_text(label, &floor.name);
            }
            self.hotspot_floor = Some(floor.id.clone());
        }
        self.place_hotspots(tour);
    }

    fn rebuild_hotspots(&self, tour: &Tour, floor: &FloorId) {
        self.els.hotspots.set_inner_html("");
        let Ok(rooms) = tour.floors().rooms_for_floor(floor) else {
            return;
        };
        for room in rooms {
            let Ok(el) = self.document.create_element("button") else {
                continue;
            };
            _ = el.set_attribute(DATA_ROOM, room.id.as_str());
            _ = el.set_attribute("class", "tour-hotspot");
            _ = el.set_attribute("title", &room.name);
            _ = self.els.hotspots.append_child(&el);
        }
    }

    /// Anchors follow the displayed image box, not the viewport.
    fn place_hotspots(&self, tour: &Tour) {
        let Some(floor) = tour.displayed_floor() else {
            return;
        };
        let plan = &self.els.floor_plan;
        let natural = Vec2::new(plan.natural_width() as f32, plan.natural_height() as f32);
        let shown = Vec2::new(plan.client_width() as f32, plan.client_height() as f32);
        let offset = Vec2::new(plan.offset_left() as f32, plan.offset_top() as f32);
        let mut image = contain_fit(natural, shown);
        image.origin += offset;
        for room in &floor.rooms {
            let selector = format!("[{}=\"{}\"]", DATA_ROOM, room.id.as_str());
            let Ok(Some(el)) = self.els.hotspots.query_selector(&selector) else {
                continue;
            };
            let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let at = input::hotspot_offset(hotspot_anchor(room, image));
            dom::set_style(&el, "left", &format!("{:.1}px", at.x));
            dom::set_style(&el, "top", &format!("{:.1}px", at.y));
        }
    }

    fn render_panorama(&mut self, tour: &Tour) {
        let Some(room) = tour.open_room() else {
            return;
        };
        if self.panorama_room.as_ref() != Some(&room.id) {
            dom::set_style(
                &self.els.panorama_image,
                "background-image",
                &format!("url(\"{}\")", room.panorama.as_str()),
            );
            if let Some(title) = &self.els.panorama_title {
                dom::set_text(title, &room.name);
            }
            self.panorama_room = Some(room.id.clone());
        }
        let view = tour.panorama().view();
        let rotation = input::panorama_transform(view.rotation);
        dom::set_style(&self.els.panorama_image, "transform", &rotation);
        dom::set_style(&self.els.panorama, "transform", &input::zoom_transform(view.zoom));
        if let Some(label) = &self.els.zoom_label {
            dom::set_text(label, &input::zoom_label(view.zoom));
        }
    }
}

pub struct FramesElements {
    pub root: web::HtmlElement,
    pub image: web::HtmlImageElement,
    pub progress: Option<web::HtmlElement>,
    pub counter: Option<web::HtmlElement>,
    pub play: Option<web::HtmlElement>,
}

impl FramesElements {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            root: element_by_id(document, FRAMES_ROOT_ID)?,
            image: element_by_id(document, FRAMES_IMAGE_ID)?,
            progress: optional_by_id(document, FRAMES_PROGRESS_ID),
            counter: optional_by_id(document, FRAMES_COUNTER_ID),
            play: optional_by_id(document, FRAMES_PLAY_ID),
        })
    }
}

pub fn render_frames(
    els: &FramesElements,
    viewer: &FrameSequenceViewer,
    last_frame: &mut Option<usize>,
) {
    let frame = viewer.current_frame();
    if *last_frame != Some(frame) {
        els.image.set_src(viewer.current_asset().as_str());
        *last_frame = Some(frame);
    }
    dom::mark_active_child(&els.root, DATA_PART, &viewer.current_part().to_string());
    if let Some(p) = &els.progress {
        dom::set_style(p, "width", &input::progress_width(viewer.progress()));
    }
    if let Some(c) = &els.counter {
        dom::set_text(c, &format!("Frame {} / {}", frame + 1, viewer.scrubber().total()));
    }
    if let Some(b) = &els.play {
        _ = b.set_attribute("data-playing", if viewer.is_playing() { "1" } else { "0" });
    }
    _ = els
        .root
        .set_attribute("data-dragging", if viewer.is_dragging() { "1" } else { "0" });
}

pub struct ImageSetElements {
    pub root: web::HtmlElement,
    pub image: web::HtmlImageElement,
    pub progress: Option<web::HtmlElement>,
}

impl ImageSetElements {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            root: element_by_id(document, IMAGESET_ROOT_ID)?,
            image: element_by_id(document, IMAGESET_IMAGE_ID)?,
            progress: optional_by_id(document, IMAGESET_PROGRESS_ID),
        })
    }
}

pub fn render_imageset(
    els: &ImageSetElements,
    viewer: &ImageSetViewer,
    last_index: &mut Option<usize>,
) {
    let index = viewer.current_index();
    if *last_index != Some(index) {
        els.image.set_src(viewer.current_image().as_str());
        *last_index = Some(index);
    }
    if let Some(p) = &els.progress {
        dom::set_style(p, "width", &input::progress_width(viewer.progress()));
    }
    _ = els
        .root
        .set_attribute("data-dragging", if viewer.is_dragging() { "1" } else { "0" });
}
