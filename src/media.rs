use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use tour_core::{AssetId, MediaElement, MediaError, MediaEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom::{Listener, Listeners};

/// Media notifications waiting for the next animation frame.
///
/// Every entry carries the load generation it was raised under; events from a
/// superseded load are discarded when drained.
#[derive(Default)]
pub struct MediaEventQueue {
    generation: Cell<u32>,
    events: RefCell<VecDeque<(u32, MediaEvent)>>,
}

impl MediaEventQueue {
    pub fn next_generation(&self) -> u32 {
        let g = self.generation.get().wrapping_add(1);
        self.generation.set(g);
        g
    }

    pub fn push(&self, generation: u32, event: MediaEvent) {
        self.events.borrow_mut().push_back((generation, event));
    }

    pub fn drain_current(&self) -> Vec<MediaEvent> {
        let current = self.generation.get();
        self.events
            .borrow_mut()
            .drain(..)
            .filter_map(|(g, ev)| (g == current).then_some(ev))
            .collect()
    }
}

pub struct HtmlVideoMedia {
    video: web::HtmlVideoElement,
    queue: Rc<MediaEventQueue>,
    listeners: Listeners,
}

impl HtmlVideoMedia {
    pub fn new(video: web::HtmlVideoElement, queue: Rc<MediaEventQueue>) -> Self {
        video.set_muted(true);
        _ = video.set_attribute("playsinline", "");
        video.set_preload("auto");
        Self {
            video,
            queue,
            listeners: Listeners::default(),
        }
    }

    fn listen(
        &mut self,
        generation: u32,
        event: &'static str,
        map: fn(&web::HtmlVideoElement) -> MediaEvent,
    ) {
        let queue = self.queue.clone();
        let video = self.video.clone();
        self.listeners.push(Listener::new(&self.video, event, move |_| {
            queue.push(generation, map(&video));
        }));
    }
}

impl MediaElement for HtmlVideoMedia {
    fn load(&mut self, asset: &AssetId) {
        self.listeners.clear();
        let generation = self.queue.next_generation();
        self.listen(generation, "loadeddata", |_| MediaEvent::LoadedData);
        self.listen(generation, "seeked", |_| MediaEvent::Seeked);
        self.listen(generation, "timeupdate", |v| MediaEvent::TimeUpdate {
            current_time: v.current_time(),
            duration: v.duration(),
        });
        self.listen(generation, "ended", |_| MediaEvent::Ended);
        self.listen(generation, "error", |v| {
            let reason = v
                .error()
                .map(|e| format!("code {}", e.code()))
                .unwrap_or_else(|| "unknown".to_string());
            MediaEvent::Failed(reason)
        });
        self.video.set_src(asset.as_str());
        self.video.load();
    }

    fn seek(&mut self, time_sec: f64) {
        self.video.set_current_time(time_sec);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let promise = self
            .video
            .play()
            .map_err(|e| MediaError::AutoplayRejected(format!("{:?}", e)))?;
        let queue = self.queue.clone();
        let generation = self.queue.generation.get();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let reason = e
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
                    .unwrap_or_else(|| format!("{:?}", e));
                queue.push(generation, MediaEvent::PlayRejected(reason));
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        _ = self.video.pause();
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
