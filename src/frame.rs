use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_MS;

/// Per-viewer work done once per animation frame.
pub trait FrameContext {
    fn frame(&mut self, dt: Duration);
}

/// Wall-clock delta between frames, capped at `MAX_FRAME_DT_MS`.
pub struct FrameClock {
    last_instant: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
        }
    }

    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        dt.min(Duration::from_millis(MAX_FRAME_DT_MS))
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running requestAnimationFrame loop. Dropping it cancels the pending
/// frame and releases the self-referencing closure.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::debug!("[frames] animation loop stopped");
    }
}

fn request_frame(tick: &TickSlot, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("[frames] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop<F: FrameContext + 'static>(frame_ctx: Rc<RefCell<F>>) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let mut clock = FrameClock::new();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_clone.set(None);
        let dt = clock.delta();
        // a viewer borrowed by an in-flight event skips drawing for one frame
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(dt),
            Err(_) => log::debug!("[frames] context busy, frame skipped"),
        }
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    AnimationLoop { handle, tick }
}
