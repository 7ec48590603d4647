#![cfg(target_arch = "wasm32")]
use tour_core::TransitionOrchestrator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod fullscreen;
mod input;
mod keymap;
mod media;
mod mount;
mod overlay;
mod render;

pub(crate) type Tour = TransitionOrchestrator<media::HtmlVideoMedia>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tour-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    mount::mount(&document)
}

/// Detach the mounted viewer from the page. Safe to call from any callback.
#[wasm_bindgen]
pub fn unmount() {
    mount::request_unmount();
}
