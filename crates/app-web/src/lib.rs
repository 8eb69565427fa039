#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod dom;
mod overlay;
mod player;
mod timers;
mod tracker;
mod view;

pub use tracker::FaceWindow;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stagecraft-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Either front end may be on the page; the parallax window is constructed
    // from JS once the detector glue is loaded.
    if document.get_element_by_id(constants::TEXT_CONTENT_ID).is_some() {
        player::wire(&document)?;
    }
    Ok(())
}
