#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod canvas;
mod dom;
mod events;
mod frame;
mod keys;
mod markup;
mod overlay;
mod tracker;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hud-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = app::App::start(document.clone())?;

    events::wire_buttons(&document, &app);
    events::wire_global_keydown(app.clone());
    events::wire_pagehide(app);
    Ok(())
}
