#![cfg(target_arch = "wasm32")]
use crate::audio::AudioResource;
use crate::core::Proposal;
use crate::frame::AppContext;
use crate::render::View;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod message;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let view = View::new(&document)?;
    let seed: u64 = rand::random();
    let started = Instant::now();
    let app = Rc::new(AppContext {
        proposal: RefCell::new(Proposal::new(started.elapsed(), seed)),
        audio: RefCell::new(AudioResource::new()),
        view: RefCell::new(view),
        started,
    });
    app.view.borrow().render_mute(app.audio.borrow().is_muted());
    log::info!("[proposal] seed={:#x}", seed);

    events::wire_input_handlers(&app, &document)?;
    frame::start_loop(app);
    Ok(())
}
