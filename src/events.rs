use crate::constants::*;
use crate::dom;
use crate::frame::AppContext;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(app: &Rc<AppContext>, document: &web::Document) -> anyhow::Result<()> {
    wire_pointermove(app);
    wire_control_touch(app);
    wire_buttons(app, document)?;
    wire_pagehide(app);
    Ok(())
}

fn wire_pagehide(app: &Rc<AppContext>) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        app.audio.borrow_mut().teardown();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(app: &Rc<AppContext>) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let viewport = dom::viewport();
        let rect = dom::bounding_rect(&app.view.borrow().no_button);
        app.with_proposal(|p, now, cues| p.pointer_moved(now, pointer, viewport, Some(&rect), cues));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Covers pointers that land on the control without approaching it first.
fn wire_control_touch(app: &Rc<AppContext>) {
    let no_button = app.view.borrow().no_button.clone();
    for event in ["pointerenter", "touchstart"] {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            app.with_proposal(|p, now, cues| p.control_touched(now, cues));
        }) as Box<dyn FnMut(_)>);
        _ = no_button.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_buttons(app: &Rc<AppContext>, document: &web::Document) -> anyhow::Result<()> {
    // Any click counts as the user gesture that unlocks audio.
    let root = dom::html_element(document, APP_ROOT_ID)?;
    let app_root = app.clone();
    dom::add_click_listener(&root, move |_| app_root.audio.borrow_mut().init_music());

    let yes = dom::html_element(document, YES_BUTTON_ID)?;
    let app_yes = app.clone();
    dom::add_click_listener(&yes, move |_| {
        app_yes.with_proposal(|p, now, cues| p.accept(now, cues));
    });

    let again = dom::html_element(document, ASK_AGAIN_ID)?;
    let app_again = app.clone();
    dom::add_click_listener(&again, move |_| {
        app_again.with_proposal(|p, now, _| p.ask_again(now));
    });

    let seal = dom::html_element(document, WAX_SEAL_ID)?;
    let app_seal = app.clone();
    dom::add_click_listener(&seal, move |_| {
        app_seal.with_proposal(|p, _, cues| p.seal_clicked(cues));
    });

    let mute = dom::html_element(document, MUTE_BUTTON_ID)?;
    let app_mute = app.clone();
    dom::add_click_listener(&mute, move |ev| {
        ev.stop_propagation();
        let muted = app_mute.audio.borrow_mut().toggle_mute();
        app_mute.view.borrow().render_mute(muted);
    });
    Ok(())
}
