use crate::app::{App, SharedApp};
use crate::dom;
use crate::keys::{self, KeyAction};
use crate::markup::{LEGEND_TOGGLE_ID, RESET_BUTTON_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    let Some(action) = keys::action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleLegend => app.borrow().toggle_legend(),
        KeyAction::HideLegend => app.borrow().hide_legend(),
        KeyAction::ResetDemo => App::reset_demo(app),
    }
    ev.prevent_default();
}

pub fn wire_buttons(document: &web::Document, app: &SharedApp) {
    let app_reset = app.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        App::reset_demo(&app_reset);
    });
    let app_legend = app.clone();
    dom::add_click_listener(document, LEGEND_TOGGLE_ID, move || {
        app_legend.borrow().toggle_legend();
    });
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Stop the frame loop and pending boot timers when the page goes away.
pub fn wire_pagehide(app: SharedApp) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            log::info!("pagehide: shutting down");
            app.borrow_mut().shutdown();
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
