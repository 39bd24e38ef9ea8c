use crate::constants::{CLOSE_BUTTON_ID, RESET_BUTTON_ID};
use crate::core::GlobeState;
use crate::dom;
use crate::frame::Clock;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reset flies home and hides the panel; close only hides the panel.
pub fn wire_controls(document: &web::Document, globe: Rc<RefCell<GlobeState>>, clock: Clock) {
    let globe_reset = globe.clone();
    let doc_reset = document.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        globe_reset.borrow_mut().reset(clock.elapsed());
        overlay::hide(&doc_reset);
        log::info!("[controls] reset view");
    });

    let doc_close = document.clone();
    dom::add_click_listener(document, CLOSE_BUTTON_ID, move || {
        globe.borrow_mut().close();
        overlay::hide(&doc_close);
    });
}

/// Keep the canvas backing store and camera aspect in step with layout.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, globe: Rc<RefCell<GlobeState>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        globe
            .borrow_mut()
            .camera
            .set_aspect(dom::canvas_aspect(&canvas_resize));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
