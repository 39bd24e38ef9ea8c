use crate::core::{ClickOutcome, GlobeState};
use crate::frame::Clock;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub globe: Rc<RefCell<GlobeState>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    pub clock: Clock,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_click(&w);
}

fn listen<E: FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        w.pointer.borrow_mut().ndc = input::pointer_ndc(&ev, &w.canvas);

        let mut ds = w.drag_state.borrow_mut();
        if ds.active && ds.pointer_id == ev.pointer_id() {
            let pos = input::pointer_client(&ev);
            let delta = pos - ds.last;
            ds.last = pos;
            let viewport_h = w.canvas.client_height() as f32;
            w.globe
                .borrow_mut()
                .controls
                .rotate_by_pixels(delta.x, delta.y, viewport_h);
        }
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerleave", move |_ev: web::PointerEvent| {
        w.pointer.borrow_mut().ndc = None;
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        {
            let mut ds = w.drag_state.borrow_mut();
            ds.active = true;
            ds.pointer_id = ev.pointer_id();
            ds.last = input::pointer_client(&ev);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let end_drag = move |ev: web::PointerEvent| {
        let mut ds = w.drag_state.borrow_mut();
        if ds.active && ds.pointer_id == ev.pointer_id() {
            ds.active = false;
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    };
    let end_cancel = end_drag.clone();
    listen(&canvas, "pointerup", end_drag);
    listen(&canvas, "pointercancel", end_cancel);
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "wheel", move |ev: web::WheelEvent| {
        w.globe.borrow_mut().controls.dolly(ev.delta_y() as f32);
        ev.prevent_default();
    });
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "click", move |_ev: web::MouseEvent| {
        let now = w.clock.elapsed();
        let mut globe = w.globe.borrow_mut();
        match globe.click(now) {
            ClickOutcome::Selected(i) => {
                if let Some(spot) = globe.selected_spot() {
                    log::info!("[click] beacon {} -> {}", i, spot.name);
                    overlay::show_spot(&w.document, spot);
                }
            }
            ClickOutcome::Dismissed => overlay::hide(&w.document),
        }
    });
}
