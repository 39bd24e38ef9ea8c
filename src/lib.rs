#![cfg(target_arch = "wasm32")]
use crate::core::{resolve_spots, GlobeConfig, GlobeState, Spot};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod data;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot();
    }
    Ok(())
}

/// The page-global spot array is read here, once, and handed to
/// [`bootstrap`] as an explicit input.
fn boot() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let inline = web::window().and_then(|w| data::inline_spots(&w));
    spawn_local(async move {
        if let Err(e) = bootstrap(inline).await {
            log::error!("Globe initialization failed: {:?}", e);
        }
    });
}

async fn bootstrap(inline_spots: Option<Vec<Spot>>) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = dom::ensure_container(&document)?;
    let config = GlobeConfig::from_attributes(|name| container.get_attribute(name));
    let spots = resolve_spots(inline_spots, config.spots_url.as_deref(), data::fetch_spots).await;
    log::info!("[init] {} spots, title {:?}", spots.len(), config.title);

    let canvas = dom::create_canvas(&document, &container)?;
    let gpu = frame::init_gpu(&canvas, spots.len()).await?;

    overlay::inject(&document, &config)?;

    let clock = frame::Clock::start();
    let globe = Rc::new(RefCell::new(GlobeState::new(
        spots,
        dom::canvas_aspect(&canvas),
    )));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));
    let pending_images: render::textures::PendingImages = Rc::new(RefCell::new(Vec::new()));
    render::textures::spawn_loads(pending_images.clone());

    events::wire_resize(&canvas, globe.clone());
    events::wire_controls(&document, globe.clone(), clock);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        globe: globe.clone(),
        pointer: pointer.clone(),
        drag_state,
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        globe,
        pointer,
        canvas,
        document,
        gpu,
        pending_images,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
