use crate::core::GlobeState;
use crate::dom;
use crate::input;
use crate::render;
use crate::render::textures::PendingImages;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Seconds since the widget started; shared by the loop and event handlers.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

pub struct FrameContext<'a> {
    pub globe: Rc<RefCell<GlobeState>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: render::GpuState<'a>,
    pub pending_images: PendingImages,
    pub clock: Clock,
}

impl<'a> FrameContext<'a> {
    /// Pulse, billboard, hit-test, damping, render; in that order.
    pub fn frame(&mut self) {
        let now = self.clock.elapsed();
        let ndc = self.pointer.borrow().ndc;

        let out = self.globe.borrow_mut().tick(now, ndc);
        if let Some(cursor) = out.cursor {
            dom::set_body_cursor(&self.document, cursor.css());
        }

        for (slot, bitmap) in self.pending_images.borrow_mut().drain(..) {
            self.gpu.upload_texture(slot, bitmap);
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&self.globe.borrow()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    beacon_count: usize,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, beacon_count).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
