use crate::overlay::LocationHud;
use crate::render;
use ridges_core::{FrameScheduler, StatusSlot, TickHandle, VisualizerSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind the core's scheduling seam.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_tick(&mut self) -> Option<TickHandle> {
        let window = web::window()?;
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(TickHandle(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle.0);
        }
    }
}

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<VisualizerSession>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub status: StatusSlot,
    pub location_hud: LocationHud,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self, now: f64) {
        let outcome = self.session.borrow_mut().frame(now);
        if outcome.retired > 0 {
            log::debug!("[frame] speed={:.3} retired={}", outcome.speed, outcome.retired);
        }

        if let Some(status) = self.status.take() {
            self.location_hud.update(&status);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let session = self.session.borrow();
            if let Err(e) = g.render(session.field()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Frame callback that forwards every animation frame into `frame_ctx` once
/// it has been filled in. The session's scheduler re-arms it.
pub fn install_callback(
    frame_ctx: Rc<RefCell<Option<FrameContext<'static>>>>,
) -> FrameCallback {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if let Some(ctx) = frame_ctx.borrow_mut().as_mut() {
            ctx.frame(now);
        }
    }) as Box<dyn FnMut(f64)>));
    callback
}
