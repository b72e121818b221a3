#![cfg(target_arch = "wasm32")]
use ridges_core::{RidgeFactory, Transport, VisualizerSession};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod geo;
mod overlay;
mod render;

static STARTED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Everything a mounted visualizer owns, released by [`destroy`].
struct App {
    session: Rc<RefCell<VisualizerSession>>,
    deck: audio::AudioDeck,
    callback: frame::FrameCallback,
    frame_ctx: Rc<RefCell<Option<frame::FrameContext<'static>>>>,
    listeners: events::Listeners,
    canvas: web::HtmlCanvasElement,
    volume_hud: Rc<overlay::VolumeHud>,
    location_hud: overlay::LocationHud,
}

impl App {
    fn teardown(mut self) {
        self.session.borrow_mut().destroy();
        self.deck.stop();
        _ = self.deck.ctx.close();
        self.listeners.remove_all();
        self.volume_hud.remove();
        self.location_hud.remove();
        dom::detach(&self.canvas);
        // break the callback <-> session cycle
        *self.frame_ctx.borrow_mut() = None;
        *self.callback.borrow_mut() = None;
        log::info!("visualizer destroyed");
    }
}

fn now_ms(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ridges-web starting");

    // at most one live session per page
    if !STARTED.swap(true, Ordering::SeqCst) {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
                STARTED.store(false, Ordering::SeqCst);
            }
        });
    }
    Ok(())
}

/// Stop the frame loop and audio, unregister input and remove the overlays.
#[wasm_bindgen]
pub fn destroy() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.teardown();
        STARTED.store(false, Ordering::SeqCst);
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (container, mount) = dom::build_container(&document)?;
    let canvas = dom::create_canvas(&document, &mount)?;
    let volume_hud = Rc::new(overlay::VolumeHud::create(&document, &mount)?);
    let location_hud = overlay::LocationHud::create(&document, &mount)?;

    let deck = audio::build_deck()?;

    // A missing GPU leaves the loop and overlays running without drawing
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx: Rc<RefCell<Option<frame::FrameContext<'static>>>> = Rc::new(RefCell::new(None));
    let callback = frame::install_callback(frame_ctx.clone());
    let session = Rc::new(RefCell::new(VisualizerSession::init(
        now_ms(&window),
        Box::new(deck.sampler()),
        Box::new(frame::RafScheduler::new(callback.clone())),
        RidgeFactory::from_entropy(),
    )));
    let status = session.borrow().status();

    *frame_ctx.borrow_mut() = Some(frame::FrameContext {
        session: session.clone(),
        gpu,
        canvas: canvas.clone(),
        status,
        location_hud: location_hud.clone(),
    });

    let listeners = events::wire_input_handlers(&events::InputWiring {
        session: session.clone(),
        deck: deck.clone(),
        mount,
        container,
        canvas: canvas.clone(),
        volume_hud: volume_hud.clone(),
    });

    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            session,
            deck,
            callback,
            frame_ctx,
            listeners,
            canvas,
            volume_hud,
            location_hud,
        })
    });
    log::info!("visualizer mounted");
    Ok(())
}
