use crate::audio::AudioDeck;
use crate::dom;
use crate::geo;
use crate::overlay::VolumeHud;
use ridges_core::VisualizerSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Registered DOM listeners, kept so teardown can unregister them.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::error!("[events] {} listener error: {:?}", kind, e);
            return;
        }
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn remove_all(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub session: Rc<RefCell<VisualizerSession>>,
    pub deck: AudioDeck,
    pub mount: web::HtmlElement,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub volume_hud: Rc<VolumeHud>,
}

pub fn wire_input_handlers(w: &InputWiring) -> Listeners {
    let mut listeners = Listeners::default();
    let Some(window) = web::window() else {
        return listeners;
    };

    // click: play/pause
    {
        let session = w.session.clone();
        let mut deck = w.deck.clone();
        listeners.add(&w.mount, "click", true, move |_ev| {
            session.borrow_mut().on_click(&mut deck);
        });
    }

    // wheel: volume, without scrolling the page
    {
        let session = w.session.clone();
        let mut deck = w.deck.clone();
        let hud = w.volume_hud.clone();
        listeners.add(&w.mount, "wheel", false, move |ev| {
            ev.prevent_default();
            let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            let volume = session.borrow_mut().on_wheel(wheel.delta_y(), &mut deck);
            hud.show(&volume.label());
        });
    }

    // keydown: one-shot location lookup
    {
        let session = w.session.clone();
        let container = w.container.clone();
        listeners.add(&window, "keydown", false, move |ev| {
            let Some(key) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            let (fire, status) = {
                let mut s = session.borrow_mut();
                (s.on_key(&key.code()), s.status())
            };
            if fire {
                ev.prevent_default();
                geo::request_location(status, container.clone());
            }
        });
    }

    // resize: keep the canvas backing store in sync
    {
        let canvas = w.canvas.clone();
        listeners.add(&window, "resize", true, move |_ev| {
            dom::sync_canvas_backing_size(&canvas);
        });
    }

    listeners
}
