use crate::dom;
use ridges_core::{LocationStatus, VOLUME_HUD_FADE_MS};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const VOLUME_HUD_CSS: &str = "position: absolute; top: 20px; right: 20px; \
    background: rgba(0,0,0,0.6); color: #fff; padding: 8px 12px; border-radius: 8px; \
    font-family: Arial, sans-serif; font-size: 14px; pointer-events: none; opacity: 0; \
    transition: opacity 150ms ease-in-out;";
const LOCATION_HUD_CSS: &str = "position: absolute; bottom: 20px; left: 20px; \
    background: rgba(0,0,0,0.6); color: #fff; padding: 6px 10px; border-radius: 8px; \
    font-family: Arial, sans-serif; font-size: 12px; pointer-events: none; opacity: 0.85;";

/// Transient "Volume: NN%" badge that fades out after the last change.
pub struct VolumeHud {
    el: web::HtmlElement,
    timeout_id: Rc<Cell<Option<i32>>>,
    fade: Closure<dyn FnMut()>,
}

impl VolumeHud {
    pub fn create(document: &web::Document, mount: &web::HtmlElement) -> anyhow::Result<Self> {
        let el = dom::create_div(document, "volume-hud", VOLUME_HUD_CSS)?;
        _ = mount.append_child(&el);
        let timeout_id = Rc::new(Cell::new(None));
        let fade_el = el.clone();
        let fade_id = timeout_id.clone();
        let fade = Closure::wrap(Box::new(move || {
            _ = fade_el.style().set_property("opacity", "0");
            fade_id.set(None);
        }) as Box<dyn FnMut()>);
        Ok(Self {
            el,
            timeout_id,
            fade,
        })
    }

    pub fn show(&self, text: &str) {
        self.el.set_text_content(Some(text));
        _ = self.el.style().set_property("opacity", "1");
        let Some(window) = web::window() else {
            return;
        };
        if let Some(id) = self.timeout_id.take() {
            window.clear_timeout_with_handle(id);
        }
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.fade.as_ref().unchecked_ref(),
            VOLUME_HUD_FADE_MS,
        ) {
            Ok(id) => self.timeout_id.set(Some(id)),
            Err(e) => log::warn!("[hud] fade timer error: {:?}", e),
        }
    }

    pub fn remove(&self) {
        if let (Some(window), Some(id)) = (web::window(), self.timeout_id.take()) {
            window.clear_timeout_with_handle(id);
        }
        dom::detach(&self.el);
    }
}

/// Bottom-left status line for the location lookup.
#[derive(Clone)]
pub struct LocationHud {
    el: web::HtmlElement,
}

impl LocationHud {
    pub fn create(document: &web::Document, mount: &web::HtmlElement) -> anyhow::Result<Self> {
        let el = dom::create_div(document, "location-hud", LOCATION_HUD_CSS)?;
        _ = mount.append_child(&el);
        Ok(Self { el })
    }

    pub fn update(&self, status: &LocationStatus) {
        self.el.set_text_content(Some(&status.to_string()));
    }

    pub fn remove(&self) {
        dom::detach(&self.el);
    }
}
