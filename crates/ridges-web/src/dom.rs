use ridges_core::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

const CONTAINER_CSS: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
    z-index: 1000; background: rgba(0, 0, 0, 0.9); cursor: pointer; display: flex; \
    flex-direction: column; justify-content: center; align-items: center;";
const MOUNT_CSS: &str =
    "width: 100%; height: 100%; display: flex; justify-content: center; align-items: center;";
const CANVAS_CSS: &str = "width: 100%; height: 100%; display: block;";

pub fn create_div(document: &web::Document, id: &str, css: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div #{}: {:?}", id, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_id(id);
    el.style().set_css_text(css);
    Ok(el)
}

/// Full-viewport container holding the mount element the visualizer draws into.
pub fn build_container(document: &web::Document) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let container = create_div(document, "visualizer-container", CONTAINER_CSS)?;
    let mount = create_div(document, "canvas-container", MOUNT_CSS)?;
    _ = container.append_child(&mount);
    _ = body.append_child(&container);
    Ok((container, mount))
}

pub fn create_canvas(document: &web::Document, mount: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.style().set_css_text(CANVAS_CSS);
    _ = mount.append_child(&canvas);
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

/// Keep the canvas backing store at CSS size times the (capped) pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn detach(el: &web::Element) {
    if let Some(parent) = el.parent_node() {
        _ = parent.remove_child(el);
    }
}
