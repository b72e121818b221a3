//! Geolocation and reverse-geocode lookup.
//!
//! Fire-and-forget: results land in the session's [`StatusSlot`] and the
//! frame loop copies them onto the overlay. Nothing here touches geometry.

use ridges_core::{
    reverse_geocode_url, BackgroundTint, GeocodeError, GeocodeResponse, LocationStatus,
    StatusSlot, GEOLOCATION_MAX_AGE_MS, GEOLOCATION_TIMEOUT_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> GeocodeError {
    GeocodeError::Network(format!("{:?}", e))
}

fn coord(position: &JsValue, field: &str) -> Option<f64> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    js_sys::Reflect::get(&coords, &JsValue::from_str(field))
        .ok()?
        .as_f64()
}

pub fn request_location(status: StatusSlot, container: web::HtmlElement) {
    let Some(window) = web::window() else {
        return;
    };
    let geolocation = match window.navigator().geolocation() {
        Ok(g) => g,
        Err(_) => {
            status.publish(LocationStatus::Unavailable);
            return;
        }
    };

    let status_ok = status.clone();
    let on_position = Closure::wrap(Box::new(move |position: JsValue| {
        let (Some(latitude), Some(longitude)) =
            (coord(&position, "latitude"), coord(&position, "longitude"))
        else {
            status_ok.publish(LocationStatus::Unavailable);
            return;
        };
        log::info!("[location] lat={:.4} lon={:.4}", latitude, longitude);
        status_ok.publish(LocationStatus::Resolving {
            latitude,
            longitude,
        });
        let tint = BackgroundTint::from_coords(latitude, longitude);
        _ = container.style().set_property("background", &tint.css());

        let status_lookup = status_ok.clone();
        spawn_local(async move {
            let result = reverse_geocode(latitude, longitude).await;
            status_lookup.publish(LocationStatus::from_lookup(result));
        });
    }) as Box<dyn FnMut(JsValue)>);

    let status_err = status.clone();
    let on_error = Closure::wrap(Box::new(move |err: JsValue| {
        log::warn!("[location] denied: {:?}", err);
        status_err.publish(LocationStatus::Denied);
    }) as Box<dyn FnMut(JsValue)>);

    let options = web::PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);
    options.set_maximum_age(GEOLOCATION_MAX_AGE_MS);

    if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
        on_position.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
        &options,
    ) {
        log::error!("[location] getCurrentPosition error: {:?}", e);
        status.publish(LocationStatus::Unavailable);
    }
    // one of the two callbacks fires once; both must outlive this call
    on_position.forget();
    on_error.forget();
}

async fn reverse_geocode(latitude: f64, longitude: f64) -> Result<GeocodeResponse, GeocodeError> {
    let window = web::window().ok_or_else(|| GeocodeError::Network("no window".into()))?;
    let language = window
        .navigator()
        .language()
        .unwrap_or_else(|| "en".to_string());

    let headers = web::Headers::new().map_err(js_err)?;
    headers.set("Accept-Language", &language).map_err(js_err)?;
    let init = web::RequestInit::new();
    init.set_method("GET");
    init.set_mode(web::RequestMode::Cors);
    init.set_headers(&headers);

    let url = reverse_geocode_url(latitude, longitude);
    let request = web::Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        return Err(GeocodeError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    GeocodeResponse::parse(&body)
}
