//! Location-tinted background and reverse-geocode status.
//!
//! Acquisition and the network request live in the frontend; this module
//! holds the policy: how coordinates tint the background, which URL is
//! queried, how a reverse-geocode response becomes a label, and the
//! single-slot sink the overlay reads from.

use crate::constants::{REVERSE_GEOCODE_ENDPOINT, REVERSE_GEOCODE_ZOOM};
use serde::Deserialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("reverse geocode failed with HTTP status {0}")]
    Status(u16),
    #[error("reverse geocode request failed: {0}")]
    Network(String),
    #[error("reverse geocode response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Container background derived from the user's coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundTint {
    pub r: u8,
    pub b: u8,
}

impl BackgroundTint {
    /// Red tracks |latitude| and blue tracks |longitude|, both within 30..=80.
    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        let r = (30.0 + (latitude.abs() / 90.0) * 50.0).floor();
        let b = (30.0 + (longitude.abs() / 180.0) * 50.0).floor();
        Self {
            r: r.clamp(0.0, 255.0) as u8,
            b: b.clamp(0.0, 255.0) as u8,
        }
    }

    pub fn css(self) -> String {
        format!("rgba({}, 0, {}, 0.9)", self.r, self.b)
    }
}

/// Nominatim reverse lookup URL for the given coordinates.
pub fn reverse_geocode_url(latitude: f64, longitude: f64) -> String {
    format!(
        "{}?format=jsonv2&lat={}&lon={}&zoom={}&addressdetails=1",
        REVERSE_GEOCODE_ENDPOINT, latitude, longitude, REVERSE_GEOCODE_ZOOM
    )
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub suburb: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub display_name: Option<String>,
}

fn first_non_empty<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
}

impl GeocodeResponse {
    pub fn parse(body: &str) -> Result<Self, GeocodeError> {
        Ok(serde_json::from_str(body)?)
    }

    /// "City, State, Country" from whatever parts are present, falling back
    /// to the display name.
    pub fn place_label(&self) -> String {
        let addr = self.address.clone().unwrap_or_default();
        let place = first_non_empty(&[
            &addr.city,
            &addr.town,
            &addr.village,
            &addr.hamlet,
            &addr.suburb,
        ]);
        let state = first_non_empty(&[&addr.state, &addr.region]);
        let country = first_non_empty(&[&addr.country]);
        let parts: Vec<&str> = [place, state, country].into_iter().flatten().collect();
        if !parts.is_empty() {
            return parts.join(", ");
        }
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "Location resolved".to_string(),
        }
    }
}

/// What the location overlay currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationStatus {
    Unavailable,
    Denied,
    Resolving { latitude: f64, longitude: f64 },
    Resolved(String),
    Unresolved,
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationStatus::Unavailable => f.write_str("Location not available"),
            LocationStatus::Denied => f.write_str("Location denied"),
            LocationStatus::Resolving {
                latitude,
                longitude,
            } => write!(f, "Lat: {latitude:.4}, Lon: {longitude:.4} — resolving…"),
            LocationStatus::Resolved(label) => f.write_str(label),
            LocationStatus::Unresolved => f.write_str("Could not resolve place name"),
        }
    }
}

impl LocationStatus {
    pub fn from_lookup(result: Result<GeocodeResponse, GeocodeError>) -> Self {
        match result {
            Ok(resp) => LocationStatus::Resolved(resp.place_label()),
            Err(e) => {
                log::warn!("[location] {}", e);
                LocationStatus::Unresolved
            }
        }
    }
}

#[derive(Debug, Default)]
struct SlotState {
    latest: Option<LocationStatus>,
    closed: bool,
}

/// Single-slot "latest status" sink shared between the lookup task and the
/// overlay. Newer statuses overwrite older unread ones; once closed, every
/// publish is discarded.
#[derive(Clone, Debug, Default)]
pub struct StatusSlot {
    inner: Rc<RefCell<SlotState>>,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the slot has been closed and the status dropped.
    pub fn publish(&self, status: LocationStatus) -> bool {
        let mut state = self.inner.borrow_mut();
        if state.closed {
            log::debug!("[location] discarding late status: {}", status);
            return false;
        }
        state.latest = Some(status);
        true
    }

    pub fn take(&self) -> Option<LocationStatus> {
        self.inner.borrow_mut().latest.take()
    }

    pub fn close(&self) {
        let mut state = self.inner.borrow_mut();
        state.closed = true;
        state.latest = None;
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }
}
