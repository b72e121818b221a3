// Host-side tests for location tint, reverse-geocode URL and label selection.

use ridges_core::*;

#[test]
fn tint_spans_thirty_to_eighty() {
    assert_eq!(BackgroundTint::from_coords(0.0, 0.0), BackgroundTint { r: 30, b: 30 });
    assert_eq!(BackgroundTint::from_coords(90.0, 180.0), BackgroundTint { r: 80, b: 80 });
    assert_eq!(BackgroundTint::from_coords(-90.0, -180.0), BackgroundTint { r: 80, b: 80 });
    // 45° -> 30 + 25 = 55; 36° lon -> 30 + 10 = 40
    assert_eq!(BackgroundTint::from_coords(45.0, 36.0), BackgroundTint { r: 55, b: 40 });
}

#[test]
fn tint_floors_fractional_channels() {
    // 59.91 / 90 * 50 = 33.28 -> 63
    let tint = BackgroundTint::from_coords(59.91, 10.75);
    assert_eq!(tint.r, 63);
    assert_eq!(tint.b, 32);
    assert_eq!(tint.css(), "rgba(63, 0, 32, 0.9)");
}

#[test]
fn reverse_geocode_url_has_expected_query() {
    let url = reverse_geocode_url(51.5, -0.12);
    assert!(url.starts_with("https://nominatim.openstreetmap.org/reverse?"));
    assert!(url.contains("format=jsonv2"));
    assert!(url.contains("lat=51.5"));
    assert!(url.contains("lon=-0.12"));
    assert!(url.contains("zoom=10"));
    assert!(url.contains("addressdetails=1"));
}

#[test]
fn label_joins_city_state_country() {
    let body = r#"{
        "display_name": "Somewhere long",
        "address": {"city": "Manchester", "state": "England", "country": "United Kingdom"}
    }"#;
    let resp = GeocodeResponse::parse(body).unwrap();
    assert_eq!(resp.place_label(), "Manchester, England, United Kingdom");
}

#[test]
fn label_falls_back_through_place_kinds() {
    let body = r#"{"address": {"village": "Lerum", "region": "Västra Götaland", "country": ""}}"#;
    let resp = GeocodeResponse::parse(body).unwrap();
    assert_eq!(resp.place_label(), "Lerum, Västra Götaland");

    let body = r#"{"address": {"hamlet": "", "suburb": "Kreuzberg"}}"#;
    let resp = GeocodeResponse::parse(body).unwrap();
    assert_eq!(resp.place_label(), "Kreuzberg");
}

#[test]
fn label_uses_display_name_then_generic_text() {
    let resp = GeocodeResponse::parse(r#"{"address": {}, "display_name": "Open Sea"}"#).unwrap();
    assert_eq!(resp.place_label(), "Open Sea");
    let resp = GeocodeResponse::parse(r#"{"error": "Unable to geocode"}"#).unwrap();
    assert_eq!(resp.place_label(), "Location resolved");
}

#[test]
fn malformed_body_is_a_decode_error() {
    let err = GeocodeResponse::parse("<html>rate limited</html>").unwrap_err();
    assert!(matches!(err, GeocodeError::Decode(_)));
    assert_eq!(
        LocationStatus::from_lookup(Err(err)).to_string(),
        "Could not resolve place name"
    );
}

#[test]
fn status_texts() {
    assert_eq!(LocationStatus::Unavailable.to_string(), "Location not available");
    assert_eq!(LocationStatus::Denied.to_string(), "Location denied");
    let resolving = LocationStatus::Resolving {
        latitude: 40.712776,
        longitude: -74.005974,
    };
    assert_eq!(
        resolving.to_string(),
        "Lat: 40.7128, Lon: -74.0060 — resolving…"
    );
    assert_eq!(
        LocationStatus::from_lookup(Err(GeocodeError::Status(429))).to_string(),
        "Could not resolve place name"
    );
}

#[test]
fn status_slot_keeps_only_the_latest() {
    let slot = StatusSlot::new();
    assert_eq!(slot.take(), None);
    slot.publish(LocationStatus::Resolving {
        latitude: 1.0,
        longitude: 2.0,
    });
    slot.publish(LocationStatus::Resolved("Quito, Ecuador".into()));
    assert_eq!(slot.take(), Some(LocationStatus::Resolved("Quito, Ecuador".into())));
    assert_eq!(slot.take(), None);

    let reader = slot.clone();
    slot.close();
    assert!(reader.is_closed());
    assert!(!slot.publish(LocationStatus::Denied));
}
