use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use carbon_tracker::api::rest::{cors_layer, router};
use carbon_tracker::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

fn setup() -> axum::Router {
    router(Arc::new(AppState::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = setup().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["locations"], 6);
    assert_eq!(body["travel_modes"], 5);
}

#[tokio::test]
async fn list_locations_returns_presets_in_order() {
    let response = setup().oneshot(get_request("/locations")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let locations = body.as_array().unwrap();
    assert_eq!(locations.len(), 6);
    assert_eq!(locations[0]["name"], "นิมมานเหมินทร์");
    assert_eq!(locations[0]["coordinate"]["lat"], 18.8022);
    assert_eq!(locations[0]["coordinate"]["lng"], 98.9525);
}

#[tokio::test]
async fn get_location_by_encoded_name() {
    // ดอยสุเทพ
    let uri = "/locations/%E0%B8%94%E0%B8%AD%E0%B8%A2%E0%B8%AA%E0%B8%B8%E0%B9%80%E0%B8%97%E0%B8%9E";
    let response = setup().oneshot(get_request(uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "ดอยสุเทพ");
    assert_eq!(body["coordinate"]["lat"], 18.8048);
}

#[tokio::test]
async fn get_unknown_location_returns_404() {
    let response = setup()
        .oneshot(get_request("/locations/Bangkok"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Bangkok"));
}

#[tokio::test]
async fn travel_modes_expose_fixed_tables() {
    let response = setup().oneshot(get_request("/travel-modes")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let modes = body.as_array().unwrap();
    assert_eq!(modes.len(), 5);
    assert_eq!(modes[0]["mode"], "walking");
    assert_eq!(modes[0]["green_points"], 100);
    assert_eq!(modes[4]["mode"], "driving");
    assert_eq!(modes[4]["emission_factor_kg_per_km"], 0.21);
    assert_eq!(modes[4]["label"], "รถยนต์");
}

#[tokio::test]
async fn footprint_between_presets_by_car() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint",
            json!({
                "start": "นิมมานเหมินทร์",
                "end": "ประตูท่าแพ",
                "travel_mode": "driving"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["start"]["name"], "นิมมานเหมินทร์");
    assert_eq!(body["end"]["name"], "ประตูท่าแพ");
    assert_eq!(body["result"]["travel_mode"], "driving");
    assert_eq!(body["result"]["green_points"], 25);
    assert_eq!(body["result"]["recommendations"].as_array().unwrap().len(), 2);

    let distance = body["result"]["distance_km"].as_f64().unwrap();
    let grams = body["result"]["carbon_footprint_grams"].as_f64().unwrap();
    assert!((4.80..=4.83).contains(&distance));
    assert!((grams - distance * 210.0).abs() < 1e-6);

    let tree_years = body["impact"]["tree_years"].as_f64().unwrap();
    assert!((tree_years - grams / 22_000.0).abs() < 1e-12);
    assert!(body["id"].as_str().unwrap().len() > 0);
    assert!(body["calculated_at"].is_string());
}

#[tokio::test]
async fn footprint_accepts_points_and_text_coordinates() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint",
            json!({
                "start": { "lat": 18.8022, "lng": 98.9525 },
                "end": "18.8041, 98.9767",
                "travel_mode": "walking"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["start"]["name"], "18.8022, 98.9525");
    assert_eq!(body["result"]["carbon_footprint_grams"], 0.0);
    assert_eq!(body["result"]["green_points"], 100);
    assert_eq!(body["result"]["recommendations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_travel_mode_falls_back_to_driving() {
    let app = router(Arc::new(AppState::new()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/footprint",
            json!({
                "start": "ตลาดวโรรส",
                "end": "ดอยสุเทพ",
                "travel_mode": "hoverboard"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"]["travel_mode"], "driving");
    assert_eq!(body["result"]["green_points"], 25);
    assert_eq!(body["result"]["recommendations"], json!([]));
    assert_eq!(body["result"]["requested_mode"], "hoverboard");

    let metrics = body_string(app.oneshot(get_request("/metrics")).await.unwrap()).await;
    assert!(metrics.contains("mode_fallbacks_total 1"));
}

#[tokio::test]
async fn malformed_coordinate_text_returns_400() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint",
            json!({
                "start": "18.8022",
                "end": "ประตูท่าแพ",
                "travel_mode": "transit"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("invalid coordinate"));
}

#[tokio::test]
async fn out_of_range_point_returns_400() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/distance",
            json!({
                "start": { "lat": 95.0, "lng": 98.9525 },
                "end": "ประตูท่าแพ"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn distance_between_same_preset_is_zero() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/distance",
            json!({
                "start": "สนามบินเชียงใหม่",
                "end": "สนามบินเชียงใหม่"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["distance_km"].as_f64().unwrap() < 1e-9);
}

#[tokio::test]
async fn estimate_short_transit_trip() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 1.5, "travel_mode": "transit" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["green_points"], 60);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
    assert!((body["carbon_footprint_grams"].as_f64().unwrap() - 180.0).abs() < 1e-9);
}

#[tokio::test]
async fn estimate_rejects_negative_distance() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": -1.0, "travel_mode": "driving" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn estimate_unknown_mode_short_trip_has_no_advice() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 1.5, "travel_mode": "hoverboard" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["travel_mode"], "driving");
    assert_eq!(body["green_points"], 25);
    assert_eq!(body["recommendations"], json!([]));
    assert!((body["carbon_footprint_grams"].as_f64().unwrap() - 315.0).abs() < 1e-9);
}

#[tokio::test]
async fn estimate_known_mode_omits_requested_mode() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 1.5, "travel_mode": "driving" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    assert!(body.get("requested_mode").is_none());
}

#[tokio::test]
async fn estimate_rejects_distance_beyond_half_the_globe() {
    let app = router(Arc::new(AppState::new()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 1e307, "travel_mode": "driving" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 20_016.0, "travel_mode": "driving" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let metrics = body_string(app.oneshot(get_request("/metrics")).await.unwrap()).await;
    assert!(!metrics.contains("footprint_calculations_total{mode=\"driving\"}"));
    assert!(!metrics.contains("carbon_emitted_grams_total{mode=\"driving\"} +Inf"));
}

#[tokio::test]
async fn estimate_accepts_antipodal_distance() {
    let response = setup()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 20_015.0, "travel_mode": "driving" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let grams = body["carbon_footprint_grams"].as_f64().unwrap();
    assert!((grams - 20_015.0 * 210.0).abs() < 1e-3);
}

#[tokio::test]
async fn metrics_count_calculations_per_mode() {
    let app = router(Arc::new(AppState::new()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/footprint/estimate",
            json!({ "distance_km": 1.5, "travel_mode": "bicycling" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("footprint_calculations_total{mode=\"bicycling\"} 1"));
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let app = setup().layer(cors_layer("*").unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/footprint")
                .header("origin", "http://localhost:3001")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
