use actix_web::{test, web, App};
use allotment::api::routes::configure;

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

// ---------------------------------------------------------------------------
// GET /api/plants
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_plants_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_plants_returns_paginated_envelope() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["payload"].is_array(), "payload must be a JSON array");
    assert!(!body["payload"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["page"], 1);
    assert!(body["_links"]["self"]["href"].is_string());
}

#[actix_web::test]
async fn test_get_plants_items_have_required_fields() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    for item in body["payload"].as_array().unwrap() {
        let plant = &item["payload"];
        assert!(plant.get("name").is_some(), "Each plant must have a 'name'");
        assert!(plant.get("footprint").is_some(), "Each plant must have a 'footprint'");
        assert!(plant.get("companions").is_some(), "Each plant must have 'companions'");
        assert!(plant.get("enemies").is_some(), "Each plant must have 'enemies'");
        assert!(plant.get("trellised").is_some(), "Each plant must have 'trellised'");
        assert!(plant.get("yieldDensity").is_some(), "Each plant must have 'yieldDensity'");
    }
}

// ---------------------------------------------------------------------------
// GET /api/plants/{name}
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_plant_known_name_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/tomato").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_plant_unknown_name_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/triffid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

// ---------------------------------------------------------------------------
// GET /api/plants/{name}/companions
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_companions_returns_both_lists() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/tomato/companions")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let companions: Vec<&str> = body["payload"]["companions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    let enemies: Vec<&str> = body["payload"]["enemies"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(companions.contains(&"basil"), "basil helps tomatoes");
    assert!(enemies.contains(&"fennel"), "fennel stunts tomatoes");
}

#[actix_web::test]
async fn test_get_companions_unknown_name_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/triffid/companions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

// ---------------------------------------------------------------------------
// POST /api/layout — request validation
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_post_layout_unknown_plant_returns_400() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "northBoxes": 1,
        "westBoxes": 1,
        "plants": { "triffid": 1 }
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_post_layout_zero_boxes_returns_400() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "northBoxes": 0,
        "westBoxes": 2,
        "plants": { "carrot": 1 }
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_post_layout_partial_trellis_strip_returns_400() {
    let app = test::init_service(build_app()).await;
    // Peas climb a trellis and must come in full strips of boxCols squares.
    let payload = serde_json::json!({
        "northBoxes": 1,
        "westBoxes": 2,
        "plants": { "pea": 5 }
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_post_layout_over_capacity_returns_400() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "northBoxes": 1,
        "westBoxes": 1,
        "plants": { "carrot": 17 }
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_post_layout_malformed_body_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
