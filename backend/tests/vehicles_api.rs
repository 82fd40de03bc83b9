use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use threebus_backend::models::vehicle::VehicleStatus;
use tower::ServiceExt;

mod support;

use support::{
    integration_guard, reset_vehicles, response_json, seed_vehicle, test_app, test_pool,
    vehicle_payload,
};

#[tokio::test]
async fn public_listing_shows_only_available_vehicles_featured_first() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    reset_vehicles(&pool).await;

    let plain = seed_vehicle(&pool, vehicle_payload("Busscar Urbanuss")).await;
    let mut featured = vehicle_payload("Marcopolo Paradiso G7");
    featured.featured = true;
    let featured = seed_vehicle(&pool, featured).await;
    let mut sold = vehicle_payload("Volvo B270F");
    sold.status = VehicleStatus::Vendido;
    seed_vehicle(&pool, sold).await;
    let mut reserved = vehicle_payload("Scania K310");
    reserved.status = VehicleStatus::Reservado;
    seed_vehicle(&pool, reserved).await;

    let app = test_app(pool.clone());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vehicles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let items = body.as_array().expect("array");
    let ids: Vec<&str> = items.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec![featured.id.to_string(), plain.id.to_string()]);
    assert!(items.iter().all(|v| v["status"] == "disponivel"));
}

#[tokio::test]
async fn public_detail_hides_vehicles_that_are_not_available() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    reset_vehicles(&pool).await;

    let available = seed_vehicle(&pool, vehicle_payload("Comil Svelto")).await;
    let mut sold = vehicle_payload("Caio Apache Vip");
    sold.status = VehicleStatus::Vendido;
    let sold = seed_vehicle(&pool, sold).await;

    let app = test_app(pool.clone());
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/vehicles/{}", available.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["title"], "Comil Svelto");
    assert_eq!(body["vehicle_type"], "onibus_urbano");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/vehicles/{}", sold.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vehicles/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
