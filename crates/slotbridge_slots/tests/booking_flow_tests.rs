use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use slotbridge_slots::{routes, BookingCoordinator, HttpSlotService};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod fixtures;
use fixtures::*;

async fn upstream_with_week() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/availability/GetWeeklyAvailability/20240701"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weekly_availability_json()))
        .mount(&server)
        .await;
    server
}

fn app(server: &MockServer) -> Router {
    let service = HttpSlotService::new(&slot_service_config(server)).unwrap();
    let now = NaiveDate::from_ymd_opt(2024, 6, 28)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let coordinator = BookingCoordinator::new(Arc::new(service)).with_clock(move || now);
    routes(Arc::new(coordinator))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn book(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/slots/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn listed_slot_can_be_booked() {
    let server = upstream_with_week().await;
    Mock::given(method("POST"))
        .and(path("/api/availability/TakeSlot"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let list = Request::builder()
        .uri("/slots/available?MondayDate=2024-07-01")
        .body(Body::empty())
        .unwrap();
    let (status, slots) = send(app(&server), list).await;
    assert_eq!(status, StatusCode::OK);

    // Monday 09:00 and 09:30 are busy
    let first = &slots.as_array().unwrap()[0];
    assert_eq!(first["start"], "2024-07-01T10:00:00");
    assert_eq!(slots.as_array().unwrap().len(), 12 + 14);

    let (status, body) = send(
        app(&server),
        book(booking_json(
            first["start"].as_str().unwrap(),
            first["end"].as_str().unwrap(),
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Slot booked successfully."));
}

#[tokio::test]
async fn busy_slot_cannot_be_booked() {
    let server = upstream_with_week().await;
    Mock::given(method("POST"))
        .and(path("/api/availability/TakeSlot"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server),
        book(booking_json("2024-07-01T09:00:00", "2024-07-01T09:30:00")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No available slot found for the requested time.");
}

#[tokio::test]
async fn upstream_details_are_not_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("node db-3 unreachable"))
        .mount(&server)
        .await;

    let list = Request::builder()
        .uri("/slots/available?MondayDate=2024-07-01")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(&server), list).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains("db-3"));
    assert!(!message.contains("503"));
}
