mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_soccer_template(app: &TestApp) -> String {
    // Tuesday (day_of_week 2) 15:00-16:00 starting 2024-01-01, no end date.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/hh1/templates")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "title": "Soccer Practice",
                "category": "sports",
                "slots": [{"day_of_week": 2, "start_time": "15:00", "end_time": "16:00"}],
                "participants": ["kid1"],
                "transportation": "mom",
                "start_date": "2024-01-01"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn get_calendar(app: &TestApp, query: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/hh1/calendar?{}", query))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_weekly_template_expands_over_window() {
    let app = TestApp::new().await;
    create_soccer_template(&app).await;

    let entries = get_calendar(&app, "start=2024-01-01&end=2024-01-21").await;
    let items = entries.as_array().unwrap();

    assert_eq!(items.len(), 3);
    let dates: Vec<&str> = items.iter().map(|e| e["date"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["2024-01-02", "2024-01-09", "2024-01-16"]);
    assert!(items.iter().all(|e| e["kind"] == "recurring"));
    assert!(items.iter().all(|e| e["start_time"] == "15:00"));
}

#[tokio::test]
async fn test_cancelled_override_is_flagged_not_dropped() {
    let app = TestApp::new().await;
    let template_id = create_soccer_template(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/hh1/templates/{}/overrides", template_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"date": "2024-01-09", "cancelled": true}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let entries = get_calendar(&app, "start=2024-01-01&end=2024-01-21").await;
    let items = entries.as_array().unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["cancelled"], false);
    assert_eq!(items[1]["date"], "2024-01-09");
    assert_eq!(items[1]["cancelled"], true);
    assert_eq!(items[2]["cancelled"], false);
}

#[tokio::test]
async fn test_override_substitutes_participants_and_transportation() {
    let app = TestApp::new().await;
    let template_id = create_soccer_template(&app).await;

    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/hh1/templates/{}/overrides", template_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "date": "2024-01-09",
                "participants": ["grandma"]
            }).to_string())).unwrap()
    ).await.unwrap();

    let entries = get_calendar(&app, "start=2024-01-01&end=2024-01-21").await;
    let items = entries.as_array().unwrap();

    assert_eq!(items[1]["participants"], json!(["grandma"]));
    // Transportation was not overridden and keeps the template default.
    assert_eq!(items[1]["transportation"], "mom");
    assert_eq!(items[0]["participants"], json!(["kid1"]));
}

#[tokio::test]
async fn test_one_off_events_merge_into_calendar() {
    let app = TestApp::new().await;
    create_soccer_template(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/hh1/import/apply")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "unmatched": [{
                    "title": "Dentist",
                    "start_date": "2024-01-03",
                    "start_time": "10:00",
                    "end_time": "11:00",
                    "participants": ["kid1"]
                }]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let entries = get_calendar(&app, "start=2024-01-01&end=2024-01-07").await;
    let items = entries.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["date"], "2024-01-02");
    assert_eq!(items[0]["kind"], "recurring");
    assert_eq!(items[1]["date"], "2024-01-03");
    assert_eq!(items[1]["kind"], "single");
    assert_eq!(items[1]["title"], "Dentist");
}

#[tokio::test]
async fn test_empty_window_outside_template_range() {
    let app = TestApp::new().await;
    create_soccer_template(&app).await;

    let entries = get_calendar(&app, "start=2023-01-01&end=2023-01-31").await;
    assert!(entries.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_calendar_requires_window_params() {
    let app = TestApp::new().await;
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/hh1/calendar?start=2024-01-01")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ics_feed_excludes_cancelled_occurrences() {
    let app = TestApp::new().await;
    let template_id = create_soccer_template(&app).await;

    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/hh1/templates/{}/overrides", template_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"date": "2024-01-09", "cancelled": true}).to_string())).unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/hh1/calendar.ics?start=2024-01-01&end=2024-01-21")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().starts_with("text/calendar"));

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let feed = String::from_utf8(bytes.to_vec()).unwrap();

    assert_eq!(feed.matches("SUMMARY:Soccer Practice").count(), 2);
    assert!(!feed.contains("20240109"));
    assert!(!feed.contains("2024-01-09"));
}
