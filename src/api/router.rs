use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{calendar, health, import, instance_override, template};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Templates
        .route("/api/v1/{household_id}/templates", post(template::create_template).get(template::list_templates))
        .route("/api/v1/{household_id}/templates/{template_id}", get(template::get_template).put(template::update_template).delete(template::delete_template))

        // Per-date overrides
        .route("/api/v1/{household_id}/templates/{template_id}/overrides", get(instance_override::list_overrides).post(instance_override::upsert_override))
        .route("/api/v1/{household_id}/templates/{template_id}/overrides/{date}", delete(instance_override::delete_override))

        // Resolved calendar
        .route("/api/v1/{household_id}/calendar", get(calendar::get_calendar))
        .route("/api/v1/{household_id}/calendar.ics", get(calendar::get_calendar_ics))

        // Import reconciliation
        .route("/api/v1/{household_id}/import/preview", post(import::preview_import))
        .route("/api/v1/{household_id}/import/apply", post(import::apply_import))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        household_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
