use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, availability, booking, date_override, preferences};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public
        .route("/api/v1/availability", get(availability::get_public_availability))
        .route("/api/v1/calendar", get(availability::get_public_calendar))
        .route("/api/v1/schedule", get(availability::get_schedule))
        .route("/api/v1/booking/check", post(booking::check_booking))

        // Admin
        .route("/api/v1/admin/preferences", get(preferences::get_preferences).put(preferences::save_preferences))
        .route("/api/v1/admin/overrides", get(date_override::list_overrides).post(date_override::upsert_override))
        .route("/api/v1/admin/overrides/{date}", delete(date_override::delete_override))
        .route("/api/v1/admin/calendar", get(availability::get_admin_calendar))

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
                        admin = tracing::field::Empty,
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
