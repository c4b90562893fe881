use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::healthz,
        phone_numbers::{
            activate_phone_number, deactivate_phone_number, list_customer_phone_numbers,
            list_phone_numbers,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    let phone_number_routes = Router::new()
        .route("/", get(list_phone_numbers))
        .route(
            "/customers/{customer_id}",
            get(list_customer_phone_numbers),
        )
        .route(
            "/{phone_number_id}/activation",
            patch(activate_phone_number),
        )
        .route(
            "/{phone_number_id}/deactivation",
            patch(deactivate_phone_number),
        )
        .layer(cors);

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/phone-numbers", phone_number_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
