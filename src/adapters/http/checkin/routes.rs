//! HTTP routes for check-in endpoints.

use axum::{routing::post, Router};

use super::handlers::{process_checkin, CheckinHandlers};

/// Creates the check-in router.
pub fn checkin_routes(handlers: CheckinHandlers) -> Router {
    Router::new()
        .route("/", post(process_checkin))
        .with_state(handlers)
}
