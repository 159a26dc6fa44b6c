use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::{apply_security_headers, create_cors_layer};
use crate::handlers::events::{
    create_event, delete_event, get_event, list_events, patch_event, replace_event,
};
use crate::handlers::hello::hello;
use crate::handlers::users::register_user;

/// The full (method, path) → handler table, resolved once at startup.
/// Paths keep their trailing slashes; axum matches them exactly.
pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/hello/", get(hello))
        .route("/events/", get(list_events).post(create_event))
        .route(
            "/events/:id/",
            get(get_event)
                .put(replace_event)
                .patch(patch_event)
                .delete(delete_event),
        )
        .route("/user/register/", post(register_user))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        );

    apply_security_headers(router)
}
