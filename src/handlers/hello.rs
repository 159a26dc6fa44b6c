use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
struct HelloPayload {
    message: &'static str,
}

/// Reachability probe. The body is fixed and independent of any state.
pub async fn hello() -> Response {
    (
        StatusCode::OK,
        Json(HelloPayload {
            message: "Hello from Axum!",
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hello_always_returns_200() {
        let response = hello().await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
