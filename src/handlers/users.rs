use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::app_state::AppState;
use crate::models::user::RegisterUserRequest;
use crate::utils::error::AppError;
use crate::utils::password::make_password_hash;
use crate::utils::response::created;

/// Open registration: validate, hash, insert, return the public record.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let request: RegisterUserRequest =
        serde_json::from_value(body).map_err(|e| AppError::ValidationError(e.to_string()))?;
    request.validate()?;

    let password_hash = make_password_hash(&request.password)?;

    let user = state
        .users
        .insert(&request.username, request.email.as_deref(), &password_hash)
        .await?;

    Ok(created(user, "User registered"))
}
