use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::event::{EventPatch, EventPayload};
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

/// Explicit schema step: a body that doesn't match the payload shape
/// becomes a structured validation error instead of a framework
/// rejection.
fn decode<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::ValidationError(e.to_string()))
}

fn event_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Event with id '{}' was not found", id))
}

pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.events.list().await?;
    Ok(success(events, "Events retrieved"))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let payload: EventPayload = decode(body)?;
    payload.validate()?;

    let event = state.events.insert(&payload).await?;
    Ok(created(event, "Event created"))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = state
        .events
        .fetch(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    Ok(success(event, "Event retrieved"))
}

/// PUT: full replace, same rules as create.
pub async fn replace_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let payload: EventPayload = decode(body)?;
    payload.validate()?;

    let event = state
        .events
        .replace(id, &payload)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    Ok(success(event, "Event updated"))
}

/// PATCH: overlay the provided fields on the stored record, then
/// validate the merged result before persisting it.
pub async fn patch_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let patch: EventPatch = decode(body)?;

    let current = state
        .events
        .fetch(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    let merged = patch.apply(&current);
    merged.validate()?;

    let event = state
        .events
        .replace(id, &merged)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    Ok(success(event, "Event updated"))
}

/// Deleting an id that no longer exists is a not-found error, matching
/// retrieve and update.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if !state.events.delete(id).await? {
        return Err(event_not_found(id));
    }

    Ok(empty_success("Event deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_maps_bad_bodies_to_validation_errors() {
        let body = json!({ "start_date": "not a date" });
        let result: Result<EventPayload, AppError> = decode(body);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn decode_accepts_a_complete_payload() {
        let body = json!({
            "title": "Robotics workshop",
            "type": "workshop",
            "start_date": "2026-09-01T10:00:00Z",
            "end_date": "2026-09-01T16:00:00Z",
            "registrationLink": "https://forms.example.com/robotics"
        });
        let payload: EventPayload = decode(body).unwrap();

        assert_eq!(payload.title, "Robotics workshop");
        assert!(payload.validate().is_ok());
    }
}
