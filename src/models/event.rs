use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::utils::error::AppError;

/// Placeholder asset served when an event is created without an image.
pub const DEFAULT_EVENT_IMAGE: &str = "events/images/default.jpg";

const TITLE_MAX_CHARS: usize = 100;
const OTHER_TYPE_NAME_MAX_CHARS: usize = 100;
const LOCATION_MAX_CHARS: usize = 200;
const ORGANIZER_MAX_CHARS: usize = 100;
const CONTACT_INFO_MAX_CHARS: usize = 100;

/// Event category. `Others` is the escape hatch: the concrete name goes
/// in `other_type_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Hackathon,
    Cultural,
    Sports,
    Competition,
    Workshop,
    Seminar,
    Others,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Hackathon => "hackathon",
            EventType::Cultural => "cultural",
            EventType::Sports => "sports",
            EventType::Competition => "competition",
            EventType::Workshop => "workshop",
            EventType::Seminar => "seminar",
            EventType::Others => "others",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hackathon" => Some(EventType::Hackathon),
            "cultural" => Some(EventType::Cultural),
            "sports" => Some(EventType::Sports),
            "competition" => Some(EventType::Competition),
            "workshop" => Some(EventType::Workshop),
            "seminar" => Some(EventType::Seminar),
            "others" => Some(EventType::Others),
            _ => None,
        }
    }
}

/// A persisted event record. JSON field names keep the wire format the
/// frontend already consumes (`type`, `minTeamParticipants`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub other_type_name: Option<String>,
    pub image: String,
    pub description: String,
    #[serde(rename = "minTeamParticipants")]
    pub min_team_participants: i32,
    #[serde(rename = "maxTeamParticipants")]
    pub max_team_participants: i32,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: Decimal,
    pub organizer: String,
    pub contact_info: String,
    #[serde(rename = "registrationLink")]
    pub registration_link: String,
    pub created_at: DateTime<Utc>,
}

fn default_max_team_participants() -> i32 {
    1
}

fn default_image() -> String {
    DEFAULT_EVENT_IMAGE.to_string()
}

/// Request body for create and full-replace (PUT). `start_date`,
/// `end_date` and `registrationLink` are required; everything else falls
/// back to the model defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    #[serde(default)]
    pub other_type_name: Option<String>,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "minTeamParticipants", default)]
    pub min_team_participants: i32,
    #[serde(rename = "maxTeamParticipants", default = "default_max_team_participants")]
    pub max_team_participants: i32,
    #[serde(default)]
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub contact_info: String,
    #[serde(rename = "registrationLink")]
    pub registration_link: String,
}

impl EventPayload {
    /// Checks every field rule before the payload may touch the store.
    pub fn validate(&self) -> Result<(), AppError> {
        check_len("title", &self.title, TITLE_MAX_CHARS)?;
        check_len("location", &self.location, LOCATION_MAX_CHARS)?;
        check_len("organizer", &self.organizer, ORGANIZER_MAX_CHARS)?;
        check_len("contact_info", &self.contact_info, CONTACT_INFO_MAX_CHARS)?;
        if let Some(name) = &self.other_type_name {
            check_len("other_type_name", name, OTHER_TYPE_NAME_MAX_CHARS)?;
        }

        if self.min_team_participants < 0 {
            return Err(AppError::ValidationError(
                "minTeamParticipants cannot be negative".to_string(),
            ));
        }
        if self.min_team_participants > self.max_team_participants {
            return Err(AppError::ValidationError(
                "minTeamParticipants cannot exceed maxTeamParticipants".to_string(),
            ));
        }

        if self.start_date > self.end_date {
            return Err(AppError::ValidationError(
                "start_date must not be after end_date".to_string(),
            ));
        }

        if self.event_type == EventType::Others
            && self
                .other_type_name
                .as_deref()
                .map_or(true, |name| name.trim().is_empty())
        {
            return Err(AppError::ValidationError(
                "other_type_name is required when type is 'others'".to_string(),
            ));
        }

        match Url::parse(&self.registration_link) {
            Ok(link) if matches!(link.scheme(), "http" | "https") => Ok(()),
            _ => Err(AppError::ValidationError(
                "registrationLink must be a valid http(s) URL".to_string(),
            )),
        }
    }
}

fn check_len(field: &str, value: &str, max_chars: usize) -> Result<(), AppError> {
    if value.chars().count() > max_chars {
        return Err(AppError::ValidationError(format!(
            "{} must be at most {} characters",
            field, max_chars
        )));
    }
    Ok(())
}

/// Request body for partial update (PATCH). Absent fields keep the
/// stored value; the merged result is validated like a full payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub other_type_name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "minTeamParticipants")]
    pub min_team_participants: Option<i32>,
    #[serde(rename = "maxTeamParticipants")]
    pub max_team_participants: Option<i32>,
    pub location: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub price: Option<Decimal>,
    pub organizer: Option<String>,
    pub contact_info: Option<String>,
    #[serde(rename = "registrationLink")]
    pub registration_link: Option<String>,
}

impl EventPatch {
    /// Overlays the provided fields on a stored event, yielding the full
    /// payload to validate and persist.
    pub fn apply(self, current: &Event) -> EventPayload {
        EventPayload {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            event_type: self.event_type.unwrap_or(current.event_type),
            other_type_name: self
                .other_type_name
                .or_else(|| current.other_type_name.clone()),
            image: self.image.unwrap_or_else(|| current.image.clone()),
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
            min_team_participants: self
                .min_team_participants
                .unwrap_or(current.min_team_participants),
            max_team_participants: self
                .max_team_participants
                .unwrap_or(current.max_team_participants),
            location: self.location.unwrap_or_else(|| current.location.clone()),
            start_date: self.start_date.unwrap_or(current.start_date),
            end_date: self.end_date.unwrap_or(current.end_date),
            price: self.price.unwrap_or(current.price),
            organizer: self.organizer.unwrap_or_else(|| current.organizer.clone()),
            contact_info: self
                .contact_info
                .unwrap_or_else(|| current.contact_info.clone()),
            registration_link: self
                .registration_link
                .unwrap_or_else(|| current.registration_link.clone()),
        }
    }
}
