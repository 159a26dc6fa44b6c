use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::event::{Event, EventPayload, EventType};
use crate::utils::error::AppError;

/// Raw row shape of the `events` table. The category is stored as text
/// and parsed into [`EventType`] on the way out.
#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    event_type: String,
    other_type_name: Option<String>,
    image: String,
    description: String,
    min_team_participants: i32,
    max_team_participants: i32,
    location: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    price: Decimal,
    organizer: String,
    contact_info: String,
    registration_link: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = AppError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let event_type = EventType::parse(&row.event_type).ok_or_else(|| {
            AppError::InternalServerError(format!(
                "Unknown event type '{}' in events table",
                row.event_type
            ))
        })?;

        Ok(Event {
            id: row.id,
            title: row.title,
            event_type,
            other_type_name: row.other_type_name,
            image: row.image,
            description: row.description,
            min_team_participants: row.min_team_participants,
            max_team_participants: row.max_team_participants,
            location: row.location,
            start_date: row.start_date,
            end_date: row.end_date,
            price: row.price,
            organizer: row.organizer,
            contact_info: row.contact_info,
            registration_link: row.registration_link,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL-backed event collection over a shared `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct EventStore {
    pool: PgPool,
}

impl EventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, title, event_type, other_type_name, image, description, \
             min_team_participants, max_team_participants, location, start_date, end_date, \
             price, organizer, contact_info, registration_link, created_at \
             FROM events ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, title, event_type, other_type_name, image, description, \
             min_team_participants, max_team_participants, location, start_date, end_date, \
             price, organizer, contact_info, registration_link, created_at \
             FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Event::try_from).transpose()
    }

    /// Inserts a validated payload. The database stamps `created_at`.
    pub async fn insert(&self, payload: &EventPayload) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            "INSERT INTO events (id, title, event_type, other_type_name, image, description, \
             min_team_participants, max_team_participants, location, start_date, end_date, \
             price, organizer, contact_info, registration_link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING id, title, event_type, other_type_name, image, description, \
             min_team_participants, max_team_participants, location, start_date, end_date, \
             price, organizer, contact_info, registration_link, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&payload.title)
        .bind(payload.event_type.as_str())
        .bind(&payload.other_type_name)
        .bind(&payload.image)
        .bind(&payload.description)
        .bind(payload.min_team_participants)
        .bind(payload.max_team_participants)
        .bind(&payload.location)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.price)
        .bind(&payload.organizer)
        .bind(&payload.contact_info)
        .bind(&payload.registration_link)
        .fetch_one(&self.pool)
        .await?;

        Event::try_from(row)
    }

    /// Replaces every mutable column. `created_at` is never written.
    pub async fn replace(
        &self,
        id: Uuid,
        payload: &EventPayload,
    ) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            "UPDATE events SET title = $2, event_type = $3, other_type_name = $4, image = $5, \
             description = $6, min_team_participants = $7, max_team_participants = $8, \
             location = $9, start_date = $10, end_date = $11, price = $12, organizer = $13, \
             contact_info = $14, registration_link = $15 \
             WHERE id = $1 \
             RETURNING id, title, event_type, other_type_name, image, description, \
             min_team_participants, max_team_participants, location, start_date, end_date, \
             price, organizer, contact_info, registration_link, created_at",
        )
        .bind(id)
        .bind(&payload.title)
        .bind(payload.event_type.as_str())
        .bind(&payload.other_type_name)
        .bind(&payload.image)
        .bind(&payload.description)
        .bind(payload.min_team_participants)
        .bind(payload.max_team_participants)
        .bind(&payload.location)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.price)
        .bind(&payload.organizer)
        .bind(&payload.contact_info)
        .bind(&payload.registration_link)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Event::try_from).transpose()
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
