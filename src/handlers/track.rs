use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::track::{
    CreateTrackEventRequest, TrackEventWithCompetition, TrackFixturesQuery,
    UpdateTrackStatusRequest,
};

#[tracing::instrument(
    name = "Get track fixtures",
    skip(query, pool),
    fields(date = ?query.date, competition_id = ?query.competition_id)
)]
pub async fn get_fixtures(
    query: web::Query<TrackFixturesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let events = db::track::list_fixtures(&pool, query.date, query.competition_id).await?;
    let total = events.len();
    let date = query
        .date
        .unwrap_or_else(|| Utc::now().date_naive())
        .to_string();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "date": date,
            "events": group_by_time(events),
            "total": total
        }
    })))
}

/// Fixtures are displayed in time slots, e.g. "04:30 PM". Events arrive
/// sorted by scheduled_time, so inserting in arrival order keeps the
/// slots chronological (serde_json is built with `preserve_order`).
fn group_by_time(events: Vec<TrackEventWithCompetition>) -> serde_json::Value {
    let mut grouped = serde_json::Map::new();
    for event in events {
        let slot = event
            .scheduled_time
            .map(|t| t.format("%I:%M %p").to_string())
            .unwrap_or_else(|| "TBD".to_string());
        let entry = grouped
            .entry(slot)
            .or_insert_with(|| serde_json::Value::Array(Vec::new()));
        if let serde_json::Value::Array(items) = entry {
            items.push(serde_json::to_value(&event).unwrap_or(serde_json::Value::Null));
        }
    }
    serde_json::Value::Object(grouped)
}

#[tracing::instrument(
    name = "Create track event",
    skip(request, pool),
    fields(event_name = %request.event_name)
)]
pub async fn create_track_event(
    request: web::Json<CreateTrackEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(ApiError::Validation)?;
    let event = db::track::insert_track_event(&pool, &request).await?;
    tracing::info!("Created track event {}", event.id);
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": event
    })))
}

#[tracing::instrument(name = "Update track event status", skip(request, pool), fields(event_id = %event_id))]
pub async fn update_track_event_status(
    event_id: i32,
    request: web::Json<UpdateTrackStatusRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let event = db::track::update_track_event_status(&pool, event_id, request.status.as_str())
        .await?
        .ok_or_else(|| ApiError::NotFound("Track event not found".to_string()))?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": event
    })))
}
