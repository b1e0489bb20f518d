use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::sport_match::{
    CreateMatchEventRequest, LiveMatch, MatchStatus, ScoreUpdateRequest,
};
use crate::websocket::LiveBroadcaster;

#[tracing::instrument(name = "Get live matches", skip(pool))]
pub async fn get_live_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let matches = db::live::list_live_matches(&pool).await?;

    // Group by competition type for the live screen
    let mut grouped: BTreeMap<String, Vec<LiveMatch>> = BTreeMap::new();
    for m in matches {
        grouped.entry(m.competition_type.clone()).or_default().push(m);
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": grouped
    })))
}

/// Persist the new score, answer the caller with the updated row, then fan
/// the same payload out to the match room. The broadcast happens strictly
/// after the committed write and cannot fail the request.
#[tracing::instrument(
    name = "Update live score",
    skip(request, pool, broadcaster),
    fields(match_id = %match_id)
)]
pub async fn update_live_score(
    match_id: i32,
    request: web::Json<ScoreUpdateRequest>,
    pool: web::Data<PgPool>,
    broadcaster: web::Data<LiveBroadcaster>,
) -> Result<HttpResponse, ApiError> {
    let updated = db::live::update_live_score(&pool, match_id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Match not found".to_string()))?;

    broadcaster.broadcast_score_update(match_id, &request);
    if request.status != MatchStatus::Live {
        broadcaster.broadcast_match_status(
            match_id,
            request.status,
            Some(json!({
                "home_score": updated.home_score,
                "away_score": updated.away_score
            })),
        );
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": updated
    })))
}

/// Insert the event, re-read it with player/team names joined in, and send
/// the same enriched shape to both the REST caller and the room.
#[tracing::instrument(
    name = "Add match event",
    skip(request, pool, broadcaster),
    fields(match_id = %request.match_id, event_type = ?request.event_type)
)]
pub async fn add_match_event(
    request: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
    broadcaster: web::Data<LiveBroadcaster>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let event_id = db::live::insert_match_event(&pool, &request).await?;
    let detail = db::live::get_event_detail(&pool, event_id)
        .await?
        .ok_or(ApiError::Database(sqlx::Error::RowNotFound))?;

    broadcaster.broadcast_match_event(request.match_id, &detail);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": detail
    })))
}
