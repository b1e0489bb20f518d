use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::sport_match::{CreateMatchRequest, MatchListQuery, SportMatchesQuery};

#[tracing::instrument(name = "List matches", skip(query, pool))]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let matches = db::matches::list_matches(&pool, &query).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": matches
    })))
}

/// `/api/matches/{key}` serves two shapes: a numeric key is a match id
/// (detail with events), anything else is a sport name (aggregate view).
#[tracing::instrument(name = "Get match or sport view", skip(query, pool), fields(key = %key))]
pub async fn get_match_or_sport(
    key: String,
    query: web::Query<SportMatchesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match key.parse::<i32>() {
        Ok(match_id) => get_match(match_id, pool).await,
        Err(_) => get_matches_by_sport(&key, &query, pool).await,
    }
}

async fn get_match(match_id: i32, pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let sport_match = db::matches::get_match(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Match not found".to_string()))?;
    let events = db::matches::get_match_events(&pool, match_id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "match": sport_match,
            "events": events
        }
    })))
}

async fn get_matches_by_sport(
    sport: &str,
    query: &SportMatchesQuery,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    // '?status=all' (and no status at all) means every status
    let status = query.status.as_deref().filter(|s| *s != "all");
    let matches = db::matches::list_matches_by_sport(&pool, sport, status).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": matches
    })))
}

#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(competition_id = %request.competition_id)
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(ApiError::Validation)?;
    let sport_match = db::matches::insert_match(&pool, &request).await?;
    tracing::info!("Created match {}", sport_match.id);
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": sport_match
    })))
}
