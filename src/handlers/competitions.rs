use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::competition::{CompetitionListQuery, CreateCompetitionRequest};

#[tracing::instrument(
    name = "List competitions",
    skip(query, pool),
    fields(competition_type = ?query.competition_type, status = ?query.status)
)]
pub async fn list_competitions(
    query: web::Query<CompetitionListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let competitions = db::competitions::list_competitions(
        &pool,
        query.competition_type.as_deref(),
        query.status.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": competitions
    })))
}

#[tracing::instrument(name = "Get competition", skip(pool), fields(competition_id = %competition_id))]
pub async fn get_competition(
    competition_id: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let competition = db::competitions::get_competition(&pool, competition_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Competition not found".to_string()))?;
    let matches = db::competitions::get_competition_matches(&pool, competition_id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "competition": competition,
            "matches": matches
        }
    })))
}

#[tracing::instrument(name = "Create competition", skip(request, pool), fields(name = %request.name))]
pub async fn create_competition(
    request: web::Json<CreateCompetitionRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(ApiError::Validation)?;
    let competition = db::competitions::insert_competition(&pool, &request).await?;
    tracing::info!("Created competition {}", competition.id);
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": competition
    })))
}
