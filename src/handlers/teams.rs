use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::team::{CreateTeamRequest, TeamListQuery};

#[tracing::instrument(
    name = "List teams",
    skip(query, pool),
    fields(search = ?query.search, limit = ?query.limit)
)]
pub async fn list_teams(
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let teams = db::teams::list_teams(&pool, query.search.as_deref(), query.limit).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": teams
    })))
}

#[tracing::instrument(name = "Get team", skip(pool), fields(team_id = %team_id))]
pub async fn get_team(team_id: i32, pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let team = db::teams::get_team(&pool, team_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Team not found".to_string()))?;
    let players = db::teams::get_team_players(&pool, team_id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "team": team,
            "players": players
        }
    })))
}

#[tracing::instrument(name = "Create team", skip(request, pool), fields(name = %request.name))]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(ApiError::Validation)?;
    let team = db::teams::insert_team(&pool, &request).await?;
    tracing::info!("Created team {}", team.id);
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": team
    })))
}
