use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::favorite::{FavoriteRequest, MOCK_USER_ID};

#[tracing::instrument(name = "Get user favorites", skip(pool))]
pub async fn get_favorites(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let teams = db::favorites::favorite_teams(&pool, MOCK_USER_ID).await?;
    let players = db::favorites::favorite_players(&pool, MOCK_USER_ID).await?;
    let competitions = db::favorites::favorite_competitions(&pool, MOCK_USER_ID).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "teams": teams,
            "players": players,
            "competitions": competitions
        }
    })))
}

#[tracing::instrument(
    name = "Add favorite",
    skip(request, pool),
    fields(favorite_type = ?request.favorite_type, favorite_id = %request.favorite_id)
)]
pub async fn add_favorite(
    request: web::Json<FavoriteRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let inserted = db::favorites::add_favorite(
        &pool,
        MOCK_USER_ID,
        request.favorite_type.as_str(),
        request.favorite_id,
    )
    .await?;
    let message = if inserted.is_some() {
        "Added to favorites"
    } else {
        "Already in favorites"
    };
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": inserted,
        "message": message
    })))
}

#[tracing::instrument(
    name = "Remove favorite",
    skip(request, pool),
    fields(favorite_type = ?request.favorite_type, favorite_id = %request.favorite_id)
)]
pub async fn remove_favorite(
    request: web::Json<FavoriteRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let removed = db::favorites::remove_favorite(
        &pool,
        MOCK_USER_ID,
        request.favorite_type.as_str(),
        request.favorite_id,
    )
    .await?;
    let message = if removed {
        "Removed from favorites"
    } else {
        "Not found in favorites"
    };
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": message
    })))
}
