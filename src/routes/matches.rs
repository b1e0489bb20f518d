use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::matches;
use crate::models::sport_match::{CreateMatchRequest, MatchListQuery, SportMatchesQuery};

#[get("")]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    matches::list_matches(query, pool).await
}

/// Numeric key: match detail with events. Sport name: aggregate view.
#[get("/{key}")]
pub async fn get_match_or_sport(
    path: web::Path<String>,
    query: web::Query<SportMatchesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    matches::get_match_or_sport(path.into_inner(), query, pool).await
}

#[post("")]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    matches::create_match(request, pool).await
}
