use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::competitions;
use crate::models::competition::{CompetitionListQuery, CreateCompetitionRequest};

#[get("")]
pub async fn list_competitions(
    query: web::Query<CompetitionListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    competitions::list_competitions(query, pool).await
}

#[get("/{id}")]
pub async fn get_competition(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    competitions::get_competition(path.into_inner(), pool).await
}

#[post("")]
pub async fn create_competition(
    request: web::Json<CreateCompetitionRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    competitions::create_competition(request, pool).await
}
