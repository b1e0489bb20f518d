use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::teams;
use crate::models::team::{CreateTeamRequest, TeamListQuery};

#[get("")]
pub async fn list_teams(
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    teams::list_teams(query, pool).await
}

#[get("/{id}")]
pub async fn get_team(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    teams::get_team(path.into_inner(), pool).await
}

#[post("")]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    teams::create_team(request, pool).await
}
