use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::favorites;
use crate::models::favorite::FavoriteRequest;

#[get("")]
pub async fn get_favorites(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    favorites::get_favorites(pool).await
}

#[post("")]
pub async fn add_favorite(
    request: web::Json<FavoriteRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    favorites::add_favorite(request, pool).await
}

#[delete("")]
pub async fn remove_favorite(
    request: web::Json<FavoriteRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    favorites::remove_favorite(request, pool).await
}
