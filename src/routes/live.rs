use actix_web::{get, patch, post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::live;
use crate::models::sport_match::{CreateMatchEventRequest, ScoreUpdateRequest};
use crate::websocket::LiveBroadcaster;

#[get("/matches")]
pub async fn get_live_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    live::get_live_matches(pool).await
}

#[patch("/matches/{id}/score")]
pub async fn update_live_score(
    path: web::Path<i32>,
    request: web::Json<ScoreUpdateRequest>,
    pool: web::Data<PgPool>,
    broadcaster: web::Data<LiveBroadcaster>,
) -> Result<HttpResponse, ApiError> {
    live::update_live_score(path.into_inner(), request, pool, broadcaster).await
}

#[post("/events")]
pub async fn add_match_event(
    request: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
    broadcaster: web::Data<LiveBroadcaster>,
) -> Result<HttpResponse, ApiError> {
    live::add_match_event(request, pool, broadcaster).await
}
