use actix_web::{get, patch, post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::track;
use crate::models::track::{CreateTrackEventRequest, TrackFixturesQuery, UpdateTrackStatusRequest};

#[get("/fixtures")]
pub async fn get_fixtures(
    query: web::Query<TrackFixturesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    track::get_fixtures(query, pool).await
}

#[post("/events")]
pub async fn create_track_event(
    request: web::Json<CreateTrackEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    track::create_track_event(request, pool).await
}

#[patch("/events/{id}/status")]
pub async fn update_track_event_status(
    path: web::Path<i32>,
    request: web::Json<UpdateTrackStatusRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    track::update_track_event_status(path.into_inner(), request, pool).await
}
