use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;

const UPCOMING_LIMIT: i64 = 10;

/// Home screen aggregate: live and upcoming football, live basketball,
/// today's track events.
#[tracing::instrument(name = "Get home data", skip(pool))]
pub async fn get_home_data(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let live_football =
        db::matches::list_matches_by_sport_and_status(&pool, "football", "live", None).await?;
    let upcoming_football = db::matches::list_matches_by_sport_and_status(
        &pool,
        "football",
        "scheduled",
        Some(UPCOMING_LIMIT),
    )
    .await?;
    let live_basketball =
        db::matches::list_matches_by_sport_and_status(&pool, "basketball", "live", None).await?;
    let track_events = db::track::list_fixtures(&pool, None, None).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "live_football": live_football,
            "upcoming_football": upcoming_football,
            "live_basketball": live_basketball,
            "track_events": track_events
        }
    })))
}
