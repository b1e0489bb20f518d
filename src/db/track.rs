use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::filter::{bind_params, FilterBuilder, SqlParam};
use crate::models::track::{CreateTrackEventRequest, TrackEvent, TrackEventWithCompetition};

/// Track fixtures, defaulting to today's schedule when no date is given.
pub async fn list_fixtures(
    pool: &PgPool,
    date: Option<NaiveDate>,
    competition_id: Option<i32>,
) -> Result<Vec<TrackEventWithCompetition>, sqlx::Error> {
    let mut filter = FilterBuilder::new().raw("c.type = 'track'");
    match date {
        Some(date) => {
            filter = filter.push("DATE(te.scheduled_time) = {}", vec![SqlParam::Date(date)]);
        }
        None => {
            filter = filter.raw("DATE(te.scheduled_time) = CURRENT_DATE");
        }
    }
    if let Some(competition_id) = competition_id {
        filter = filter.equals("te.competition_id", SqlParam::Int(competition_id));
    }

    let sql = format!(
        r#"
        SELECT te.*, c.name as competition_name
        FROM track_events te
        JOIN competitions c ON te.competition_id = c.id
        {}
        ORDER BY te.scheduled_time ASC
        "#,
        filter.where_clause()
    );

    bind_params(
        sqlx::query_as::<_, TrackEventWithCompetition>(&sql),
        filter.params(),
    )
    .fetch_all(pool)
    .await
}

pub async fn insert_track_event(
    pool: &PgPool,
    event: &CreateTrackEventRequest,
) -> Result<TrackEvent, sqlx::Error> {
    sqlx::query_as::<_, TrackEvent>(
        r#"
        INSERT INTO track_events (competition_id, event_name, event_type, gender, scheduled_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(event.competition_id)
    .bind(&event.event_name)
    .bind(&event.event_type)
    .bind(event.gender.map(|g| g.as_str()))
    .bind(event.scheduled_time)
    .fetch_one(pool)
    .await
}

pub async fn update_track_event_status(
    pool: &PgPool,
    event_id: i32,
    status: &str,
) -> Result<Option<TrackEvent>, sqlx::Error> {
    sqlx::query_as::<_, TrackEvent>(
        "UPDATE track_events SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(status)
    .bind(event_id)
    .fetch_optional(pool)
    .await
}
