use sqlx::PgPool;

use crate::models::sport_match::{
    CreateMatchEventRequest, LiveMatch, Match, MatchEventDetail, ScoreUpdateRequest,
};

/// All matches currently live, with the denormalized display fields and
/// the competition type the handler groups by.
pub async fn list_live_matches(pool: &PgPool) -> Result<Vec<LiveMatch>, sqlx::Error> {
    sqlx::query_as::<_, LiveMatch>(
        r#"
        SELECT m.*,
               ht.name as home_team_name, ht.logo_url as home_team_logo,
               at.name as away_team_name, at.logo_url as away_team_logo,
               c.name as competition_name, c.type as competition_type
        FROM matches m
        JOIN teams ht ON m.home_team_id = ht.id
        JOIN teams at ON m.away_team_id = at.id
        JOIN competitions c ON m.competition_id = c.id
        WHERE m.status = 'live'
        ORDER BY c.type, m.match_date ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Single-row score update; `None` means the match id does not exist.
pub async fn update_live_score(
    pool: &PgPool,
    match_id: i32,
    update: &ScoreUpdateRequest,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET home_score = $1, away_score = $2, current_minute = $3, period = $4, status = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(update.home_score)
    .bind(update.away_score)
    .bind(update.current_minute)
    .bind(&update.period)
    .bind(update.status.as_str())
    .bind(match_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_match_event(
    pool: &PgPool,
    event: &CreateMatchEventRequest,
) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO match_events (match_id, player_id, event_type, minute, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(event.match_id)
    .bind(event.player_id)
    .bind(event.event_type.as_str())
    .bind(event.minute)
    .bind(&event.description)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

/// Re-read an event with its player/team names joined in. Two round trips
/// with no transaction; a concurrent delete in between surfaces as `None`.
pub async fn get_event_detail(
    pool: &PgPool,
    event_id: i32,
) -> Result<Option<MatchEventDetail>, sqlx::Error> {
    sqlx::query_as::<_, MatchEventDetail>(
        r#"
        SELECT me.*, p.name as player_name, t.name as team_name
        FROM match_events me
        LEFT JOIN players p ON me.player_id = p.id
        LEFT JOIN teams t ON p.team_id = t.id
        WHERE me.id = $1
        "#,
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}
