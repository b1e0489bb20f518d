use sqlx::PgPool;

use crate::db::filter::{bind_params, FilterBuilder, SqlParam};
use crate::models::competition::{Competition, CompetitionWithCounts, CreateCompetitionRequest};
use crate::models::sport_match::MatchWithTeams;

pub async fn list_competitions(
    pool: &PgPool,
    competition_type: Option<&str>,
    status: Option<&str>,
) -> Result<Vec<CompetitionWithCounts>, sqlx::Error> {
    let mut filter = FilterBuilder::new();
    if let Some(competition_type) = competition_type {
        filter = filter.equals("c.type", SqlParam::Text(competition_type.to_string()));
    }
    if let Some(status) = status {
        filter = filter.equals("c.status", SqlParam::Text(status.to_string()));
    }

    let sql = format!(
        r#"
        SELECT c.*,
               COUNT(m.id) as total_matches,
               COUNT(CASE WHEN m.status = 'live' THEN 1 END) as live_matches
        FROM competitions c
        LEFT JOIN matches m ON c.id = m.competition_id
        {}
        GROUP BY c.id
        ORDER BY c.created_at DESC
        "#,
        filter.where_clause()
    );

    bind_params(sqlx::query_as::<_, CompetitionWithCounts>(&sql), filter.params())
        .fetch_all(pool)
        .await
}

pub async fn get_competition(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Option<Competition>, sqlx::Error> {
    sqlx::query_as::<_, Competition>("SELECT * FROM competitions WHERE id = $1")
        .bind(competition_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_competition_matches(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    sqlx::query_as::<_, MatchWithTeams>(
        r#"
        SELECT m.*,
               ht.name as home_team_name, ht.logo_url as home_team_logo,
               at.name as away_team_name, at.logo_url as away_team_logo,
               c.name as competition_name
        FROM matches m
        JOIN teams ht ON m.home_team_id = ht.id
        JOIN teams at ON m.away_team_id = at.id
        JOIN competitions c ON m.competition_id = c.id
        WHERE m.competition_id = $1
        ORDER BY m.match_date ASC
        "#,
    )
    .bind(competition_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_competition(
    pool: &PgPool,
    competition: &CreateCompetitionRequest,
) -> Result<Competition, sqlx::Error> {
    sqlx::query_as::<_, Competition>(
        r#"
        INSERT INTO competitions (name, type, category, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&competition.name)
    .bind(competition.competition_type.as_str())
    .bind(&competition.category)
    .bind(competition.start_date)
    .bind(competition.end_date)
    .fetch_one(pool)
    .await
}
