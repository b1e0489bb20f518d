use sqlx::PgPool;

use crate::db::filter::{bind_params, FilterBuilder, SqlParam};
use crate::models::sport_match::{
    CreateMatchRequest, Match, MatchEventDetail, MatchListQuery, MatchWithTeams,
};

const MATCH_LIST_SELECT: &str = r#"
    SELECT m.*,
           ht.name as home_team_name, ht.logo_url as home_team_logo,
           at.name as away_team_name, at.logo_url as away_team_logo,
           c.name as competition_name
    FROM matches m
    JOIN teams ht ON m.home_team_id = ht.id
    JOIN teams at ON m.away_team_id = at.id
    JOIN competitions c ON m.competition_id = c.id
"#;

pub async fn list_matches(
    pool: &PgPool,
    query: &MatchListQuery,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let mut filter = FilterBuilder::new();
    if let Some(status) = &query.status {
        filter = filter.equals("m.status", SqlParam::Text(status.clone()));
    }
    if let Some(date) = query.date {
        filter = filter.push("DATE(m.match_date) = {}", vec![SqlParam::Date(date)]);
    }
    if let Some(team_id) = query.team_id {
        filter = filter.push(
            "(m.home_team_id = {} OR m.away_team_id = {})",
            vec![SqlParam::Int(team_id), SqlParam::Int(team_id)],
        );
    }
    if let Some(competition_id) = query.competition_id {
        filter = filter.equals("m.competition_id", SqlParam::Int(competition_id));
    }

    let sql = format!(
        "{} {} ORDER BY m.match_date ASC",
        MATCH_LIST_SELECT,
        filter.where_clause()
    );

    bind_params(sqlx::query_as::<_, MatchWithTeams>(&sql), filter.params())
        .fetch_all(pool)
        .await
}

pub async fn get_match(pool: &PgPool, match_id: i32) -> Result<Option<MatchWithTeams>, sqlx::Error> {
    let sql = format!("{} WHERE m.id = $1", MATCH_LIST_SELECT);
    sqlx::query_as::<_, MatchWithTeams>(&sql)
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

/// Events of one match in minute order, with the scorer's player/team names
/// joined in for display.
pub async fn get_match_events(
    pool: &PgPool,
    match_id: i32,
) -> Result<Vec<MatchEventDetail>, sqlx::Error> {
    sqlx::query_as::<_, MatchEventDetail>(
        r#"
        SELECT me.*, p.name as player_name, t.name as team_name
        FROM match_events me
        LEFT JOIN players p ON me.player_id = p.id
        LEFT JOIN teams t ON p.team_id = t.id
        WHERE me.match_id = $1
        ORDER BY me.minute ASC
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_match(pool: &PgPool, request: &CreateMatchRequest) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (competition_id, home_team_id, away_team_id, match_date, venue)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(request.competition_id)
    .bind(request.home_team_id)
    .bind(request.away_team_id)
    .bind(request.match_date)
    .bind(&request.venue)
    .fetch_one(pool)
    .await
}

/// Matches of one sport (competition type), optionally narrowed by status.
pub async fn list_matches_by_sport(
    pool: &PgPool,
    sport: &str,
    status: Option<&str>,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let mut filter = FilterBuilder::new().equals("c.type", SqlParam::Text(sport.to_string()));
    if let Some(status) = status {
        filter = filter.equals("m.status", SqlParam::Text(status.to_string()));
    }

    let sql = format!(
        "{} {} ORDER BY m.match_date ASC",
        MATCH_LIST_SELECT,
        filter.where_clause()
    );

    bind_params(sqlx::query_as::<_, MatchWithTeams>(&sql), filter.params())
        .fetch_all(pool)
        .await
}

/// Home-screen listing: one sport, one status, optional row cap.
pub async fn list_matches_by_sport_and_status(
    pool: &PgPool,
    sport: &str,
    status: &str,
    limit: Option<i64>,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let filter = FilterBuilder::new()
        .equals("c.type", SqlParam::Text(sport.to_string()))
        .equals("m.status", SqlParam::Text(status.to_string()));

    let mut sql = format!(
        "{} {} ORDER BY m.match_date ASC",
        MATCH_LIST_SELECT,
        filter.where_clause()
    );
    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    bind_params(sqlx::query_as::<_, MatchWithTeams>(&sql), filter.params())
        .fetch_all(pool)
        .await
}
