use sqlx::PgPool;

use crate::db::filter::{bind_params, FilterBuilder, SqlParam};
use crate::models::player::Player;
use crate::models::team::{CreateTeamRequest, Team};

const DEFAULT_LIST_LIMIT: i64 = 20;

pub async fn list_teams(
    pool: &PgPool,
    search: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<Team>, sqlx::Error> {
    let mut filter = FilterBuilder::new();
    if let Some(search) = search {
        filter = filter.push("name ILIKE {}", vec![SqlParam::Text(format!("%{}%", search))]);
    }
    let limit_placeholder = filter.params().len() + 1;
    let sql = format!(
        "SELECT * FROM teams {} ORDER BY name ASC LIMIT ${}",
        filter.where_clause(),
        limit_placeholder
    );

    let query = bind_params(sqlx::query_as::<_, Team>(&sql), filter.params())
        .bind(limit.unwrap_or(DEFAULT_LIST_LIMIT));
    query.fetch_all(pool).await
}

pub async fn get_team(pool: &PgPool, team_id: i32) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_team_players(pool: &PgPool, team_id: i32) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        "SELECT * FROM players WHERE team_id = $1 ORDER BY jersey_number",
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_team(pool: &PgPool, team: &CreateTeamRequest) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (name, logo_url, founded_year, stadium, city, country, color_primary, color_secondary)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&team.name)
    .bind(&team.logo_url)
    .bind(team.founded_year)
    .bind(&team.stadium)
    .bind(&team.city)
    .bind(&team.country)
    .bind(&team.color_primary)
    .bind(&team.color_secondary)
    .fetch_one(pool)
    .await
}
