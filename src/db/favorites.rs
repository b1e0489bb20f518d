use sqlx::PgPool;

use crate::models::competition::Competition;
use crate::models::favorite::UserFavorite;
use crate::models::player::PlayerWithTeam;
use crate::models::team::Team;

pub async fn favorite_teams(pool: &PgPool, user_id: i32) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        SELECT t.* FROM teams t
        JOIN user_favorites uf ON t.id = uf.favorite_id
        WHERE uf.user_id = $1 AND uf.favorite_type = 'team'
        ORDER BY t.name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn favorite_players(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<PlayerWithTeam>, sqlx::Error> {
    sqlx::query_as::<_, PlayerWithTeam>(
        r#"
        SELECT p.*, t.name as team_name FROM players p
        JOIN teams t ON p.team_id = t.id
        JOIN user_favorites uf ON p.id = uf.favorite_id
        WHERE uf.user_id = $1 AND uf.favorite_type = 'player'
        ORDER BY p.name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn favorite_competitions(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<Competition>, sqlx::Error> {
    sqlx::query_as::<_, Competition>(
        r#"
        SELECT c.* FROM competitions c
        JOIN user_favorites uf ON c.id = uf.favorite_id
        WHERE uf.user_id = $1 AND uf.favorite_type = 'competition'
        ORDER BY c.name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert a favorite; the composite uniqueness constraint makes a repeat
/// add a no-op, surfaced to the caller as `None`.
pub async fn add_favorite(
    pool: &PgPool,
    user_id: i32,
    favorite_type: &str,
    favorite_id: i32,
) -> Result<Option<UserFavorite>, sqlx::Error> {
    sqlx::query_as::<_, UserFavorite>(
        r#"
        INSERT INTO user_favorites (user_id, favorite_type, favorite_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, favorite_type, favorite_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(favorite_type)
    .bind(favorite_id)
    .fetch_optional(pool)
    .await
}

/// Remove a favorite, reporting whether a row was actually deleted.
pub async fn remove_favorite(
    pool: &PgPool,
    user_id: i32,
    favorite_type: &str,
    favorite_id: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM user_favorites
        WHERE user_id = $1 AND favorite_type = $2 AND favorite_id = $3
        "#,
    )
    .bind(user_id)
    .bind(favorite_type)
    .bind(favorite_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
