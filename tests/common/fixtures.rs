//! Builders for the reference data most tests need, created through the
//! public API so the contract is exercised on the way.

use reqwest::Client;
use serde_json::{json, Value};

use super::utils::TestApp;

pub async fn create_team(app: &TestApp, name: &str) -> i32 {
    let response = Client::new()
        .post(format!("{}/api/teams", app.address))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.expect("Invalid JSON");
    body["data"]["id"].as_i64().expect("Missing team id") as i32
}

pub async fn create_competition(app: &TestApp, name: &str, competition_type: &str) -> i32 {
    let response = Client::new()
        .post(format!("{}/api/competitions", app.address))
        .json(&json!({ "name": name, "type": competition_type }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.expect("Invalid JSON");
    body["data"]["id"].as_i64().expect("Missing competition id") as i32
}

pub async fn create_match(app: &TestApp, competition_id: i32, home: i32, away: i32) -> i32 {
    let response = Client::new()
        .post(format!("{}/api/matches", app.address))
        .json(&json!({
            "competition_id": competition_id,
            "home_team_id": home,
            "away_team_id": away,
            "match_date": "2025-05-01T18:00:00",
            "venue": "Main Bowl"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.expect("Invalid JSON");
    body["data"]["id"].as_i64().expect("Missing match id") as i32
}

/// Create a player directly; there is no player endpoint on the API.
pub async fn create_player(app: &TestApp, name: &str, team_id: i32) -> i32 {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO players (name, position, jersey_number, team_id)
        VALUES ($1, 'Forward', 9, $2)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(team_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("Failed to insert player");
    id
}

/// A competition, two teams and one scheduled match between them.
pub async fn create_full_match(app: &TestApp, competition_type: &str) -> (i32, i32, i32, i32) {
    let competition_id = create_competition(app, "Test League", competition_type).await;
    let home_id = create_team(app, "Home FC").await;
    let away_id = create_team(app, "Away FC").await;
    let match_id = create_match(app, competition_id, home_id, away_id).await;
    (competition_id, home_id, away_id, match_id)
}
