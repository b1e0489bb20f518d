use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::fixtures::create_full_match;
use common::utils::spawn_app;

#[actix_web::test]
async fn score_update_returns_the_updated_row() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, _, _, match_id) = create_full_match(&app, "football").await;

    let response = client
        .patch(format!("{}/api/live/matches/{}/score", app.address, match_id))
        .json(&json!({
            "home_score": 2,
            "away_score": 1,
            "current_minute": 80,
            "period": "2nd Half",
            "status": "live"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["home_score"], 2);
    assert_eq!(body["data"]["away_score"], 1);
    assert_eq!(body["data"]["current_minute"], 80);
    assert_eq!(body["data"]["period"], "2nd Half");
    assert_eq!(body["data"]["status"], "live");
}

#[actix_web::test]
async fn score_update_for_a_missing_match_returns_404() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/api/live/matches/5/score", app.address))
        .json(&json!({
            "home_score": 2,
            "away_score": 1,
            "current_minute": 80,
            "period": "2nd Half",
            "status": "live"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Match not found");
}

#[actix_web::test]
async fn match_event_is_enriched_with_player_and_team_names() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, home_id, _, match_id) = create_full_match(&app, "football").await;
    let player_id = common::fixtures::create_player(&app, "McAntony", home_id).await;

    let response = client
        .post(format!("{}/api/live/events", app.address))
        .json(&json!({
            "match_id": match_id,
            "player_id": player_id,
            "event_type": "goal",
            "minute": 42,
            "description": "Header from the corner"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["player_name"], "McAntony");
    assert_eq!(body["data"]["team_name"], "Home FC");
    assert_eq!(body["data"]["event_type"], "goal");
    assert_eq!(body["data"]["minute"], 42);
}

#[actix_web::test]
async fn match_event_without_a_player_has_null_names() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, _, _, match_id) = create_full_match(&app, "football").await;

    let response = client
        .post(format!("{}/api/live/events", app.address))
        .json(&json!({
            "match_id": match_id,
            "event_type": "substitution",
            "minute": 60
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert!(body["data"]["player_name"].is_null());
    assert!(body["data"]["team_name"].is_null());
}

#[actix_web::test]
async fn live_listing_groups_matches_by_competition_type() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, _, _, football_match) = create_full_match(&app, "football").await;
    client
        .patch(format!(
            "{}/api/live/matches/{}/score",
            app.address, football_match
        ))
        .json(&json!({
            "home_score": 1,
            "away_score": 0,
            "current_minute": 15,
            "period": "1st Half",
            "status": "live"
        }))
        .send()
        .await
        .unwrap();

    let body: Value = client
        .get(format!("{}/api/live/matches", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let football = body["data"]["football"].as_array().unwrap();
    assert_eq!(football.len(), 1);
    assert_eq!(football[0]["id"], football_match);
    assert_eq!(football[0]["home_team_name"], "Home FC");
    assert!(body["data"]["basketball"].is_null());
}
