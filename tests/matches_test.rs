use reqwest::Client;
use serde_json::Value;

mod common;
use common::fixtures::{create_competition, create_full_match, create_match, create_team};
use common::utils::spawn_app;

#[actix_web::test]
async fn match_listing_filters_are_conjunctive() {
    let app = spawn_app().await;
    let client = Client::new();

    let (competition_id, home_id, away_id, match_id) = create_full_match(&app, "football").await;
    let other_competition = create_competition(&app, "Other League", "football").await;
    let third_team = create_team(&app, "Third FC").await;
    create_match(&app, other_competition, away_id, third_team).await;

    // team filter matches home or away side
    let body: Value = client
        .get(format!("{}/api/matches?team_id={}", app.address, home_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], match_id);

    let body: Value = client
        .get(format!("{}/api/matches?team_id={}", app.address, away_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // competition + status together
    let body: Value = client
        .get(format!(
            "{}/api/matches?competition_id={}&status=scheduled",
            app.address, competition_id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let body: Value = client
        .get(format!(
            "{}/api/matches?competition_id={}&status=live",
            app.address, competition_id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());

    // date filter uses the calendar date of the fixture
    let body: Value = client
        .get(format!("{}/api/matches?date=2025-05-01", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn match_detail_carries_denormalized_names_and_events() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, home_id, _, match_id) = create_full_match(&app, "football").await;
    let player_id = common::fixtures::create_player(&app, "Yanko", home_id).await;
    sqlx::query(
        "INSERT INTO match_events (match_id, player_id, event_type, minute) VALUES ($1, $2, 'goal', 23)",
    )
    .bind(match_id)
    .bind(player_id)
    .execute(&app.db_pool)
    .await
    .unwrap();

    let body: Value = client
        .get(format!("{}/api/matches/{}", app.address, match_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let m = &body["data"]["match"];
    assert_eq!(m["home_team_name"], "Home FC");
    assert_eq!(m["away_team_name"], "Away FC");
    assert_eq!(m["competition_name"], "Test League");
    let events = body["data"]["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["player_name"], "Yanko");
    assert_eq!(events[0]["team_name"], "Home FC");
}

#[actix_web::test]
async fn missing_match_returns_404() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/matches/31337", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Match not found");
}

#[actix_web::test]
async fn sport_segment_returns_the_aggregate_view() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, _, _, football_match) = create_full_match(&app, "football").await;
    let basketball = create_competition(&app, "Hoops", "basketball").await;
    let t1 = create_team(&app, "Phoenix").await;
    let t2 = create_team(&app, "Blazers").await;
    create_match(&app, basketball, t1, t2).await;

    let body: Value = client
        .get(format!("{}/api/matches/football", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], football_match);

    // status=all is the explicit no-filter spelling
    let body: Value = client
        .get(format!("{}/api/matches/basketball?status=all", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let body: Value = client
        .get(format!(
            "{}/api/matches/basketball?status=completed",
            app.address
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());
}
