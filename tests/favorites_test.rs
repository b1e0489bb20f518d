use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::fixtures::{create_competition, create_team};
use common::utils::spawn_app;

#[actix_web::test]
async fn adding_the_same_favorite_twice_does_not_duplicate_it() {
    let app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&app, "Pirates FC").await;
    let payload = json!({ "favorite_type": "team", "favorite_id": team_id });

    let first: Value = client
        .post(format!("{}/api/favorites", app.address))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["success"], true);
    assert_eq!(first["message"], "Added to favorites");
    assert!(first["data"]["id"].is_number());

    let second: Value = client
        .post(format!("{}/api/favorites", app.address))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["success"], true);
    assert_eq!(second["message"], "Already in favorites");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_favorites")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn favorites_listing_resolves_the_referenced_entities() {
    let app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&app, "Joga FC").await;
    let player_id = common::fixtures::create_player(&app, "Animashaun", team_id).await;
    let competition_id = create_competition(&app, "BUSA League", "football").await;

    for (favorite_type, favorite_id) in [
        ("team", team_id),
        ("player", player_id),
        ("competition", competition_id),
    ] {
        client
            .post(format!("{}/api/favorites", app.address))
            .json(&json!({ "favorite_type": favorite_type, "favorite_id": favorite_id }))
            .send()
            .await
            .unwrap();
    }

    let body: Value = client
        .get(format!("{}/api/favorites", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["teams"][0]["name"], "Joga FC");
    assert_eq!(body["data"]["players"][0]["name"], "Animashaun");
    assert_eq!(body["data"]["players"][0]["team_name"], "Joga FC");
    assert_eq!(body["data"]["competitions"][0]["name"], "BUSA League");
}

#[actix_web::test]
async fn removing_a_favorite_reports_whether_it_existed() {
    let app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&app, "Kings FC").await;
    let payload = json!({ "favorite_type": "team", "favorite_id": team_id });
    client
        .post(format!("{}/api/favorites", app.address))
        .json(&payload)
        .send()
        .await
        .unwrap();

    let removed: Value = client
        .delete(format!("{}/api/favorites", app.address))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(removed["message"], "Removed from favorites");

    let again: Value = client
        .delete(format!("{}/api/favorites", app.address))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again["message"], "Not found in favorites");
}

#[actix_web::test]
async fn unknown_favorite_type_is_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/favorites", app.address))
        .json(&json!({ "favorite_type": "referee", "favorite_id": 1 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
}
