use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::fixtures::create_competition;
use common::utils::spawn_app;

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn competition_filters_apply_conjunctively() {
    let app = spawn_app().await;
    let client = Client::new();

    create_competition(&app, "Football Active", "football").await;
    create_competition(&app, "Basketball Active", "basketball").await;
    create_competition(&app, "Track Active", "track").await;
    sqlx::query("UPDATE competitions SET status = 'completed' WHERE name = $1")
        .bind("Basketball Active")
        .execute(&app.db_pool)
        .await
        .unwrap();

    // type only
    let body: Value = client
        .get(format!("{}/api/competitions?type=football", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["Football Active"]);

    // status only
    let body: Value = client
        .get(format!("{}/api/competitions?status=completed", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["Basketball Active"]);

    // both predicates must hold
    let body: Value = client
        .get(format!(
            "{}/api/competitions?type=basketball&status=active",
            app.address
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(names(&body).is_empty());

    // no filter returns everything
    let body: Value = client
        .get(format!("{}/api/competitions", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn competition_rows_carry_match_counters() {
    let app = spawn_app().await;
    let client = Client::new();

    let (competition_id, _, _, match_id) =
        common::fixtures::create_full_match(&app, "football").await;
    sqlx::query("UPDATE matches SET status = 'live' WHERE id = $1")
        .bind(match_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let body: Value = client
        .get(format!("{}/api/competitions", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let row = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_i64() == Some(competition_id as i64))
        .expect("competition missing from listing");
    assert_eq!(row["total_matches"], 1);
    assert_eq!(row["live_matches"], 1);
}

#[actix_web::test]
async fn competition_detail_includes_its_matches() {
    let app = spawn_app().await;
    let client = Client::new();

    let (competition_id, home_id, _, _) =
        common::fixtures::create_full_match(&app, "football").await;

    let response = client
        .get(format!("{}/api/competitions/{}", app.address, competition_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["competition"]["id"], competition_id);
    let matches = body["data"]["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["home_team_id"], home_id);
    assert_eq!(matches[0]["home_team_name"], "Home FC");
}

#[actix_web::test]
async fn missing_competition_returns_404() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/competitions/424242", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Competition not found");
}

#[actix_web::test]
async fn competition_with_unknown_type_is_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/competitions", app.address))
        .json(&json!({ "name": "Chess Cup", "type": "chess" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation error");
}
