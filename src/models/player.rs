use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<i32>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Player row joined with the owning team's name, as shown on favorites.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerWithTeam {
    pub id: i32,
    pub name: String,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<i32>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub team_name: String,
}
