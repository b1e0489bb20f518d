use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Authentication is out of scope; every favorites request acts on behalf
/// of this user until a real auth layer lands.
pub const MOCK_USER_ID: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteType {
    Team,
    Player,
    Competition,
}

impl FavoriteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteType::Team => "team",
            FavoriteType::Player => "player",
            FavoriteType::Competition => "competition",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserFavorite {
    pub id: i32,
    pub user_id: Option<i32>,
    pub favorite_type: Option<String>,
    pub favorite_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub favorite_type: FavoriteType,
    pub favorite_id: i32,
}
