use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionType {
    Football,
    Basketball,
    Track,
}

impl CompetitionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionType::Football => "football",
            CompetitionType::Basketball => "basketball",
            CompetitionType::Track => "track",
        }
    }
}

impl std::fmt::Display for CompetitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionStatus {
    Active,
    Completed,
    Upcoming,
}

impl CompetitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionStatus::Active => "active",
            CompetitionStatus::Completed => "completed",
            CompetitionStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub competition_type: String,
    pub category: Option<String>,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// List row with the match counters the overview screen shows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompetitionWithCounts {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub competition_type: String,
    pub category: Option<String>,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub total_matches: i64,
    pub live_matches: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompetitionRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub competition_type: CompetitionType,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CreateCompetitionRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("name is required".to_string());
        }
        if self.name.len() > 100 {
            errors.push("name must be at most 100 characters".to_string());
        }
        if let Some(category) = &self.category {
            if category.len() > 50 {
                errors.push("category must be at most 50 characters".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionListQuery {
    #[serde(rename = "type")]
    pub competition_type: Option<String>,
    pub status: Option<String>,
}
