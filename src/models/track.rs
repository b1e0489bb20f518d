use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackEventStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl TrackEventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackEventStatus::Scheduled => "scheduled",
            TrackEventStatus::Ongoing => "ongoing",
            TrackEventStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrackEvent {
    pub id: i32,
    pub competition_id: i32,
    pub event_name: String,
    pub event_type: Option<String>,
    pub gender: Option<String>,
    pub scheduled_time: Option<NaiveDateTime>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrackEventWithCompetition {
    pub id: i32,
    pub competition_id: i32,
    pub event_name: String,
    pub event_type: Option<String>,
    pub gender: Option<String>,
    pub scheduled_time: Option<NaiveDateTime>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub competition_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrackEventRequest {
    pub competition_id: i32,
    pub event_name: String,
    pub event_type: Option<String>,
    pub gender: Option<Gender>,
    pub scheduled_time: Option<NaiveDateTime>,
}

impl CreateTrackEventRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.event_name.trim().is_empty() {
            errors.push("event_name is required".to_string());
        }
        if self.event_name.len() > 100 {
            errors.push("event_name must be at most 100 characters".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackFixturesQuery {
    pub date: Option<chrono::NaiveDate>,
    pub competition_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrackStatusRequest {
    pub status: TrackEventStatus,
}
