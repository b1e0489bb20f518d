use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Postponed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Postponed => "postponed",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Match {
    pub id: i32,
    pub competition_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: NaiveDateTime,
    pub venue: Option<String>,
    pub status: String,
    pub home_score: i32,
    pub away_score: i32,
    pub current_minute: i32,
    pub period: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Match row joined with team names/logos and the competition name, the
/// shape every listing endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchWithTeams {
    pub id: i32,
    pub competition_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: NaiveDateTime,
    pub venue: Option<String>,
    pub status: String,
    pub home_score: i32,
    pub away_score: i32,
    pub current_minute: i32,
    pub period: Option<String>,
    pub created_at: NaiveDateTime,
    pub home_team_name: String,
    pub home_team_logo: Option<String>,
    pub away_team_name: String,
    pub away_team_logo: Option<String>,
    pub competition_name: String,
}

/// Same as [`MatchWithTeams`] plus the competition type, used where
/// results are grouped by sport.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LiveMatch {
    pub id: i32,
    pub competition_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: NaiveDateTime,
    pub venue: Option<String>,
    pub status: String,
    pub home_score: i32,
    pub away_score: i32,
    pub current_minute: i32,
    pub period: Option<String>,
    pub created_at: NaiveDateTime,
    pub home_team_name: String,
    pub home_team_logo: Option<String>,
    pub away_team_name: String,
    pub away_team_logo: Option<String>,
    pub competition_name: String,
    pub competition_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEventType {
    Goal,
    YellowCard,
    RedCard,
    Substitution,
}

impl MatchEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchEventType::Goal => "goal",
            MatchEventType::YellowCard => "yellow_card",
            MatchEventType::RedCard => "red_card",
            MatchEventType::Substitution => "substitution",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchEvent {
    pub id: i32,
    pub match_id: i32,
    pub player_id: Option<i32>,
    pub event_type: String,
    pub minute: i32,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Event row enriched with player/team names. A goal without a scorer's
/// name is meaningless to a viewer, so both the REST response and the
/// broadcast carry this shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchEventDetail {
    pub id: i32,
    pub match_id: i32,
    pub player_id: Option<i32>,
    pub event_type: String,
    pub minute: i32,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub player_name: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchRequest {
    pub competition_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: NaiveDateTime,
    pub venue: Option<String>,
}

impl CreateMatchRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if let Some(venue) = &self.venue {
            if venue.len() > 100 {
                errors.push("venue must be at most 100 characters".to_string());
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
pub struct MatchListQuery {
    pub status: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub team_id: Option<i32>,
    pub competition_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SportMatchesQuery {
    pub status: Option<String>,
}

/// Body of the live score PATCH; the same fields are fanned out to the
/// match room after the write commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreUpdateRequest {
    pub home_score: i32,
    pub away_score: i32,
    pub current_minute: i32,
    pub period: Option<String>,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchEventRequest {
    pub match_id: i32,
    pub player_id: Option<i32>,
    pub event_type: MatchEventType,
    pub minute: i32,
    pub description: Option<String>,
}

impl CreateMatchEventRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.minute < 0 {
            errors.push("minute must not be negative".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
