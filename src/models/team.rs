use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub founded_year: Option<i32>,
    pub stadium: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub logo_url: Option<String>,
    pub founded_year: Option<i32>,
    pub stadium: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
}

impl CreateTeamRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("name is required".to_string());
        }
        if self.name.len() > 100 {
            errors.push("name must be at most 100 characters".to_string());
        }
        if let Some(year) = self.founded_year {
            use chrono::Datelike;
            let current_year = chrono::Utc::now().year();
            if !(1800..=current_year).contains(&year) {
                errors.push(format!("founded_year must be between 1800 and {}", current_year));
            }
        }
        for (field, value) in [
            ("color_primary", &self.color_primary),
            ("color_secondary", &self.color_secondary),
        ] {
            if let Some(color) = value {
                if !is_hex_color(color) {
                    errors.push(format!("{} must be a hex color code like #1a2b3c", field));
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamListQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
}
