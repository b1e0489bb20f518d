//! Demo data for local development, enough for the home and live screens
//! to render. Skipped when the database already has teams.

use chrono::{Duration, Utc};
use sqlx::PgPool;

pub async fn seed_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (team_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teams")
        .fetch_one(pool)
        .await?;
    if team_count > 0 {
        tracing::info!("Database already seeded, skipping");
        return Ok(());
    }

    tracing::info!("Seeding database with demo data");

    let teams: &[(&str, &str, &str, &str, &str, &str)] = &[
        ("Pirates FC", "https://example.com/pirates.png", "Lagos", "Nigeria", "#000000", "#ffffff"),
        ("Joga FC", "https://example.com/joga.png", "Abuja", "Nigeria", "#ff0000", "#ffffff"),
        ("Los Blancos", "https://example.com/blancos.png", "Lagos", "Nigeria", "#ffffff", "#000000"),
        ("La Masia", "https://example.com/masia.png", "Lagos", "Nigeria", "#ff0000", "#0000ff"),
        ("Spartans", "https://example.com/spartans.png", "Lagos", "Nigeria", "#800080", "#ffffff"),
        ("Kings FC", "https://example.com/kings.png", "Lagos", "Nigeria", "#000080", "#ffffff"),
        ("Phoenix", "https://example.com/phoenix.png", "Lagos", "Nigeria", "#ff4500", "#ffffff"),
        ("Blazers", "https://example.com/blazers.png", "Lagos", "Nigeria", "#ff0000", "#000000"),
        ("City Boys FC", "https://example.com/cityboys.png", "Lagos", "Nigeria", "#ffff00", "#000000"),
    ];
    for (name, logo_url, city, country, primary, secondary) in teams {
        sqlx::query(
            r#"
            INSERT INTO teams (name, logo_url, city, country, color_primary, color_secondary)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(name)
        .bind(logo_url)
        .bind(city)
        .bind(country)
        .bind(primary)
        .bind(secondary)
        .execute(pool)
        .await?;
    }

    let competitions: &[(&str, &str, &str)] = &[
        ("BUSA League", "football", "inter-team"),
        ("BUSA League", "basketball", "inter-team"),
        ("Play Ball Africa", "football", "school"),
        ("Inter-College Cup", "football", "inter-college"),
        ("BEUSA Inter-department Cup", "football", "engineering"),
        ("Bells Friendlies", "football", "friendly"),
        ("Bells Team Matches", "football", "school"),
        ("Convocation Match", "football", "school"),
        ("NPUGA", "track", "school"),
    ];
    for (name, competition_type, category) in competitions {
        sqlx::query(
            "INSERT INTO competitions (name, type, category, status) VALUES ($1, $2, $3, 'active')",
        )
        .bind(name)
        .bind(competition_type)
        .bind(category)
        .execute(pool)
        .await?;
    }

    let players: &[(&str, &str, i32, i32, i32)] = &[
        ("Yanko", "Forward", 10, 1, 22),
        ("McAntony", "Midfielder", 8, 1, 21),
        ("Animashaun", "Defender", 4, 2, 23),
        ("John Doe", "Goalkeeper", 1, 3, 24),
        ("Jane Smith", "Forward", 9, 4, 20),
    ];
    for (name, position, jersey_number, team_id, age) in players {
        sqlx::query(
            r#"
            INSERT INTO players (name, position, jersey_number, team_id, age, nationality)
            VALUES ($1, $2, $3, $4, $5, 'Nigeria')
            "#,
        )
        .bind(name)
        .bind(position)
        .bind(jersey_number)
        .bind(team_id)
        .bind(age)
        .execute(pool)
        .await?;
    }

    let today = Utc::now().naive_utc();
    let tomorrow = today + Duration::days(1);
    struct SeedMatch {
        competition_id: i32,
        home_team_id: i32,
        away_team_id: i32,
        match_date: chrono::NaiveDateTime,
        status: &'static str,
        home_score: i32,
        away_score: i32,
        current_minute: i32,
        period: Option<&'static str>,
    }
    let matches = [
        SeedMatch {
            competition_id: 1,
            home_team_id: 1,
            away_team_id: 2,
            match_date: today,
            status: "live",
            home_score: 0,
            away_score: 1,
            current_minute: 71,
            period: Some("2nd Half"),
        },
        SeedMatch {
            competition_id: 1,
            home_team_id: 3,
            away_team_id: 4,
            match_date: today,
            status: "scheduled",
            home_score: 0,
            away_score: 0,
            current_minute: 0,
            period: None,
        },
        SeedMatch {
            competition_id: 1,
            home_team_id: 5,
            away_team_id: 6,
            match_date: tomorrow,
            status: "scheduled",
            home_score: 0,
            away_score: 0,
            current_minute: 0,
            period: None,
        },
        SeedMatch {
            competition_id: 2,
            home_team_id: 7,
            away_team_id: 8,
            match_date: today,
            status: "live",
            home_score: 18,
            away_score: 38,
            current_minute: 0,
            period: Some("2nd Quarter"),
        },
    ];
    for m in &matches {
        sqlx::query(
            r#"
            INSERT INTO matches (competition_id, home_team_id, away_team_id, match_date,
                                 status, home_score, away_score, current_minute, period)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(m.competition_id)
        .bind(m.home_team_id)
        .bind(m.away_team_id)
        .bind(m.match_date)
        .bind(m.status)
        .bind(m.home_score)
        .bind(m.away_score)
        .bind(m.current_minute)
        .bind(m.period)
        .execute(pool)
        .await?;
    }

    let track_events: &[(&str, &str, &str, i64)] = &[
        ("Sprint Relay - Male", "relay", "male", 0),
        ("Sprint Relay - Female", "relay", "female", 10),
        ("100m Sprint - Male", "sprint", "male", 20),
        ("100m Sprint - Female", "sprint", "female", 30),
        ("400m Sprint - Male", "sprint", "male", 60),
        ("400m Sprint - Female", "sprint", "female", 80),
        ("1500m Sprint - Male", "distance", "male", 90),
        ("1500m Sprint - Female", "distance", "female", 120),
    ];
    for (event_name, event_type, gender, offset_minutes) in track_events {
        sqlx::query(
            r#"
            INSERT INTO track_events (competition_id, event_name, event_type, gender,
                                      scheduled_time, status)
            VALUES (9, $1, $2, $3, $4, 'scheduled')
            "#,
        )
        .bind(event_name)
        .bind(event_type)
        .bind(gender)
        .bind(today + Duration::minutes(*offset_minutes))
        .execute(pool)
        .await?;
    }

    tracing::info!("Database seeded successfully");
    Ok(())
}
