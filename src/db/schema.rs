//! Idempotent schema bootstrap, run once at startup before the server
//! starts accepting requests.

use sqlx::PgPool;

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS teams (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        logo_url VARCHAR(255),
        founded_year INTEGER,
        stadium VARCHAR(100),
        city VARCHAR(100),
        country VARCHAR(100),
        color_primary VARCHAR(7),
        color_secondary VARCHAR(7),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS competitions (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        type VARCHAR(50) NOT NULL,
        category VARCHAR(50),
        status VARCHAR(20) DEFAULT 'active',
        start_date DATE,
        end_date DATE,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS players (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        position VARCHAR(50),
        jersey_number INTEGER,
        team_id INTEGER REFERENCES teams(id),
        age INTEGER,
        height DOUBLE PRECISION,
        weight DOUBLE PRECISION,
        nationality VARCHAR(50),
        photo_url VARCHAR(255),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS matches (
        id SERIAL PRIMARY KEY,
        competition_id INTEGER REFERENCES competitions(id),
        home_team_id INTEGER REFERENCES teams(id),
        away_team_id INTEGER REFERENCES teams(id),
        match_date TIMESTAMP NOT NULL,
        venue VARCHAR(100),
        status VARCHAR(20) DEFAULT 'scheduled',
        home_score INTEGER DEFAULT 0,
        away_score INTEGER DEFAULT 0,
        current_minute INTEGER DEFAULT 0,
        period VARCHAR(20),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS match_events (
        id SERIAL PRIMARY KEY,
        match_id INTEGER REFERENCES matches(id),
        player_id INTEGER REFERENCES players(id),
        event_type VARCHAR(50) NOT NULL,
        minute INTEGER NOT NULL,
        description TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS track_events (
        id SERIAL PRIMARY KEY,
        competition_id INTEGER REFERENCES competitions(id),
        event_name VARCHAR(100) NOT NULL,
        event_type VARCHAR(50),
        gender VARCHAR(10),
        scheduled_time TIMESTAMP,
        status VARCHAR(20) DEFAULT 'scheduled',
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_favorites (
        id SERIAL PRIMARY KEY,
        user_id INTEGER,
        favorite_type VARCHAR(20),
        favorite_id INTEGER,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        UNIQUE(user_id, favorite_type, favorite_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_matches_date ON matches(match_date)",
    "CREATE INDEX IF NOT EXISTS idx_matches_status ON matches(status)",
    "CREATE INDEX IF NOT EXISTS idx_matches_competition ON matches(competition_id)",
    "CREATE INDEX IF NOT EXISTS idx_match_events_match ON match_events(match_id)",
    "CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id)",
];

/// Create all tables and indexes if they do not exist yet.
#[tracing::instrument(name = "Initialize database schema", skip(pool))]
pub async fn init_db(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Database tables created/verified");
    Ok(())
}
