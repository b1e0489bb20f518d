use std::net::TcpListener;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use brixsports_backend::config::settings::get_config;
use brixsports_backend::db::{schema, seed};
use brixsports_backend::run;
use brixsports_backend::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "brixsports-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // Only try to establish connections when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(32)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(config.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    match schema::init_db(&connection_pool).await {
        Ok(()) => tracing::info!("Database schema ready"),
        Err(e) => {
            tracing::error!("Failed to initialize database schema: {}", e);
            std::process::exit(1);
        }
    }

    if config.application.seed_demo_data {
        if let Err(e) = seed::seed_database(&connection_pool).await {
            tracing::error!("Failed to seed database: {}", e);
            std::process::exit(1);
        }
    }

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server running on {}", address);

    let server = run(listener, connection_pool.clone())?;
    let result = server.await;

    // Server has stopped accepting connections; release the store pool
    // before exiting
    connection_pool.close().await;
    result
}
