use std::net::TcpListener;

use actix::Actor;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod db;
pub mod errors;
mod handlers;
pub mod models;
mod routes;
pub mod telemetry;
pub mod websocket;

use crate::routes::init_routes;
use crate::websocket::{BroadcastHub, LiveBroadcaster};

pub fn run(listener: TcpListener, db_pool: PgPool) -> Result<Server, std::io::Error> {
    // One hub for the whole process; handlers reach it through the
    // injected LiveBroadcaster handle
    let hub = BroadcastHub::new().start();
    let broadcaster = LiveBroadcaster::new(hub.clone());

    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let hub_data = web::Data::new(hub);
    let broadcaster_data = web::Data::new(broadcaster);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .max_age(3600);

        // Malformed bodies get the same envelope as domain validation
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let detail = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "message": "Validation error",
                    "details": [detail]
                })),
            )
            .into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config)
            .app_data(db_pool_data.clone())
            .app_data(hub_data.clone())
            .app_data(broadcaster_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
