use actix_web::{get, Responder};

use crate::handlers::health::health_check;

#[get("/health")]
pub async fn health() -> impl Responder {
    health_check().await
}
