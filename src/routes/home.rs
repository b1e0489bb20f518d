use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::home;

#[get("/home")]
pub async fn home_data(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    home::get_home_data(pool).await
}
