use actix_web::{web, Responder};
use super::Response;

/// Liveness check.
pub async fn get() -> impl Responder {
    web::Json(Response::new("Hello, there"))
}
