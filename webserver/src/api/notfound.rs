use actix_web::HttpResponse;
use super::Response;

pub async fn get() -> HttpResponse {
    HttpResponse::NotFound().json(Response::new("Not found"))
}
