use actix_web::{get, HttpResponse};

#[get("/health")]
async fn health(_req: actix_web::HttpRequest) -> HttpResponse {
    HttpResponse::Ok().finish()
}
