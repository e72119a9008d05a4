use actix_web::{get, http::header, HttpResponse, Responder};

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/app/tracker"))
        .finish()
}
