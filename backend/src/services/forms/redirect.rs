use super::{lookup, not_found};
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct RedirectResponse {
    url: String,
}

/// Actix web handler for `GET /api/forms/{form_type}/redirect`.
pub async fn process(form_type: web::Path<String>) -> impl Responder {
    match lookup(&form_type) {
        Ok(config) => HttpResponse::Ok().json(RedirectResponse {
            url: config.redirect_url(),
        }),
        Err(e) => not_found(e),
    }
}
