use actix_web::{HttpResponse, Responder};
use common::forms::get_form_types;

/// Actix web handler for `GET /api/forms`.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(get_form_types())
}
