use super::{lookup, not_found};
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/forms/{form_type}`.
///
/// # Returns
/// - `200 OK` with the `FormConfig` as JSON.
/// - `404 Not Found` when `form_type` is not a registered wire name.
pub async fn process(form_type: web::Path<String>) -> impl Responder {
    match lookup(&form_type) {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(e) => not_found(e),
    }
}
