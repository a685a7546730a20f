use actix_web::{HttpResponse, Responder};
use common::portfolio::HIGHLIGHT_STATS;

/// Actix web handler for `GET /api/portfolio/stats`.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(HIGHLIGHT_STATS)
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn returns_highlight_stats() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/portfolio/stats").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 4);
        assert_eq!(body[0]["end"], 150);
        assert_eq!(body[0]["suffix"], "+");
    }
}
