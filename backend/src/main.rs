mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the compiled frontend. Unknown paths get `index.html` so the
/// client-side pages (`/contact`, `/thank-you`, ...) resolve on reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => {
                debug!("No embedded asset for `{}`, serving index.html", file_path);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("Could not open browser at {}: {}", url, e);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(|| {
        App::new()
            .service(services::forms::configure_routes())
            .service(services::portfolio::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app = test::init_service(
            App::new()
                .service(services::forms::configure_routes())
                .default_service(web::route().to(serve_embedded)),
        )
            .await;

        let req = test::TestRequest::get().uri("/thank-you?type=contact").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn api_routes_win_over_fallback() {
        let app = test::init_service(
            App::new()
                .service(services::forms::configure_routes())
                .default_service(web::route().to(serve_embedded)),
        )
            .await;
        let req = test::TestRequest::get().uri("/api/forms/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
