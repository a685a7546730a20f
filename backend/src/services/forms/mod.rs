//! # Form Configuration Service
//!
//! Read-only HTTP view over the static form registry in `common::forms`.
//! Every path under `/api/forms` that names a form accepts only the wire
//! names (`contact`, `seoAudit`, `adsAudit`, `consultation`); anything else
//! is rejected with `404 Not Found` before the registry is consulted.
//!
//! ## Sub-modules:
//! - `list`: the ordered list of form types.
//! - `get`: one full form configuration.
//! - `redirect`: the thank-you URL for a form type.

mod get;
mod list;
mod redirect;

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use common::forms::{
    get_form_config, is_valid_form_type, parse_form_type, FormConfig, FormError,
};
use log::{debug, warn};

/// The base path for all form-related API endpoints.
const API_PATH: &str = "/api/forms";

/// Configures and returns the Actix `Scope` for the form routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/forms`**: `list::process`, the form types in registry order.
/// *   **`GET /api/forms/{form_type}`**: `get::process`, the `FormConfig` as JSON.
/// *   **`GET /api/forms/{form_type}/redirect`**: `redirect::process`,
///     `{ "url": "/thank-you?type=..." }`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{form_type}", get().to(get::process))
        .route("/{form_type}/redirect", get().to(redirect::process))
}

/// Resolves an untrusted path segment to its registered configuration.
fn lookup(candidate: &str) -> Result<&'static FormConfig, FormError> {
    if !is_valid_form_type(candidate) {
        return Err(FormError::UnknownFormType(candidate.to_string()));
    }
    let config = get_form_config(parse_form_type(candidate)?)?;
    debug!("Resolved form config `{}`", config.id);
    Ok(config)
}

fn not_found(err: FormError) -> HttpResponse {
    warn!("Rejected form lookup: {}", err);
    HttpResponse::NotFound().body(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use common::forms::FormType;
    use serde_json::Value;

    #[actix_web::test]
    async fn lists_form_types_in_registry_order() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/forms").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, vec!["contact", "seoAudit", "adsAudit", "consultation"]);
    }

    #[actix_web::test]
    async fn returns_full_config_for_known_type() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/forms/seoAudit").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], "seoAudit");
        let website = body["fields"]
            .as_array()
            .and_then(|fields| fields.iter().find(|f| f["name"] == "website"))
            .cloned()
            .unwrap_or(Value::Null);
        assert_eq!(website["type"], "url");
        assert_eq!(website["required"], true);
        assert_eq!(website["gridColumn"], "full");
    }

    #[actix_web::test]
    async fn unknown_type_is_not_found() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        for uri in ["/api/forms/newsletter", "/api/forms/Contact", "/api/forms/toString"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 404, "{uri}");
        }
    }

    #[actix_web::test]
    async fn redirect_points_at_thank_you_page() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        for form_type in FormType::ALL {
            let req = test::TestRequest::get()
                .uri(&format!("/api/forms/{}/redirect", form_type))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["url"], format!("/thank-you?type={}", form_type));
        }

        let req = test::TestRequest::get()
            .uri("/api/forms/bogus/redirect")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn lookup_rejects_before_parsing() {
        assert_eq!(
            lookup("hasOwnProperty").err(),
            Some(FormError::UnknownFormType("hasOwnProperty".to_string()))
        );
        assert!(lookup("adsAudit").is_ok());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("Contact").is_err());
        assert!(lookup("contact").is_ok());
    }
}
