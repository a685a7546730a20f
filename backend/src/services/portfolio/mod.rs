//! # Portfolio Service
//!
//! Serves the project catalogue and the highlight statistics shown under the
//! grid. The catalogue is built once on first use and never mutated.

mod list;
mod stats;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::portfolio::{catalog, PortfolioProject};
use std::sync::LazyLock;

/// The base path for all portfolio-related API endpoints.
const API_PATH: &str = "/api/portfolio";

static CATALOG: LazyLock<Vec<PortfolioProject>> = LazyLock::new(catalog);

/// Configures and returns the Actix `Scope` for the portfolio routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/portfolio?category=...`**: `list::process`. `category`
///     defaults to `all`; any other token is matched case-insensitively as a
///     substring of each project's `services` tags.
/// *   **`GET /api/portfolio/stats`**: `stats::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/stats", get().to(stats::process))
}
