use super::CATALOG;
use actix_web::{web, HttpResponse, Responder};
use common::portfolio::{filter_projects, ALL_CATEGORIES};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    category: Option<String>,
}

/// Actix web handler for `GET /api/portfolio`.
///
/// An unmatched category yields an empty list rather than an error.
pub async fn process(query: web::Query<ListQuery>) -> impl Responder {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_CATEGORIES);
    let projects = filter_projects(&CATALOG, category);
    debug!("Portfolio filter `{}` matched {} projects", category, projects.len());
    HttpResponse::Ok().json(projects)
}
