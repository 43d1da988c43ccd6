use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    config: &'static str,
    skill_categories: usize,
    featured_feed: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - The document is loaded before the server binds, so it is always present here
/// - A failed featured feed degrades one section only and is reported, not fatal
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        config: "loaded",
        skill_categories: data.config.skill_categories().len(),
        featured_feed: data.project_feed.state().tag(),
    })
}
