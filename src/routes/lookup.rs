use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{LookupRequest, HistoryResponse, HealthResponse, ErrorResponse};
use crate::core::{Locator, LookupError};
use std::sync::Arc;

/// Message shown to users for unknown zip codes
pub const NOT_FOUND_MESSAGE: &str = "Zip code not found in database.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub locator: Arc<Locator>,
}

/// Configure all lookup-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/lookup", web::post().to(lookup))
        .route("/history", web::get().to(get_history))
        .route("/history", web::delete().to(clear_history))
        .route("/targets", web::get().to(get_targets));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let zip_count = state.locator.store().len();
    let status = if zip_count > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        zip_count,
        target_count: state.locator.targets().len(),
    })
}

/// Nearest-target lookup endpoint
///
/// POST /api/v1/lookup
///
/// Request body:
/// ```json
/// {
///   "zip": "98401",
///   "limit": 1
/// }
/// ```
async fn lookup(
    state: web::Data<AppState>,
    req: web::Json<LookupRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for lookup request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or_else(|| state.locator.default_limit());

    match state.locator.lookup_with_limit(&req.zip, limit) {
        Ok(result) => {
            tracing::info!(
                "Zip {} resolved, returning {} matches",
                result.query_zip,
                result.matches.len()
            );
            HttpResponse::Ok().json(result)
        }
        Err(LookupError::NotFound(zip)) => {
            tracing::info!("Zip {} not found", zip);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: NOT_FOUND_MESSAGE.to_string(),
                status_code: 404,
            })
        }
        Err(e @ LookupError::EmptyQuery) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "empty_query".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

/// Recent lookups, most recent first
///
/// GET /api/v1/history
async fn get_history(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HistoryResponse {
        results: state.locator.recent(),
        capacity: state.locator.history_capacity(),
    })
}

/// DELETE /api/v1/history
async fn clear_history(state: web::Data<AppState>) -> impl Responder {
    state.locator.clear_history();
    tracing::debug!("History cleared");
    HttpResponse::NoContent().finish()
}

/// GET /api/v1/targets
async fn get_targets(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.locator.targets())
}
