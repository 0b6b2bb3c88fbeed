pub mod process;

pub use process::*;

use crate::error::AppError;
use crate::health;
use actix_web::{web, HttpRequest};

/// Register every route plus the JSON extractor settings.
///
/// Shared by `main` and the HTTP tests so both see the same app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/api/process", web::post().to(process_audio))
    .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}
