use actix_web::HttpResponse;
use serde_json::json;

/// Liveness probe. Always healthy while the process can answer.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
