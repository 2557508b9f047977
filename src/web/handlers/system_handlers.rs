// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use tracing::info;

use crate::web::types::BannerResponse;

pub async fn root_handler() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "ATS Resume Builder API is running".to_string(),
    })
}

pub async fn health_handler() -> Json<&'static str> {
    info!("Health check");
    Json("OK")
}
