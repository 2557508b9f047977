// src/web/handlers/portfolio_handlers.rs
//! Portfolio snapshot save and read-back handlers

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

use crate::portfolio::SnapshotStore;
use crate::types::PortfolioSnapshot;
use crate::web::types::{DataResponse, ErrorResponse, PortfolioSaved, SavePortfolioRequest};

pub async fn save_portfolio_handler(
    request: Json<SavePortfolioRequest>,
    store: &State<SnapshotStore>,
) -> Result<Json<DataResponse<PortfolioSaved>>, Custom<Json<ErrorResponse>>> {
    let SavePortfolioRequest {
        personal_info,
        enhanced,
        educations,
    } = request.into_inner();

    match store.save(personal_info, enhanced, educations) {
        Ok(id) => Ok(Json(DataResponse::new(PortfolioSaved { id }))),
        Err(e) => {
            error!("Portfolio save failed: {}", e);
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

pub async fn get_portfolio_handler(
    id: &str,
    store: &State<SnapshotStore>,
) -> Result<Json<DataResponse<PortfolioSnapshot>>, Custom<Json<ErrorResponse>>> {
    match store.get(id) {
        Some(snapshot) => Ok(Json(DataResponse::new(snapshot))),
        None => Err(Custom(
            Status::NotFound,
            Json(ErrorResponse::new(format!("Portfolio not found: {}", id))),
        )),
    }
}
