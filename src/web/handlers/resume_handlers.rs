// src/web/handlers/resume_handlers.rs
//! Resume enhancement handler

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

use crate::enhancer::Enhancer;
use crate::error::EnhanceError;
use crate::types::{EnhancedResume, ResumeInput};
use crate::web::types::{DataResponse, ErrorResponse};

pub async fn enhance_resume_handler(
    input: Json<ResumeInput>,
    enhancer: &State<Enhancer>,
) -> Result<Json<DataResponse<EnhancedResume>>, Custom<Json<ErrorResponse>>> {
    match enhancer.enhance(&input).await {
        Ok(enhanced) => Ok(Json(DataResponse::new(enhanced))),
        Err(e) => Err(enhance_error_response(e)),
    }
}

fn enhance_error_response(err: EnhanceError) -> Custom<Json<ErrorResponse>> {
    match err {
        EnhanceError::Validation(_) => Custom(
            Status::BadRequest,
            Json(ErrorResponse::new(err.to_string())),
        ),
        EnhanceError::ModelFormat { ref raw } => {
            error!("Model returned invalid format, raw reply retained");
            Custom(
                Status::InternalServerError,
                Json(ErrorResponse::with_raw(err.to_string(), raw.clone())),
            )
        }
        EnhanceError::Timeout | EnhanceError::Upstream(_) => {
            error!("Enhancement failed: {}", err);
            Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new(err.to_string())),
            )
        }
    }
}
