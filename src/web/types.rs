// src/web/types.rs
//! Wire envelope and request types for the HTTP surface. Every response
//! carries `success`; failures add `error` (and `raw` for model-format
//! diagnostics).

use rocket::serde::{Deserialize, Serialize};

use crate::types::{EducationEntry, EnhancedResume, PersonalInfo};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
            raw: None,
        }
    }

    pub fn with_raw(error: String, raw: String) -> Self {
        Self {
            success: false,
            error,
            raw: Some(raw),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct BannerResponse {
    pub message: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct SavePortfolioRequest {
    pub personal_info: PersonalInfo,
    pub enhanced: EnhancedResume,
    #[serde(default)]
    pub educations: Vec<EducationEntry>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PortfolioSaved {
    pub id: String,
}
