// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{
    catchers, delete, get, options, patch, post, put, routes, Build, Request, Response, Rocket,
};
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::enhancer::{Enhancer, GroqClient};
use crate::portfolio::{FileSlot, SnapshotStore};
use crate::types::{EnhancedResume, PortfolioSnapshot, ResumeInput};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// API Routes

#[post("/resume/enhance", data = "<input>")]
pub async fn enhance_resume(
    input: Json<ResumeInput>,
    enhancer: &rocket::State<Enhancer>,
) -> Result<Json<DataResponse<EnhancedResume>>, Custom<Json<ErrorResponse>>> {
    handlers::enhance_resume_handler(input, enhancer).await
}

// The enhancement path accepts POST only; other methods get an explicit 405
// instead of Rocket's default 404.

#[get("/resume/enhance")]
pub async fn enhance_resume_get() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[put("/resume/enhance")]
pub async fn enhance_resume_put() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[delete("/resume/enhance")]
pub async fn enhance_resume_delete() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[patch("/resume/enhance")]
pub async fn enhance_resume_patch() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

fn method_not_allowed() -> Custom<Json<ErrorResponse>> {
    Custom(
        Status::MethodNotAllowed,
        Json(ErrorResponse::new("Method not allowed".to_string())),
    )
}

#[post("/portfolio", data = "<request>")]
pub async fn save_portfolio(
    request: Json<SavePortfolioRequest>,
    store: &rocket::State<SnapshotStore>,
) -> Result<Json<DataResponse<PortfolioSaved>>, Custom<Json<ErrorResponse>>> {
    handlers::save_portfolio_handler(request, store).await
}

#[get("/portfolio/<id>")]
pub async fn get_portfolio(
    id: &str,
    store: &rocket::State<SnapshotStore>,
) -> Result<Json<DataResponse<PortfolioSnapshot>>, Custom<Json<ErrorResponse>>> {
    handlers::get_portfolio_handler(id, store).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[get("/")]
pub async fn root() -> Json<BannerResponse> {
    handlers::root_handler().await
}

#[options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format".to_string()))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Not found".to_string()))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format".to_string()))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error".to_string()))
}

/// Assemble the Rocket application. Tests inject a stubbed enhancer and an
/// in-memory store through the same managed state the server uses.
pub fn build_rocket(
    figment: rocket::figment::Figment,
    enhancer: Enhancer,
    store: SnapshotStore,
) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(enhancer)
        .manage(store)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount("/", routes![root])
        .mount(
            "/api",
            routes![
                enhance_resume,
                enhance_resume_get,
                enhance_resume_put,
                enhance_resume_delete,
                enhance_resume_patch,
                save_portfolio,
                get_portfolio,
                health,
                all_options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let provider = GroqClient::new(
        config.groq_base_url.clone(),
        config.groq_api_key.clone(),
        config.groq_model.clone(),
    )?;
    let enhancer = Enhancer::new(Arc::new(provider));
    let store = SnapshotStore::new(Box::new(FileSlot::new(config.storage_path.clone())));

    info!("Starting ATS Resume Builder API server");
    info!("Model: {}", config.groq_model);
    info!("Portfolio storage: {}", config.storage_path.display());

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_rocket(figment, enhancer, store).launch().await?;

    Ok(())
}
