pub mod config;
pub mod enhancer;
pub mod environment;
pub mod error;
pub mod portfolio;
pub mod types;
pub mod web;

pub use web::start_web_server;
