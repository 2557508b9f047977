// src/config.rs
use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::environment::EnvironmentConfig;

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const DEFAULT_PORT: u16 = 5000;

pub struct AppConfig {
    pub port: u16,
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_base_url: String,
    pub storage_path: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let environment = EnvironmentConfig::load()?;

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| anyhow::anyhow!("GROQ_API_KEY environment variable not set"))?;

        let groq_model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let groq_base_url =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let port = std::env::var("ROCKET_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("ROCKET_PORT must be a valid port number")?
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            groq_api_key,
            groq_model,
            groq_base_url,
            storage_path: environment.storage_path,
        })
    }
}
