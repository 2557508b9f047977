// src/enhancer/mod.rs
//! The enhancement contract: validate input, build the prompt pair, issue
//! one call to the chat-completion provider, and parse the JSON object
//! embedded in the reply.

pub mod client;
pub mod extract;
pub mod prompt;

pub use client::{ChatProvider, GroqClient};

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::EnhanceError;
use crate::types::{EnhancedResume, ResumeInput};

pub struct Enhancer {
    provider: Arc<dyn ChatProvider>,
}

impl Enhancer {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Enhance one resume against one job description. Issues exactly one
    /// outbound call, after validation. Identical inputs issued twice make
    /// two billed calls; the provider is not deterministic even at low
    /// temperature.
    pub async fn enhance(&self, input: &ResumeInput) -> Result<EnhancedResume, EnhanceError> {
        validate(input)?;

        let user = prompt::user_prompt(input);
        info!(
            "Requesting enhancement for {} ({} experience entries)",
            input.personal_info.name,
            input.experience.len()
        );

        let reply = self.provider.complete(prompt::SYSTEM_PROMPT, &user).await?;

        let span = extract::first_json_object(&reply).ok_or_else(|| {
            warn!("Model reply contained no JSON object");
            EnhanceError::ModelFormat { raw: reply.clone() }
        })?;

        let enhanced: EnhancedResume = serde_json::from_str(span).map_err(|e| {
            warn!("Model reply failed to parse as JSON: {}", e);
            EnhanceError::ModelFormat { raw: reply.clone() }
        })?;

        info!(
            "Enhancement complete for {} (ats score {})",
            input.personal_info.name, enhanced.ats_score
        );
        Ok(enhanced)
    }
}

fn validate(input: &ResumeInput) -> Result<(), EnhanceError> {
    let mut missing = Vec::new();
    if input.personal_info.name.trim().is_empty() {
        missing.push("personalInfo.name");
    }
    if input.experience.is_empty() {
        missing.push("experience");
    }
    if input.skills.is_empty() {
        missing.push("skills");
    }
    if input.job_description.trim().is_empty() {
        missing.push("jobDescription");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EnhanceError::Validation(missing.join(", ")))
    }
}
