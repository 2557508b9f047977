// src/enhancer/prompt.rs
//! Prompt construction for the chat-completion provider. The user prompt
//! spells out the exact output shape so the reply can be parsed
//! deterministically.

use crate::types::ResumeInput;

pub const SYSTEM_PROMPT: &str = "You are an expert ATS (Applicant Tracking System) resume writer with 10+ years of experience.
Your task is to enhance resume content to be highly ATS-friendly, keyword-optimized, and professionally compelling.
IMPORTANT: Respond ONLY with a valid JSON object, no additional text, no markdown code blocks.";

pub fn user_prompt(input: &ResumeInput) -> String {
    let experience = serde_json::to_string_pretty(&input.experience).unwrap_or_default();
    let education = serde_json::to_string_pretty(&input.education).unwrap_or_default();

    format!(
        r#"Enhance this resume for the given job description. Make bullets action-oriented (start with strong verbs), quantify achievements where possible, and inject relevant ATS keywords from the job description.

JOB DESCRIPTION:
{job_description}

CURRENT RESUME DATA:
Name: {name}
Role Applying For: {target_role}
Current Experience: {experience}
Education: {education}
Skills: {skills}

Return ONLY this JSON structure (no markdown, no extra text):
{{
  "summary": "2-3 sentence ATS-optimized professional summary tailored to the job",
  "skills": ["keyword1", "keyword2", "...up to 15 relevant skills"],
  "experience": [
    {{
      "company": "company name",
      "role": "job title",
      "duration": "duration",
      "location": "location or Remote",
      "bullets": [
        "Action verb + task + measurable result (ATS-optimized)",
        "Action verb + task + measurable result (ATS-optimized)",
        "Action verb + task + measurable result (ATS-optimized)"
      ]
    }}
  ],
  "atsScore": 85,
  "keywords": ["top ATS keywords found in job description that were incorporated"]
}}"#,
        job_description = input.job_description,
        name = input.personal_info.name,
        target_role = input
            .personal_info
            .target_role
            .as_deref()
            .unwrap_or("Not specified"),
        experience = experience,
        education = education,
        skills = input.skills.join(", "),
    )
}
