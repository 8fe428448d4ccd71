//! Builds the generation request: persona, prompt text, and the strict
//! structured-output schema the service must honor.

use serde_json::{json, Value};

use crate::error::PathError;
use crate::models::{Language, LearningPathInput};

pub const MIN_AVAILABILITY: u8 = 1;
pub const MAX_AVAILABILITY: u8 = 40;

/// Rejects bad form input before any network call is made.
pub fn validate(input: &LearningPathInput) -> Result<(), PathError> {
    if input.goal.trim().is_empty() {
        return Err(PathError::Input("learning goal must not be empty".into()));
    }
    if !(MIN_AVAILABILITY..=MAX_AVAILABILITY).contains(&input.availability) {
        return Err(PathError::Input(format!(
            "availability must be between {MIN_AVAILABILITY} and {MAX_AVAILABILITY} hours per week"
        )));
    }
    Ok(())
}

pub fn system_instruction(lang: Language) -> String {
    format!(
        "You are MARI, an AI agent specialized in creating structured learning paths \
         for Algerian students and professionals. \
         Your voice is concise, credible, and future-focused. \
         Focus on localizing the content to the Algerian academic landscape \
         (e.g., USTHB, ESI, ENP, local online academies like Vodev, i-Madrassa, \
         or specific YouTube channels popular in Algeria). \
         The response must be in {}.",
        lang.response_language()
    )
}

pub fn prompt_text(input: &LearningPathInput) -> String {
    format!(
        "Create a step-by-step learning path for:\n\
         Goal: {}\n\
         Deadline: {}\n\
         Current Level: {}\n\
         Availability: {} hours per week.",
        input.goal.trim(),
        input.deadline,
        input.level.as_str(),
        input.availability
    )
}

pub fn chat_system_instruction(lang: Language) -> String {
    format!(
        "You are MARI, an AI career and academic advisor specialized in the Algerian \
         education system (USTHB, ESI, ENP, etc.). \
         Help students and professionals with advice on universities, career paths, and study tips. \
         Your responses should be helpful, concise, and professional. \
         The conversation must be in {}.",
        lang.response_language()
    )
}

/// The `responseSchema` sent with every generation call. This is a contract,
/// not a hint: the response must be JSON validating against it.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "academyName": { "type": "STRING" },
                        "courseLink": { "type": "STRING" },
                        "isUniversityModule": { "type": "BOOLEAN" }
                    },
                    "required": [
                        "id", "title", "description", "duration",
                        "academyName", "courseLink", "isUniversityModule"
                    ]
                }
            },
            "forwardLookingSentence": { "type": "STRING" }
        },
        "required": ["summary", "steps", "forwardLookingSentence"]
    })
}
