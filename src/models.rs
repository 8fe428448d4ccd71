use serde::{Deserialize, Serialize};

/// Display language. Prompts mandate the model's output language from this
/// value; there is no auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn response_language(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
        }
    }
}

/// One generation request, built from the form. Immutable once submitted.
/// `deadline` is passed through uninterpreted; date validation is the
/// caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathInput {
    pub goal: String,
    pub deadline: String,
    pub level: ProficiencyLevel,
    /// Hours per week, 1..=40.
    pub availability: u8,
}

/// One unit of the curriculum. Produced entirely by the model; the client
/// never mutates its fields, completion is tracked externally by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub academy_name: String,
    pub course_link: String,
    pub is_university_module: bool,
}

/// The structured curriculum. `steps` order is chronological and must be
/// preserved through rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub summary: String,
    pub steps: Vec<Step>,
    pub forward_looking_sentence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}
