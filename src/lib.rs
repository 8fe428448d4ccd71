//! MARI: structured learning-path generation on top of the Gemini API.
//!
//! The crate covers the contract side of the app: building the schema-bound
//! generation request, the single-shot generation client, the multi-turn
//! chat session, and the view-state reducer that tracks loading/error phase
//! and step completion. Rendering is left to the embedding frontend.

mod chat;
mod error;
mod gemini;
pub mod i18n;
mod models;
pub mod prompt;
mod state;

pub use chat::ChatSession;
pub use error::{PathError, GENERIC_FAILURE_MESSAGE};
pub use gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use models::{
    ChatMessage, Language, LearningPath, LearningPathInput, ProficiencyLevel, Role, Step,
};
pub use state::{PathState, Phase, RequestToken};
