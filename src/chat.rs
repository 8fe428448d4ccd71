use serde_json::json;
use tracing::warn;

use crate::error::PathError;
use crate::gemini::GeminiClient;
use crate::models::{ChatMessage, Language, Role};
use crate::prompt;

impl GeminiClient {
    /// Opens a conversational session. The persona and response language are
    /// snapshotted from `lang` here; switching the display language later
    /// does not retarget an open session — open a new one instead.
    pub fn start_chat(&self, lang: Language) -> ChatSession {
        ChatSession {
            client: self.clone(),
            system_instruction: prompt::chat_system_instruction(lang),
            messages: Vec::new(),
        }
    }
}

/// A stateful multi-turn session. The Gemini REST API is itself stateless,
/// so the session owns the transcript and replays it as `contents` on every
/// send — which is also what fixes conversational context order.
pub struct ChatSession {
    client: GeminiClient,
    system_instruction: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// The transcript so far, in send/receive order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends one user message and returns the single model reply. Taking
    /// `&mut self` makes overlapping sends within a session unrepresentable,
    /// so turn order is strict by construction. On failure the user message
    /// stays in the transcript and no model message is appended; the session
    /// remains usable.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<ChatMessage, PathError> {
        self.messages.push(ChatMessage {
            role: Role::User,
            text: text.into(),
        });

        let contents: Vec<serde_json::Value> = self
            .messages
            .iter()
            .map(|m| {
                json!({
                    "role": m.role.as_str(),
                    "parts": [{ "text": m.text }]
                })
            })
            .collect();

        let body = json!({
            "contents": contents,
            "systemInstruction": { "parts": [{ "text": self.system_instruction }] }
        });

        let reply_text = match self.client.generate_content(body).await {
            Ok(response) => response
                .first_text()
                .ok_or_else(|| PathError::Parse("no text content in chat response".into())),
            Err(e) => Err(e),
        };

        match reply_text {
            Ok(text) => {
                let reply = ChatMessage {
                    role: Role::Model,
                    text,
                };
                self.messages.push(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                warn!("chat send failed: {e}");
                Err(e)
            }
        }
    }
}
