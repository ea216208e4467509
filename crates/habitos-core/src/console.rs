//! AI console types and the responder seam.
//!
//! The console keeps a conversation log (conversations, messages, pinned
//! insights) inside the store. Reply generation lives behind the narrow
//! [`ConsoleResponder`] strategy so the store never knows where replies come
//! from; the canned implementation ships in the `habitos-console` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Provider & mode
// ---------------------------------------------------------------------------

/// Model family console messages are attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Claude,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::Gemini => "gemini",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "claude" => Some(Provider::Claude),
            "gemini" => Some(Provider::Gemini),
            _ => None,
        }
    }
}

/// Advisory voice the console answers in. Each mode has its own response
/// table in the canned responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMode {
    /// Balanced observations over current tracking data.
    #[default]
    Default,
    /// Execution pressure: direct orders, no deliberation.
    Warlord,
    /// Systems analysis: structure, allocation, failure modes.
    Architect,
    /// Identity and agency framing.
    Sovereign,
    /// Learning, synthesis, input/output pipelines.
    Noetic,
    /// Body signals and physical protocol.
    Somatic,
    /// Pattern excavation and countermoves.
    Shadow,
    /// Multi-voice council assessment.
    Pantheon,
}

impl ConsoleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMode::Default => "default",
            ConsoleMode::Warlord => "warlord",
            ConsoleMode::Architect => "architect",
            ConsoleMode::Sovereign => "sovereign",
            ConsoleMode::Noetic => "noetic",
            ConsoleMode::Somatic => "somatic",
            ConsoleMode::Shadow => "shadow",
            ConsoleMode::Pantheon => "pantheon",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "default" => Some(ConsoleMode::Default),
            "warlord" => Some(ConsoleMode::Warlord),
            "architect" => Some(ConsoleMode::Architect),
            "sovereign" => Some(ConsoleMode::Sovereign),
            "noetic" => Some(ConsoleMode::Noetic),
            "somatic" => Some(ConsoleMode::Somatic),
            "shadow" => Some(ConsoleMode::Shadow),
            "pantheon" => Some(ConsoleMode::Pantheon),
            _ => None,
        }
    }

    /// All modes, table order.
    pub fn all() -> [Self; 8] {
        [
            ConsoleMode::Default,
            ConsoleMode::Warlord,
            ConsoleMode::Architect,
            ConsoleMode::Sovereign,
            ConsoleMode::Noetic,
            ConsoleMode::Somatic,
            ConsoleMode::Shadow,
            ConsoleMode::Pantheon,
        ]
    }
}

// ---------------------------------------------------------------------------
// Conversation log
// ---------------------------------------------------------------------------

/// Who authored a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// A console conversation. Created on demand by the first message sent while
/// no conversation is active; titled from that message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub provider: Provider,
    pub mode: ConsoleMode,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,
    pub conversation_id: String,
    pub role: MessageRole,
    pub content: String,
    pub provider: Provider,
    #[serde(default)]
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// A message's content pinned under a topic for later retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedInsight {
    pub id: String,
    pub content: String,
    pub source: Provider,
    pub conversation_id: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Responder seam
// ---------------------------------------------------------------------------

/// Reply-generation strategy for the console. Implementations map
/// `(mode, user text)` to a reply; the store attributes the result to the
/// current provider and appends it to the conversation.
pub trait ConsoleResponder: Send + Sync {
    fn respond(&self, mode: ConsoleMode, user_text: &str) -> String;
}
