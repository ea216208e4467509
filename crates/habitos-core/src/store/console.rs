//! Console conversation log: send/reply flow, pinning, mode selection.

use crate::console::{
    ConsoleMode, Conversation, ConversationMessage, MessageRole, PinnedInsight, Provider,
};

use super::ProgressStore;

/// Character budget for a conversation title derived from its first message.
const TITLE_MAX_CHARS: usize = 40;

fn conversation_title(content: &str) -> String {
    if content.chars().count() > TITLE_MAX_CHARS {
        let mut title: String = content.chars().take(TITLE_MAX_CHARS).collect();
        title.push_str("...");
        title
    } else {
        content.to_string()
    }
}

impl ProgressStore {
    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }

    pub fn set_console_mode(&mut self, mode: ConsoleMode) {
        tracing::debug!(target: "habitos::console", mode = mode.as_str(), "console mode set");
        self.console_mode = mode;
    }

    /// Makes `conversation_id` the active conversation (or none).
    pub fn set_active_conversation(&mut self, conversation_id: Option<String>) {
        self.active_conversation_id = conversation_id;
    }

    /// Clears the active conversation; the next message starts a fresh one.
    pub fn start_new_conversation(&mut self) {
        self.active_conversation_id = None;
    }

    /// Appends the user's message and the responder's reply to the active
    /// conversation, creating one on demand, titled from the first message
    /// and tagged with the current mode. Returns the reply text.
    pub fn send_message(&mut self, content: impl Into<String>) -> String {
        let content = content.into();
        let now = self.clock().now();

        let conversation_id = match &self.active_conversation_id {
            Some(id) => id.clone(),
            None => {
                let conversation = Conversation {
                    id: crate::shared::new_record_id(),
                    provider: self.provider,
                    mode: self.console_mode,
                    title: conversation_title(&content),
                    tags: vec![self.console_mode.as_str().to_string()],
                    created_at: now,
                    updated_at: now,
                };
                let id = conversation.id.clone();
                tracing::debug!(
                    target: "habitos::console",
                    mode = self.console_mode.as_str(),
                    "conversation started"
                );
                self.conversations.insert(0, conversation);
                self.active_conversation_id = Some(id.clone());
                id
            }
        };

        let reply = self.respond(self.console_mode, &content);

        self.messages.push(ConversationMessage {
            id: crate::shared::new_record_id(),
            conversation_id: conversation_id.clone(),
            role: MessageRole::User,
            content,
            provider: self.provider,
            is_pinned: false,
            created_at: now,
        });
        self.messages.push(ConversationMessage {
            id: crate::shared::new_record_id(),
            conversation_id: conversation_id.clone(),
            role: MessageRole::Assistant,
            content: reply.clone(),
            provider: self.provider,
            is_pinned: false,
            created_at: now,
        });

        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            conversation.updated_at = now;
        }

        reply
    }

    /// Pins a message's content under `topic` and marks the message pinned.
    /// Unknown message ids are a no-op.
    pub fn pin_insight(&mut self, message_id: &str, topic: impl Into<String>) {
        let now = self.clock().now();
        let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) else {
            return;
        };
        message.is_pinned = true;
        let insight = PinnedInsight {
            id: crate::shared::new_record_id(),
            content: message.content.clone(),
            source: message.provider,
            conversation_id: message.conversation_id.clone(),
            topic: topic.into(),
            created_at: now,
        };
        self.pinned_insights.push(insight);
    }
}
