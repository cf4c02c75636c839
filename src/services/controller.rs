// src/services/controller.rs
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::services::api_client::ApiClient;
use crate::services::conversation::{Conversation, Message};

pub const GREETING: &str = "Hello! Ask me about Nextflow.";
pub const NO_REPLY: &str = "No reply";
pub const FALLBACK_REPLY: &str = "Oops! Something went wrong.";

#[derive(Debug, Default)]
struct ControllerState {
    conversation: Conversation,
    session_id: Option<String>,
}

/// Owns the conversation and the session token, and mediates between input
/// and the chat endpoint. Clones share state, so several sends may be in
/// flight at once; replies append in arrival order with no sequencing
/// guarantee across turns.
#[derive(Clone)]
pub struct ChatController {
    state: Arc<RwLock<ControllerState>>,
    client: ApiClient,
}

impl ChatController {
    pub fn new(client: ApiClient) -> Self {
        let mut conversation = Conversation::new();
        conversation.push(Message::bot(GREETING));

        Self {
            state: Arc::new(RwLock::new(ControllerState {
                conversation,
                session_id: None,
            })),
            client,
        }
    }

    /// Run one full chat turn. Returns the bot message appended for this
    /// turn, or `None` when the input trims to empty and nothing happens.
    ///
    /// Failures never escape: any transport error, non-success status, or
    /// malformed body appends the fixed fallback message and leaves the
    /// session token as it was.
    pub async fn send_message(&self, text: &str) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        // The user message lands before any network activity resolves.
        let session_id = {
            let mut state = self.state.write().await;
            state.conversation.push(Message::user(text));
            state.session_id.clone()
        };

        match self.client.send(text, session_id.as_deref()).await {
            Ok(response) => {
                let reply = response.reply.unwrap_or_else(|| NO_REPLY.to_string());
                let msg = Message::bot(reply);

                let mut state = self.state.write().await;
                debug!(session_id = %response.session_id, "chat turn completed");
                state.session_id = Some(response.session_id);
                state.conversation.push(msg.clone());
                Some(msg)
            }
            Err(err) => {
                error!(error = %err, "chat request failed");
                let msg = Message::bot(FALLBACK_REPLY);

                let mut state = self.state.write().await;
                state.conversation.push(msg.clone());
                Some(msg)
            }
        }
    }

    /// Snapshot of the transcript, in append order.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.conversation.messages().to_vec()
    }

    pub async fn session_id(&self) -> Option<String> {
        self.state.read().await.session_id.clone()
    }
}
