// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub session_id: Option<&'a str>,
    pub message: &'a str,
}

/// `reply` is optional: a well-formed success response without it still
/// counts as a turn, rendered with a placeholder text.
#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub session_id: String,
    #[serde(default)]
    pub reply: Option<String>,
}
