// src/error.rs
use thiserror::Error;

/// Everything that can go wrong with a chat exchange collapses into one kind:
/// transport failures, non-success statuses, and malformed response bodies
/// are all `RequestFailed`. The caller never distinguishes between them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("chat request failed")]
    RequestFailed(#[from] reqwest::Error),
}
