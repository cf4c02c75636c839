pub mod config;
pub mod error;
pub mod message;
pub mod prompt;
pub mod render;
pub mod services;
