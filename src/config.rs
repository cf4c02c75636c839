// src/config.rs

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/chat";

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
}

impl Config {
    /// Endpoint precedence: CLI flag, then CHATBOT_ENDPOINT, then the default.
    pub fn resolve(endpoint_flag: Option<String>) -> Self {
        let endpoint = endpoint_flag
            .or_else(|| std::env::var("CHATBOT_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }
}
