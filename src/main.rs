use anyhow::Result;
use clap::Parser;

use chatbot_client::config::Config;
use chatbot_client::services::api_client::ApiClient;
use chatbot_client::services::controller::ChatController;
use chatbot_client::{prompt, render};

/// Terminal client for the Nextflow docs chat assistant.
#[derive(Parser, Debug)]
#[command(name = "chatbot-client")]
#[command(about = "Chat with the Nextflow docs assistant from your terminal", long_about = None)]
struct Cli {
    /// Chat endpoint URL (overrides CHATBOT_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.endpoint);
    tracing::debug!(endpoint = %config.endpoint, "starting chat client");

    let controller = ChatController::new(ApiClient::new(config.endpoint));

    render::print_transcript(&controller.messages().await);

    loop {
        let line = prompt::ask_chat_turn()?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(reply) = controller.send_message(trimmed).await {
            render::print_message(&reply);
        }
    }

    Ok(())
}
