// src/prompt.rs
use anyhow::Result;
use dialoguer::Input;

/// Read one chat turn from the terminal. Empty input is allowed here; the
/// controller decides whether it is worth sending.
pub fn ask_chat_turn() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("you")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}
