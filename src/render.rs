// src/render.rs
use colored::Colorize;

use crate::services::conversation::{Message, Sender};

/// One styled line per message, tagged by sender.
pub fn format_message(msg: &Message) -> String {
    match msg.sender {
        Sender::Bot => format!("{} {}", "bot>".cyan().bold(), msg.text),
        Sender::User => format!("{} {}", "you>".green().bold(), msg.text),
    }
}

pub fn print_message(msg: &Message) {
    println!("{}", format_message(msg));
}

pub fn print_transcript(messages: &[Message]) {
    for msg in messages {
        print_message(msg);
    }
}
