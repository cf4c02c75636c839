use std::collections::HashSet;

use chatbot_client::render::format_message;
use chatbot_client::services::conversation::{Conversation, Message, Sender};

#[test]
fn messages_append_in_order() {
    let mut convo = Conversation::new();
    assert!(convo.is_empty());

    convo.push(Message::bot("welcome"));
    convo.push(Message::user("hi"));
    convo.push(Message::bot("hello"));

    assert_eq!(convo.len(), 3);
    let texts: Vec<&str> = convo.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["welcome", "hi", "hello"]);

    let senders: Vec<Sender> = convo.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
}

#[test]
fn message_ids_are_unique() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let msg = Message::user("x");
        assert!(seen.insert(msg.id), "duplicate message id generated");
    }
}

#[test]
fn transcript_line_is_tagged_by_sender() {
    colored::control::set_override(false);

    assert_eq!(format_message(&Message::bot("hi there")), "bot> hi there");
    assert_eq!(format_message(&Message::user("hello")), "you> hello");
}
