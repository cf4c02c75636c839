pub mod api_client;
pub mod controller;
pub mod conversation;
