pub mod chat;
pub mod send;
