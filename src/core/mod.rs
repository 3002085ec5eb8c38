pub mod chat;
pub mod listener;
pub mod phrases;
pub mod reply;
