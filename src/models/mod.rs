pub mod color;
pub mod message;
pub mod user;
