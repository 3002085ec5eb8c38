//! Chroma Chip: harvests hex colors from messages addressed to the bot and
//! composes the reply that goes out with the rendered chip.

pub mod app;
pub mod core;
pub mod events;
pub mod models;
pub mod utils;
