// domain for direct messaging
pub mod commands;
pub mod entity;

pub use commands::SendMessage;
pub use entity::Message;
