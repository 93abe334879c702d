//! Sinkhole DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod errors;

pub use config::{CliOverrides, Config};
pub use dns_message::{Flags, Header, Message, Question, ResourceRecord};
pub use errors::ProtocolError;
