pub mod header;
pub mod message;
pub mod question;
pub mod record;

pub use header::{Flags, Header};
pub use message::Message;
pub use question::Question;
pub use record::ResourceRecord;
