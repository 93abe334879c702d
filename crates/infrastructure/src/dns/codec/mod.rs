//! DNS wire-format codec (RFC 1035 §4).
//!
//! [`MessageDecoder`] turns a raw datagram into a structured
//! [`Message`](sinkhole_dns_domain::Message); [`MessageEncoder`] does the
//! reverse. Both are pure in-memory transforms with no I/O of their own.

pub mod decoder;
pub mod encoder;
pub mod name;

pub use decoder::MessageDecoder;
pub use encoder::MessageEncoder;
