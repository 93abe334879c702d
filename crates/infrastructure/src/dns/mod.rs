pub mod codec;
pub mod server;
pub mod static_answers;

pub use codec::{MessageDecoder, MessageEncoder};
pub use server::{serve, start_dns_server, DnsServerHandler};
pub use static_answers::StaticAnswerSource;

/// Largest datagram the server reads in one receive (RFC 1035 §4.2.1).
/// Anything longer is truncated by the transport before the codec sees it.
pub const MAX_DATAGRAM_LEN: usize = 512;
