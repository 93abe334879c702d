use thiserror::Error;

/// Failures raised by the wire codec.
///
/// A decode failure covers the whole message: there is no partial recovery,
/// and the server drops the datagram without replying. An encode failure
/// aborts the message rather than emit truncated wire data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Label exceeds 63 bytes: {0}")]
    LabelTooLong(usize),

    #[error("Encoded name exceeds 255 bytes: {0}")]
    NameTooLong(usize),

    #[error("Compression pointer loop detected")]
    CompressionCycle,
}
