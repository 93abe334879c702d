use super::codec::{MessageDecoder, MessageEncoder};
use super::MAX_DATAGRAM_LEN;
use sinkhole_dns_application::use_cases::AnswerQueryUseCase;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Turns one received datagram into one reply datagram.
pub struct DnsServerHandler {
    use_case: Arc<AnswerQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decode, answer, re-encode. Returns `None` when the datagram yields
    /// no reply: a malformed query has no well-defined meaning, so it is
    /// logged and dropped rather than answered with a guess.
    pub async fn handle_datagram(&self, datagram: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        let query = match MessageDecoder::decode(datagram) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, peer = %peer, len = datagram.len(), "Dropping malformed query");
                return None;
            }
        };

        debug!(
            id = query.header.id,
            questions = query.questions.len(),
            peer = %peer,
            "Query received"
        );

        let response = self.use_case.execute(query).await;

        match MessageEncoder::encode(&response) {
            Ok(wire) => Some(wire),
            Err(e) => {
                error!(error = %e, peer = %peer, "Failed to encode response");
                None
            }
        }
    }
}

/// Binds the UDP socket and serves in the foreground.
pub async fn start_dns_server(bind_addr: &str, handler: DnsServerHandler) -> io::Result<()> {
    let socket = UdpSocket::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "DNS server listening");
    serve(socket, handler).await
}

/// Sequential datagram loop: each query is handled start to finish before
/// the next receive. The receive buffer is scoped to one iteration so a
/// datagram can never observe bytes of its predecessor. Socket errors are
/// logged and the loop keeps serving.
pub async fn serve(socket: UdpSocket, handler: DnsServerHandler) -> io::Result<()> {
    loop {
        let mut buf = [0u8; MAX_DATAGRAM_LEN];
        let (len, peer) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP receive failed");
                continue;
            }
        };

        if let Some(response) = handler.handle_datagram(&buf[..len], peer).await {
            if let Err(e) = socket.send_to(&response, peer).await {
                warn!(error = %e, peer = %peer, "Failed to send response");
            }
        }
    }
}
