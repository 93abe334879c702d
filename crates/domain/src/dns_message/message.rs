use super::{Header, Question, ResourceRecord};

/// A complete DNS message: header plus the four wire sections in order.
///
/// A message is built fresh for each received datagram and discarded once
/// the reply has been sent; nothing is shared across datagrams.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,

    pub questions: Vec<Question>,

    pub answers: Vec<ResourceRecord>,

    pub authority: Vec<ResourceRecord>,

    pub additional: Vec<ResourceRecord>,
}
