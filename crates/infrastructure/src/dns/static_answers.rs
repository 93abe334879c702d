use async_trait::async_trait;
use sinkhole_dns_application::ports::AnswerSource;
use sinkhole_dns_domain::{Question, ResourceRecord};
use std::net::Ipv4Addr;

/// Answer source that claims every name resolves to one fixed IPv4 address.
///
/// This is the whole point of a sinkhole: no upstream lookup ever happens,
/// each question gets exactly one fabricated A record.
pub struct StaticAnswerSource {
    address: Ipv4Addr,
    ttl: u32,
}

impl StaticAnswerSource {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }
}

#[async_trait]
impl AnswerSource for StaticAnswerSource {
    async fn answers_for(&self, question: &Question) -> Vec<ResourceRecord> {
        vec![ResourceRecord::a_record(
            question.name.clone(),
            self.address,
            self.ttl,
        )]
    }
}
