use async_trait::async_trait;
use sinkhole_dns_domain::{Question, ResourceRecord};

/// Source of answer records for a single question.
///
/// Implementations decide what this server claims about a name. The
/// use case only assembles whatever they return into the response.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    async fn answers_for(&self, question: &Question) -> Vec<ResourceRecord>;
}
